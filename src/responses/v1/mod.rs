pub mod custom_attribute;
pub mod person;
