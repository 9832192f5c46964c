pub mod custom_attribute;
