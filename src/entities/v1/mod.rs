pub mod prelude;

pub mod custom_attribute_definitions;
pub mod custom_attribute_values;
pub mod people;
