pub use super::custom_attribute_definitions::Entity as CustomAttributeDefinitions;
pub use super::custom_attribute_values::Entity as CustomAttributeValues;
pub use super::people::Entity as People;
