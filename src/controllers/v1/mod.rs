pub mod auth;
pub mod custom_attribute;
