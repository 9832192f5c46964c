//! Spreadsheet row conversion for objects carrying custom attributes
pub mod handlers;
pub mod row;

pub use handlers::custom_attribute::{CustomAttributeColumnHandler, ParsedValue};
pub use row::{AttributeObject, CustomAttributeDefinition, CustomAttributeValue, RowConverter};
