use chrono::NaiveDate;

use crate::converters::row::{CustomAttributeDefinition, RowConverter};
use crate::entities::v1::custom_attribute_definitions::AttributeType;

const TRUE: &str = "TRUE";
const FALSE: &str = "FALSE";

/// Stored representation of an imported cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedValue {
    /// Cell left blank on an optional attribute
    Empty,
    Value(String),
    /// `Map:Person` cell, resolved by email when the row is saved
    Person(String),
}

/// Column of a spreadsheet row backed by a custom attribute. The column key
/// is the definition title.
#[derive(Clone, Debug)]
pub struct CustomAttributeColumnHandler<'a> {
    row: &'a RowConverter,
    key: String,
}

impl<'a> CustomAttributeColumnHandler<'a> {
    pub fn new<T: ToString>(row: &'a RowConverter, key: T) -> Self {
        Self {
            row,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get_ca_definition(&self) -> Option<&'a CustomAttributeDefinition> {
        self.row.definition(&self.key)
    }

    /// Display string of the value stored for this column.
    ///
    /// `Some("")` when the column has no definition, `None` when the object
    /// carries no value for it.
    pub fn get_value(&self) -> Option<String> {
        let Some(definition) = self.get_ca_definition() else {
            return Some(String::new());
        };

        let value = self
            .row
            .custom_attribute_values()
            .iter()
            .find(|value| value.custom_attribute_id == definition.id)?;

        if value.attribute_type.is_map() {
            if value.attribute_object_id.is_none() {
                return None;
            }

            return value
                .attribute_object
                .as_ref()
                .map(|object| object.email.clone());
        }

        match value.attribute_type {
            AttributeType::Checkbox => Some(checkbox_display(value.attribute_value.as_deref())),
            _ => value.attribute_value.clone(),
        }
    }

    /// Converts a raw cell into what gets stored for this column
    pub fn parse_item(&self, raw: &str) -> Result<ParsedValue, String> {
        let Some(definition) = self.get_ca_definition() else {
            return Err(format!("Unknown custom attribute \"{}\"", self.key));
        };

        let raw = raw.trim();

        if raw.is_empty() {
            if definition.mandatory {
                return Err(format!("\"{}\" is mandatory", definition.title));
            }

            return Ok(ParsedValue::Empty);
        }

        match definition.attribute_type {
            AttributeType::Checkbox => parse_checkbox(raw).map(ParsedValue::Value),
            AttributeType::Date => parse_date(raw).map(ParsedValue::Value),
            AttributeType::Dropdown => parse_dropdown(raw, &definition.options).map(ParsedValue::Value),
            AttributeType::MapPerson => Ok(ParsedValue::Person(raw.to_string())),
            AttributeType::Text | AttributeType::RichText => Ok(ParsedValue::Value(raw.to_string())),
        }
    }
}

/// Blank counts as unchecked; anything that is not an integer renders
/// unchecked with a warning. Integers of any width are accepted.
fn checkbox_display(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).filter(|raw| !raw.is_empty()).unwrap_or("0");
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        ::tracing::warn!(value = %raw, "Checkbox value is not an integer");

        return FALSE.to_string();
    }

    if digits.bytes().any(|b| b != b'0') {
        TRUE.to_string()
    } else {
        FALSE.to_string()
    }
}

fn parse_checkbox(raw: &str) -> Result<String, String> {
    match raw.to_lowercase().as_str() {
        "yes" | "true" | "1" => Ok("1".to_string()),
        "no" | "false" | "0" => Ok("0".to_string()),
        _ => Err(format!("\"{}\" is not a valid checkbox value, use yes/no or true/false", raw)),
    }
}

fn parse_date(raw: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| format!("\"{}\" is not a valid date, use MM/DD/YYYY or YYYY-MM-DD", raw))
}

fn parse_dropdown(raw: &str, options: &[String]) -> Result<String, String> {
    options
        .iter()
        .find(|option| option.to_lowercase() == raw.to_lowercase())
        .cloned()
        .ok_or_else(|| format!("\"{}\" is not one of: {}", raw, options.join(", ")))
}
