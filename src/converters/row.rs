use serde::{Deserialize, Serialize};

use crate::entities::v1::custom_attribute_definitions::{self, AttributeType};
use crate::entities::v1::{custom_attribute_values, people};

/// Definition of a custom attribute column, detached from the database row
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAttributeDefinition {
    pub id: i32,
    pub title: String,
    pub attribute_type: AttributeType,
    pub mandatory: bool,
    pub options: Vec<String>,
}

impl From<custom_attribute_definitions::Model> for CustomAttributeDefinition {
    fn from(model: custom_attribute_definitions::Model) -> Self {
        let options = model.options();

        Self {
            id: model.id,
            title: model.title,
            attribute_type: model.attribute_type,
            mandatory: model.mandatory,
            options,
        }
    }
}

/// Object a `Map:*` value points at
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeObject {
    pub id: i32,
    pub email: String,
}

impl From<people::Model> for AttributeObject {
    fn from(person: people::Model) -> Self {
        Self {
            id: person.id,
            email: person.email,
        }
    }
}

/// A stored value together with the type of the definition it belongs to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomAttributeValue {
    pub custom_attribute_id: i32,
    pub attribute_type: AttributeType,
    pub attribute_value: Option<String>,
    pub attribute_object_id: Option<i32>,
    pub attribute_object: Option<AttributeObject>,
}

impl CustomAttributeValue {
    pub fn new(
        custom_attribute_id: i32,
        attribute_type: AttributeType,
        attribute_value: Option<&str>,
    ) -> Self {
        Self {
            custom_attribute_id,
            attribute_type,
            attribute_value: attribute_value.map(ToString::to_string),
            attribute_object_id: None,
            attribute_object: None,
        }
    }

    pub fn mapped(custom_attribute_id: i32, attribute_type: AttributeType, object: AttributeObject) -> Self {
        Self {
            custom_attribute_id,
            attribute_type,
            attribute_value: None,
            attribute_object_id: Some(object.id),
            attribute_object: Some(object),
        }
    }

    /// Joins a stored value with its definition. Values whose definition is
    /// not among `definitions` are dropped.
    pub fn from_model(
        model: custom_attribute_values::Model,
        person: Option<people::Model>,
        definitions: &[CustomAttributeDefinition],
    ) -> Option<Self> {
        let definition = definitions
            .iter()
            .find(|definition| definition.id == model.custom_attribute_id)?;

        Some(Self {
            custom_attribute_id: model.custom_attribute_id,
            attribute_type: definition.attribute_type,
            attribute_value: model.attribute_value,
            attribute_object_id: model.attribute_object_id,
            attribute_object: person.map(AttributeObject::from),
        })
    }
}

/// One object being exported or imported: its definitions keyed by title
/// and the values stored on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowConverter {
    pub object_type: String,
    pub object_id: i32,
    definitions: Vec<CustomAttributeDefinition>,
    values: Vec<CustomAttributeValue>,
}

impl RowConverter {
    pub fn new<T: ToString>(
        object_type: T,
        object_id: i32,
        definitions: Vec<CustomAttributeDefinition>,
        values: Vec<CustomAttributeValue>,
    ) -> Self {
        Self {
            object_type: object_type.to_string(),
            object_id,
            definitions,
            values,
        }
    }

    pub fn definitions(&self) -> &[CustomAttributeDefinition] {
        &self.definitions
    }

    pub fn definition(&self, title: &str) -> Option<&CustomAttributeDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.title == title)
    }

    pub fn custom_attribute_values(&self) -> &[CustomAttributeValue] {
        &self.values
    }
}
