use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum AttributeType {
    #[sea_orm(string_value = "Text")]
    #[serde(rename = "Text")]
    Text,
    #[sea_orm(string_value = "Rich Text")]
    #[serde(rename = "Rich Text")]
    RichText,
    #[sea_orm(string_value = "Date")]
    #[serde(rename = "Date")]
    Date,
    #[sea_orm(string_value = "Checkbox")]
    #[serde(rename = "Checkbox")]
    Checkbox,
    #[sea_orm(string_value = "Dropdown")]
    #[serde(rename = "Dropdown")]
    Dropdown,
    #[sea_orm(string_value = "Map:Person")]
    #[serde(rename = "Map:Person")]
    MapPerson,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::RichText => "Rich Text",
            Self::Date => "Date",
            Self::Checkbox => "Checkbox",
            Self::Dropdown => "Dropdown",
            Self::MapPerson => "Map:Person",
        }
    }

    /// Types whose value points at another object instead of holding text.
    pub fn is_map(&self) -> bool {
        self.as_str().starts_with("Map:")
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "custom_attribute_definitions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub attribute_type: AttributeType,
    pub definition_type: String,
    pub mandatory: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub multi_choice_options: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::custom_attribute_values::Entity")]
    CustomAttributeValues,
}

impl Related<super::custom_attribute_values::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomAttributeValues.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
