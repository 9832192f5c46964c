use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "custom_attribute_values")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub custom_attribute_id: i32,
    pub attributable_type: String,
    pub attributable_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub attribute_value: Option<String>,
    pub attribute_object_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::custom_attribute_definitions::Entity",
        from = "Column::CustomAttributeId",
        to = "super::custom_attribute_definitions::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CustomAttributeDefinitions,
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::AttributeObjectId",
        to = "super::people::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    People,
}

impl Related<super::custom_attribute_definitions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomAttributeDefinitions.def()
    }
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
