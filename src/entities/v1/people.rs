use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
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
