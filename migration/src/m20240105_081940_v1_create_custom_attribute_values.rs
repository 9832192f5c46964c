use sea_orm_migration::prelude::*;

use crate::{
    m20240105_081200_v1_create_people::Person,
    m20240105_081512_v1_create_custom_attribute_definitions::CustomAttributeDefinition,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(CustomAttributeValue::Table)
                    .col(
                        ColumnDef::new(CustomAttributeValue::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CustomAttributeValue::CustomAttributeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomAttributeValue::AttributableType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomAttributeValue::AttributableId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomAttributeValue::AttributeValue)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CustomAttributeValue::AttributeObjectId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CustomAttributeValue::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomAttributeValue::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                CustomAttributeValue::Table,
                                CustomAttributeValue::CustomAttributeId,
                            )
                            .to(CustomAttributeDefinition::Table, CustomAttributeDefinition::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                CustomAttributeValue::Table,
                                CustomAttributeValue::AttributeObjectId,
                            )
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(CustomAttributeValue::Table)
                    .col(CustomAttributeValue::CustomAttributeId)
                    .col(CustomAttributeValue::AttributableType)
                    .col(CustomAttributeValue::AttributableId)
                    .unique()
                    .name("uq_custom_attribute_values_attributable")
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(CustomAttributeValue::Table)
                    .col(CustomAttributeValue::AttributableType)
                    .col(CustomAttributeValue::AttributableId)
                    .name("idx_custom_attribute_values_attributable")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(CustomAttributeValue::Table)
                    .take(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomAttributeValue {
    #[sea_orm(iden = "custom_attribute_values")]
    Table,
    Id,
    CustomAttributeId,
    AttributableType,
    AttributableId,
    AttributeValue,
    AttributeObjectId,
    CreatedAt,
    UpdatedAt,
}
