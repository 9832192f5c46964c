use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(CustomAttributeDefinition::Table)
                    .col(
                        ColumnDef::new(CustomAttributeDefinition::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CustomAttributeDefinition::Title).string().not_null())
                    .col(
                        ColumnDef::new(CustomAttributeDefinition::AttributeType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomAttributeDefinition::DefinitionType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomAttributeDefinition::Mandatory)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CustomAttributeDefinition::MultiChoiceOptions)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CustomAttributeDefinition::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomAttributeDefinition::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(CustomAttributeDefinition::Table)
                    .col(CustomAttributeDefinition::DefinitionType)
                    .col(CustomAttributeDefinition::Title)
                    .unique()
                    .name("uq_custom_attribute_definitions_type_title")
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
                    .table(CustomAttributeDefinition::Table)
                    .take(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomAttributeDefinition {
    #[sea_orm(iden = "custom_attribute_definitions")]
    Table,
    Id,
    Title,
    AttributeType,
    DefinitionType,
    Mandatory,
    MultiChoiceOptions,
    CreatedAt,
    UpdatedAt,
}
