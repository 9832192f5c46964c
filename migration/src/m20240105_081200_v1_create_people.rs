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
                    .table(Person::Table)
                    .col(
                        ColumnDef::new(Person::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Person::Name).string().not_null())
                    .col(ColumnDef::new(Person::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Person::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Person::UpdatedAt).timestamp().not_null())
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Person::Table)
                    .col(Person::Email)
                    .name("idx_people_email")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Person::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Person {
    #[sea_orm(iden = "people")]
    Table,
    Id,
    Name,
    Email,
    CreatedAt,
    UpdatedAt,
}
