pub use sea_orm_migration::prelude::*;

mod m20240105_081200_v1_create_people;
mod m20240105_081512_v1_create_custom_attribute_definitions;
mod m20240105_081940_v1_create_custom_attribute_values;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240105_081200_v1_create_people::Migration),
            Box::new(m20240105_081512_v1_create_custom_attribute_definitions::Migration),
            Box::new(m20240105_081940_v1_create_custom_attribute_values::Migration),
        ]
    }
}
