use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

use crate::cache::LocalCache;
use crate::config::AppEngineConfig;
use crate::entities::v1::custom_attribute_definitions::AttributeType;
use crate::entities::v1::{custom_attribute_definitions, custom_attribute_values, people};

/// App id accepted by [`appengine_config`]
pub const ALLOWED_APP_ID: &str = "allowed";

/// Returns an in-memory SQLite database with all migrations applied
///
/// # Panics
/// Panics if the connection or a migration fails, tests should fail fast
/// when setup is broken.
pub async fn database() -> DatabaseConnection {
    let db = crate::database::memory()
        .await
        .expect("Failed to connect to in-memory database");

    crate::database::migrate(&db)
        .await
        .expect("Failed to run migrations");

    db
}

pub fn cache() -> LocalCache {
    LocalCache::new()
}

pub fn appengine_config() -> AppEngineConfig {
    AppEngineConfig::new([ALLOWED_APP_ID])
}

pub async fn create_person(db: &DatabaseConnection, email: &str) -> Result<people::Model, DbErr> {
    let now = Utc::now().naive_utc();
    let name = email.split('@').next().unwrap_or(email).to_string();

    people::ActiveModel {
        name: Set(name),
        email: Set(email.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_definition(
    db: &DatabaseConnection,
    definition_type: &str,
    title: &str,
    attribute_type: AttributeType,
    options: Option<&str>,
) -> Result<custom_attribute_definitions::Model, DbErr> {
    let now = Utc::now().naive_utc();

    custom_attribute_definitions::ActiveModel {
        title: Set(title.to_string()),
        attribute_type: Set(attribute_type),
        definition_type: Set(definition_type.to_string()),
        mandatory: Set(false),
        multi_choice_options: Set(options.map(ToString::to_string)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_mandatory_definition(
    db: &DatabaseConnection,
    definition_type: &str,
    title: &str,
    attribute_type: AttributeType,
) -> Result<custom_attribute_definitions::Model, DbErr> {
    let definition = create_definition(db, definition_type, title, attribute_type, None).await?;
    let mut model: custom_attribute_definitions::ActiveModel = definition.into();
    model.mandatory = Set(true);

    model.update(db).await
}

pub async fn create_value(
    db: &DatabaseConnection,
    definition: &custom_attribute_definitions::Model,
    attributable_id: i32,
    attribute_value: Option<&str>,
    attribute_object_id: Option<i32>,
) -> Result<custom_attribute_values::Model, DbErr> {
    let now = Utc::now().naive_utc();

    custom_attribute_values::ActiveModel {
        custom_attribute_id: Set(definition.id),
        attributable_type: Set(definition.definition_type.clone()),
        attributable_id: Set(attributable_id),
        attribute_value: Set(attribute_value.map(ToString::to_string)),
        attribute_object_id: Set(attribute_object_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
