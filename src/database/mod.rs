//! Database connection helpers
//!
//! Connections are plain sea-orm pools; migrations live in the
//! `lighter-compliance-migration` workspace crate.

use std::time::Duration;

use lighter_compliance_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Open a connection pool from configuration
#[::tracing::instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .sqlx_logging(config.log_queries);

    let db = Database::connect(options).await?;

    ::tracing::info!("Database connected");

    Ok(db)
}

/// In-memory SQLite pool. Pinned to one connection since every
/// connection to `sqlite::memory:` opens its own empty database.
pub async fn memory() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Apply every pending migration
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;

    ::tracing::info!("Database migrations applied");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_database_migrates() {
        let db = memory().await.unwrap();

        assert!(migrate(&db).await.is_ok());
        assert_eq!(db.ping().await, Ok(()));
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let db = memory().await.unwrap();

        migrate(&db).await.unwrap();
        assert!(migrate(&db).await.is_ok());
    }
}
