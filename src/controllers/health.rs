//! Health check endpoints

use actix_web::web::{Data, Json};
use actix_web::{HttpResponse, Responder};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::cache::{Cache, CacheStats, LocalCache};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LivenessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Local cache state reported next to the database
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CacheHealth {
    pub enabled: bool,
    pub stats: CacheStats,
}

/// Health response including database connectivity
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
    pub cache: CacheHealth,
}

/// Liveness check, never touches a dependency
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = LivenessResponse),
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    let response = LivenessResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    };

    ::tracing::debug!("Liveness check: healthy");
    Json(response)
}

/// Health check including database connectivity and cache statistics
#[utoipa::path(
    get,
    path = "/health/db",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database unavailable", body = HealthResponse),
    )
)]
#[get("/health/db")]
pub async fn health_db(db: Data<DatabaseConnection>, cache: Data<LocalCache>) -> impl Responder {
    let connected = db.ping().await.is_ok();
    let stats = cache.stats().await.unwrap_or_else(|e| {
        ::tracing::error!(error = %e, "Failed to read cache statistics");
        CacheStats::default()
    });

    let response = HealthResponse {
        status: if connected { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
        cache: CacheHealth {
            enabled: cache.is_enabled(),
            stats,
        },
    };

    if connected {
        HttpResponse::Ok().json(response)
    } else {
        ::tracing::warn!("Database health check failed");
        HttpResponse::ServiceUnavailable().json(response)
    }
}
