#[macro_use]
extern crate actix_web;

pub mod api;
pub mod cache;
pub mod config;
pub mod controllers;
pub mod converters;
pub mod database;
pub mod entities;
pub mod errors;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod requests;
pub mod responses;
pub mod router;
pub mod services;
pub mod telemetry;

// Testing utilities (always available for integration tests)
pub mod testing;

pub use cache::{Cache, CacheKey, CacheStats, LocalCache};
pub use errors::Error;
pub use metrics::{AppMetrics, MetricsMiddleware};
pub use middlewares::v1::auth::AppEngineUser;
