pub mod app;
pub mod auth;
pub mod common;

pub use app::{AppConfig, AppMetadata, ENV_PREFIX};
pub use auth::{AppEngineConfig, AuthConfig};
pub use common::{
    CacheConfig, ConfigError, DatabaseConfig, LogFormat, MetricsConfig, ObservabilityConfig,
    ServerConfig, Validate, WithDefaults,
};

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
