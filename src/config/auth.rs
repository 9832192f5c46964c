use serde::{Deserialize, Serialize};

use super::common::*;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// App-to-app login through platform trust headers
    #[serde(default = "AppEngineConfig::default")]
    pub appengine: AppEngineConfig,
}

/// Trust header login configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppEngineConfig {
    /// Application ids allowed to act on behalf of a user.
    /// An empty list rejects every inbound app id.
    #[serde(default)]
    pub allowed_app_ids: Vec<String>,
}

impl AppEngineConfig {
    pub fn new<I, T>(allowed_app_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            allowed_app_ids: allowed_app_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_allowed(&self, app_id: &str) -> bool {
        self.allowed_app_ids.iter().any(|allowed| allowed == app_id)
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.appengine.validate()
    }
}

impl Validate for AppEngineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_app_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "auth.appengine.allowed_app_ids cannot contain empty ids".to_string(),
            ));
        }
        Ok(())
    }
}

impl WithDefaults for AuthConfig {
    fn with_defaults() -> Self {
        Self::default()
    }
}
