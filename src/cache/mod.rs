mod local;

pub use local::LocalCache;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;
use utoipa::ToSchema;

/// Read-through cache used for people and custom attribute definitions
#[async_trait]
pub trait Cache: Send + Sync + Debug {
    /// Returns None if the key doesn't exist or has expired
    async fn get<V>(&self, key: &str) -> Result<Option<V>>
    where
        V: for<'de> Deserialize<'de> + Send;

    async fn set<V>(&self, key: &str, value: &V, ttl: Duration) -> Result<()>
    where
        V: Serialize + Send + Sync;

    async fn delete(&self, key: &str) -> Result<()>;

    async fn stats(&self) -> Result<CacheStats>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub size: usize,
    /// Hits over lookups, 0.0 when nothing was looked up yet
    pub hit_rate: f64,
}

impl CacheStats {
    pub fn calculate_hit_rate(&mut self) {
        let total = self.hits + self.misses;
        self.hit_rate = if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        };
    }
}

/// Builder for consistent cache key naming
pub struct CacheKey;

impl CacheKey {
    /// Person resolved from a trust header, keyed by email
    pub fn person(email: impl std::fmt::Display) -> String {
        format!("person:{}", email)
    }

    /// All custom attribute definitions of one object type
    pub fn definitions(definition_type: impl std::fmt::Display) -> String {
        format!("ca_definitions:{}", definition_type)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    async fn test_cache_key_person() {
        let key = super::CacheKey::person("user@example.com");
        assert_eq!(key, "person:user@example.com");
    }

    #[test]
    async fn test_cache_key_definitions() {
        let key = super::CacheKey::definitions("control");
        assert_eq!(key, "ca_definitions:control");
    }

    #[test]
    async fn test_cache_stats_calculate_hit_rate() {
        let mut stats = super::CacheStats {
            hits: 80,
            misses: 20,
            evictions: 0,
            size: 100,
            hit_rate: 0.0,
        };

        stats.calculate_hit_rate();
        assert_eq!(stats.hit_rate, 0.8);
    }

    #[test]
    async fn test_cache_stats_calculate_hit_rate_zero_total() {
        let mut stats = super::CacheStats::default();
        stats.calculate_hit_rate();
        assert_eq!(stats.hit_rate, 0.0);
    }
}
