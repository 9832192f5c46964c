use anyhow::{Context, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

use super::{Cache, CacheStats};
use crate::config::CacheConfig;

#[derive(Debug, Clone)]
struct CacheEntry {
    /// bincode encoded value
    data: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-process cache on a sharded DashMap.
///
/// A disabled cache accepts writes and answers every read with a miss.
#[derive(Debug)]
pub struct LocalCache {
    store: Arc<DashMap<String, CacheEntry>>,
    enabled: bool,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: Arc<AtomicU64>,
    cleanup_handle: Option<JoinHandle<()>>,
}

impl LocalCache {
    pub fn new() -> Self {
        Self::from_config(&CacheConfig::default())
    }

    pub fn disabled() -> Self {
        Self::from_config(&CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        })
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        let shards = if config.shards == 0 {
            num_cpus::get() * 4
        } else {
            config.shards
        };
        // DashMap requires a power of two shard count
        let store = Arc::new(DashMap::with_shard_amount(shards.next_power_of_two().max(2)));
        let evictions = Arc::new(AtomicU64::new(0));

        let cleanup_handle = if config.enabled {
            Self::start_cleanup_task(Arc::clone(&store), Arc::clone(&evictions))
        } else {
            None
        };

        Self {
            store,
            enabled: config.enabled,
            ttl: Duration::from_secs(config.ttl),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions,
            cleanup_handle,
        }
    }

    /// Configured time-to-live for new entries
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sweeps expired entries every minute. Skipped outside a tokio runtime,
    /// expired entries are then dropped lazily on read.
    fn start_cleanup_task(
        store: Arc<DashMap<String, CacheEntry>>,
        evictions: Arc<AtomicU64>,
    ) -> Option<JoinHandle<()>> {
        let runtime = tokio::runtime::Handle::try_current().ok()?;

        Some(runtime.spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(60));

            loop {
                interval.tick().await;

                let before = store.len();
                store.retain(|_, entry| !entry.is_expired());
                let removed = before.saturating_sub(store.len());

                if removed > 0 {
                    evictions.fetch_add(removed as u64, Ordering::Relaxed);
                    ::tracing::debug!(removed, "Evicted expired cache entries");
                }
            }
        }))
    }
}

impl Default for LocalCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LocalCache {
    fn drop(&mut self) {
        if let Some(handle) = self.cleanup_handle.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl Cache for LocalCache {
    async fn get<V>(&self, key: &str) -> Result<Option<V>>
    where
        V: for<'de> Deserialize<'de> + Send,
    {
        if !self.enabled {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return Ok(None);
        }

        let data = match self.store.get(key) {
            Some(entry) if entry.is_expired() => {
                drop(entry);
                self.store.remove(key);
                self.evictions.fetch_add(1, Ordering::Relaxed);
                None
            }
            Some(entry) => Some(entry.data.clone()),
            None => None,
        };

        match data {
            Some(data) => {
                let value: V =
                    bincode::deserialize(&data).context("Failed to deserialize cached value")?;
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(value))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    async fn set<V>(&self, key: &str, value: &V, ttl: Duration) -> Result<()>
    where
        V: Serialize + Send + Sync,
    {
        if !self.enabled {
            return Ok(());
        }

        let data = bincode::serialize(value).context("Failed to serialize value")?;
        self.store.insert(key.to_string(), CacheEntry::new(data, ttl));

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.store.remove(key);
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        let mut stats = CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            size: self.store.len(),
            hit_rate: 0.0,
        };

        stats.calculate_hit_rate();

        Ok(stats)
    }
}
