//! Bounded, time-expiring cache of Pokémon summaries using moka

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::pokemon::{LookupKey, PokemonSummary};
use crate::domain::DomainError;

/// Configuration for the lookup cache
#[derive(Debug, Clone)]
pub struct LookupCacheConfig {
    /// Maximum number of entries
    pub max_capacity: u64,
    /// Time-to-live, measured from write
    pub ttl: Duration,
}

impl Default for LookupCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 200,
            ttl: Duration::from_secs(600), // 10 minutes
        }
    }
}

impl LookupCacheConfig {
    /// Sets the maximum capacity
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// Sets the time-to-live
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Thread-safe summary cache
///
/// Features:
/// - Capacity bound with TinyLFU admission and LRU eviction
/// - Fixed TTL from write, regardless of access pattern
/// - Single-flight loading: concurrent misses for one key share a single
///   `compute` call and its outcome
/// - Failed computations are never stored
#[derive(Debug, Clone)]
pub struct LookupCache {
    cache: MokaCache<LookupKey, Arc<PokemonSummary>>,
    config: LookupCacheConfig,
}

impl LookupCache {
    /// Creates a cache with the default 200 entry / 10 minute policy
    pub fn new() -> Self {
        Self::with_config(LookupCacheConfig::default())
    }

    /// Creates a cache with the given configuration
    pub fn with_config(config: LookupCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .name("pokemon")
            .max_capacity(config.max_capacity)
            .time_to_live(config.ttl)
            .build();

        Self { cache, config }
    }

    pub fn config(&self) -> &LookupCacheConfig {
        &self.config
    }

    /// Returns the cached summary for `key`, running `compute` on a miss.
    ///
    /// The cache's internal locks are not held while `compute` runs; only
    /// callers waiting on the same key block on it.
    pub async fn get_or_compute<F, Fut>(
        &self,
        key: &LookupKey,
        compute: F,
    ) -> Result<Arc<PokemonSummary>, DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<PokemonSummary, DomainError>>,
    {
        let entry = self
            .cache
            .entry_by_ref(key)
            .or_try_insert_with(async move { compute().await.map(Arc::new) })
            .await
            .map_err(Arc::unwrap_or_clone)?;

        if entry.is_fresh() {
            debug!(key = %key, "Cache miss, stored computed summary");
        } else {
            debug!(key = %key, "Cache hit");
        }

        Ok(entry.into_value())
    }

    /// Returns the cached summary without computing on a miss
    pub async fn get(&self, key: &LookupKey) -> Option<Arc<PokemonSummary>> {
        self.cache.get(key).await
    }

    /// Number of resident entries after pending maintenance has run
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    /// Drops every entry
    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self::new()
    }
}
