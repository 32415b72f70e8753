//! Aggregation caching using Moka.
//!
//! The same snapshot is rendered several ways (detail grid, accordion,
//! condensed grid, bank statement, PDF). The cache keeps one shared
//! aggregation per snapshot content so every view reads the same figures.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

use coop_shared::config::CacheConfig;
use tracing::debug;

use super::builder::AggregationBuilder;
use super::types::MonthlyAggregation;
use crate::snapshot::StatementSnapshot;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache of built aggregations keyed by snapshot content hash.
///
/// A changed snapshot hashes differently, so it never reads a stale
/// aggregation. Entries can also be dropped explicitly.
#[derive(Clone)]
pub struct AggregationCache {
    cache: Cache<String, Arc<MonthlyAggregation>>,
}

impl AggregationCache {
    /// Creates a new cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a new cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Creates a cache from application configuration.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_config(config.max_capacity, config.ttl_secs)
    }

    /// Returns the aggregation for `snapshot`, building it on a miss.
    ///
    /// The snapshot is hashed once per call; the key also covers the
    /// builder's classifier and column order.
    #[must_use]
    pub fn get_or_build(
        &self,
        snapshot: &StatementSnapshot,
        builder: &AggregationBuilder<'_>,
    ) -> Arc<MonthlyAggregation> {
        let snapshot_hash = snapshot.content_hash();
        let key = builder.cache_key(&snapshot_hash);

        if let Some(cached) = self.cache.get(&key) {
            debug!(hash = %snapshot_hash, "Aggregation cache hit");
            return cached;
        }
        debug!(
            hash = %snapshot_hash,
            months = snapshot.monthly_summary.len(),
            "Aggregation cache miss"
        );
        self.cache
            .get_with(key, || Arc::new(builder.build_hashed(snapshot, snapshot_hash)))
    }

    /// Returns the cached aggregation for `snapshot` without building.
    #[must_use]
    pub fn get(
        &self,
        snapshot: &StatementSnapshot,
        builder: &AggregationBuilder<'_>,
    ) -> Option<Arc<MonthlyAggregation>> {
        self.cache.get(&builder.cache_key(&snapshot.content_hash()))
    }

    /// Invalidates the entry for one snapshot built by `builder`.
    pub fn invalidate(&self, snapshot: &StatementSnapshot, builder: &AggregationBuilder<'_>) {
        self.cache
            .invalidate(&builder.cache_key(&snapshot.content_hash()));
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for AggregationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AggregationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregationCache")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}
