//! Cache Manager Module
//!
//! The facade itself: point reads, fixed-TTL writes, and deletes against a
//! [`Store`], with hit/miss counters recorded on the way through. Holds no
//! entry state of its own; every call is a single round trip to the store.

use std::time::Duration;

use prometheus::Registry;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::{validate_key, CacheMetrics, CacheValue, RedisStore, Store};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache Manager ==
/// Caching facade over a remote key-value store.
///
/// Safe for concurrent use: operations take `&self`, counter increments are
/// atomic, and the store client is the sole arbiter of ordering between
/// concurrent writes to the same key (last-write-wins).
///
/// Exactly one counter moves per completed read: `cache_hit` when the key is
/// found, `cache_missed` when it is absent. Calls that fail in transport
/// move neither.
pub struct CacheManager<S = RedisStore> {
    store: S,
    metrics: CacheMetrics,
    ttl: Duration,
}

impl<S: Store> CacheManager<S> {
    // == Constructor ==
    /// Creates a facade over `store`, registering the hit/miss counters on
    /// `registry`. Every write carries the fixed `ttl`.
    ///
    /// Construct once per registry; a second registration on the same
    /// registry fails.
    pub fn new(store: S, registry: &Registry, ttl: Duration) -> Result<Self> {
        let metrics = CacheMetrics::register(registry)?;
        Ok(Self {
            store,
            metrics,
            ttl,
        })
    }

    // == Get ==
    /// Point lookup. Returns the stored payload as text, or `None` when the
    /// key does not exist (absence is a sentinel, never an error).
    ///
    /// Transport errors propagate unmodified and move no counter.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;

        match self.store.get(key).await? {
            Some(value) => {
                self.metrics.record_hit();
                debug!(key, "cache hit");
                Ok(Some(value))
            }
            None => {
                self.metrics.record_miss();
                debug!(key, "cache miss");
                Ok(None)
            }
        }
    }

    // == Set ==
    /// Writes `value` under `key` with the fixed TTL, overwriting any
    /// previous value.
    ///
    /// Scalars pass through unmodified; structured data goes through
    /// [`CacheValue::json`] (or [`set_json`](Self::set_json)), which fails
    /// before the store is touched if the value cannot be serialized.
    pub async fn set(&self, key: &str, value: impl Into<CacheValue>) -> Result<()> {
        validate_key(key)?;

        let value = value.into();
        self.store.set(key, &value, self.ttl).await?;
        debug!(key, ttl_secs = self.ttl.as_secs(), "cache set");
        Ok(())
    }

    // == Set JSON ==
    /// Serializes `value` to JSON text and writes it under `key`.
    ///
    /// Returns [`CacheError::Serialize`] without writing anything if the
    /// value is not JSON-representable.
    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.set(key, CacheValue::json(value)?).await
    }

    // == Delete ==
    /// Removes `key` from the store. Deleting an absent key is a success.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.store.del(key).await?;
        debug!(key, "cache delete");
        Ok(())
    }

    // == Get JSON ==
    /// Typed read: performs [`get`](Self::get) and parses the payload as
    /// JSON into `T`.
    ///
    /// An absent key or an empty payload returns `Ok(None)`. A present,
    /// non-empty payload that is not valid JSON for `T` returns
    /// [`CacheError::Deserialize`] — corrupt data is surfaced, not
    /// conflated with absence.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key).await? {
            None => Ok(None),
            Some(text) if text.is_empty() => Ok(None),
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|source| CacheError::Deserialize {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    /// The fixed TTL applied to every write.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The hit/miss counter pair recorded by this facade.
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }
}

impl CacheManager<RedisStore> {
    // == Redis Constructor ==
    /// Connects to Redis per `config` and builds the facade around the
    /// connection, with `config.ttl()` as the per-write TTL.
    pub async fn connect(config: &CacheConfig, registry: &Registry) -> Result<Self> {
        let store = RedisStore::connect(config).await?;
        Self::new(store, registry, config.ttl())
    }
}
