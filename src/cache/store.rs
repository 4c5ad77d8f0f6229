//! Store Module
//!
//! The seam between the facade and the remote key-value store. `Store` is the
//! minimal client contract (point get, expiring set, delete); `RedisStore` is
//! the production implementation on top of a multiplexed Redis connection.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::cache::CacheValue;
use crate::config::CacheConfig;
use crate::error::Result;

// == Store Trait ==
/// Client contract against the remote key-value store.
///
/// Implementations must be safe for concurrent use; every operation is a
/// single request with no retry loop. Callers bound each call with their own
/// timeout (dropping the future cancels the request).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    /// Point lookup. `Ok(None)` when the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key` with the given expiry, overwriting any
    /// previous value.
    async fn set(&self, key: &str, value: &CacheValue, ttl: Duration) -> Result<()>;

    /// Removes `key`. Deleting an absent key is a success.
    async fn del(&self, key: &str) -> Result<()>;
}

// == Redis Store ==
/// Redis-backed [`Store`] using a shared [`ConnectionManager`].
///
/// The connection manager multiplexes all calls over one connection and
/// reconnects on failure; cloning it is cheap, so each operation works on
/// its own handle.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    // == Constructor ==
    /// Connects to the Redis instance named by `config.redis_url`.
    pub async fn connect(config: &CacheConfig) -> Result<Self> {
        let client = redis::Client::open(config.redis_url.as_str())?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl Store for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        // Redis nil maps to None; any other failure propagates
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &CacheValue, ttl: Duration) -> Result<()> {
        let mut conn = self.conn.clone();
        let secs = ttl.as_secs();
        // Scalars go through the client's native typed encoding
        match value {
            CacheValue::Text(v) => conn.set_ex::<_, _, ()>(key, v, secs).await?,
            CacheValue::Int(v) => conn.set_ex::<_, _, ()>(key, *v, secs).await?,
            CacheValue::Float(v) => conn.set_ex::<_, _, ()>(key, *v, secs).await?,
            CacheValue::Bool(v) => conn.set_ex::<_, _, ()>(key, *v, secs).await?,
        }
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        // DEL returns the number of removed keys; 0 is not an error
        conn.del::<_, ()>(key).await?;
        Ok(())
    }
}
