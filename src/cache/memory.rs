//! Memory Store Module
//!
//! In-process [`Store`] implementation backed by a HashMap, for tests and
//! local development. Mirrors the remote store's observable behavior: fixed
//! expiry from write time, lazy expiry on read, last-write-wins overwrite.
//! It is not a caching tier; production code talks to `RedisStore`.

use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheValue, Store};
use crate::error::Result;

// == Stored Entry ==
/// A single stored value with its expiration timestamp.
#[derive(Debug, Clone)]
struct StoredEntry {
    /// Stored text, in the same form the remote store would hold
    value: String,
    /// Expiration timestamp (Unix milliseconds)
    expires_at: u64,
}

impl StoredEntry {
    fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: current_timestamp_ms() + ttl.as_millis() as u64,
        }
    }

    /// An entry is expired once the current time reaches its expiration time.
    fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Memory Store ==
/// HashMap-backed [`Store`] for tests and local development.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, StoredEntry>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current number of live entries (expired ones included
    /// until they are read).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // Expired entries are removed on read, like the remote store's
        // lazy expiry
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &CacheValue, ttl: Duration) -> Result<()> {
        let entry = StoredEntry::new(value.to_text(), ttl);
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryStore::new();

        store.set("key1", &CacheValue::from("value1"), TTL).await.unwrap();
        let value = store.get("key1").await.unwrap();

        assert_eq!(value.as_deref(), Some("value1"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nonexistent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overwrite() {
        let store = MemoryStore::new();

        store.set("key1", &CacheValue::from("value1"), TTL).await.unwrap();
        store.set("key1", &CacheValue::from("value2"), TTL).await.unwrap();

        assert_eq!(store.get("key1").await.unwrap().as_deref(), Some("value2"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_del() {
        let store = MemoryStore::new();

        store.set("key1", &CacheValue::from("value1"), TTL).await.unwrap();
        store.del("key1").await.unwrap();

        assert!(store.is_empty().await);
        assert_eq!(store.get("key1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_del_nonexistent_is_ok() {
        let store = MemoryStore::new();
        assert!(store.del("nonexistent").await.is_ok());
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_absent() {
        let store = MemoryStore::new();

        store
            .set("key1", &CacheValue::from("value1"), Duration::from_millis(0))
            .await
            .unwrap();

        assert_eq!(store.get("key1").await.unwrap(), None);
        // Lazy expiry removes the entry on read
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_scalars_stored_as_wire_text() {
        let store = MemoryStore::new();

        store.set("int", &CacheValue::from(42i64), TTL).await.unwrap();
        store.set("bool", &CacheValue::from(true), TTL).await.unwrap();

        assert_eq!(store.get("int").await.unwrap().as_deref(), Some("42"));
        assert_eq!(store.get("bool").await.unwrap().as_deref(), Some("1"));
    }
}
