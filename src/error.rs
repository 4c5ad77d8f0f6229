//! Error types for the cache facade
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache facade.
///
/// Store errors wrap the underlying `redis::RedisError` without adding
/// context; callers see the transport failure as the store reported it.
/// A missing key is never an error, it is the `None` side of a read.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key is empty or exceeds the maximum length
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Transport or store-side failure, propagated unmodified
    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),

    /// Value could not be serialized to JSON
    #[error("Failed to serialize value to JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Stored payload for `key` is present but is not valid JSON for the
    /// requested type. Deliberately distinct from the absent case.
    #[error("Failed to deserialize value for key '{key}': {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Counter registration on the metrics registry failed
    #[error("Metrics registration failed: {0}")]
    Metrics(#[from] prometheus::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache facade.
pub type Result<T> = std::result::Result<T, CacheError>;
