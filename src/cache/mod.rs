//! Cache Module
//!
//! A thin facade over a remote key-value store: point reads, fixed-TTL writes,
//! deletes, and passive hit/miss counting. The store itself owns expiry and
//! ordering; nothing is cached in-process.

mod manager;
mod memory;
mod metrics;
mod store;
mod value;


// Re-export public types
pub use manager::CacheManager;
pub use memory::MemoryStore;
pub use metrics::CacheMetrics;
pub use store::{RedisStore, Store};
pub use value::CacheValue;

use crate::error::{CacheError, Result};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

// == Key Validation ==
/// Validates a cache key: non-empty and within the length limit.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("key must not be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidKey(format!(
            "key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_ok() {
        assert!(validate_key("ARTICLE_LIST").is_ok());
    }

    #[test]
    fn test_validate_key_empty() {
        assert!(matches!(
            validate_key(""),
            Err(CacheError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_validate_key_too_long() {
        let long_key = "x".repeat(MAX_KEY_LENGTH + 1);
        assert!(matches!(
            validate_key(&long_key),
            Err(CacheError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_validate_key_at_limit() {
        let key = "x".repeat(MAX_KEY_LENGTH);
        assert!(validate_key(&key).is_ok());
    }
}
