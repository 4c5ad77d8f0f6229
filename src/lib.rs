//! Redcache - A Redis-backed caching facade
//!
//! Wraps a remote Redis connection behind a small get/set/delete API with a
//! fixed per-write TTL and prometheus hit/miss counters.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheManager, CacheMetrics, CacheValue, MemoryStore, RedisStore, Store};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
