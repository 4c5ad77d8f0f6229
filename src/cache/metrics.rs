//! Cache Metrics Module
//!
//! Hit/miss counters backed by prometheus. Counters are registered once, at
//! construction, on an explicitly passed registry so tests can use isolated
//! registries instead of process-global state.

use prometheus::{IntCounter, Registry};

use crate::error::Result;

// == Cache Metrics ==
/// The hit/miss counter pair.
///
/// Process-lifetime, monotonically increasing, scraped by an external
/// collector through the registry they are registered on. Increments are
/// atomic, so the pair is safe to share across concurrent callers.
#[derive(Clone)]
pub struct CacheMetrics {
    hits: IntCounter,
    misses: IntCounter,
}

impl CacheMetrics {
    // == Constructor ==
    /// Creates the `cache_hit` / `cache_missed` counters and registers them
    /// on `registry`.
    ///
    /// Registering twice on the same registry fails with the underlying
    /// prometheus error; construct the facade once per registry.
    pub fn register(registry: &Registry) -> Result<Self> {
        let hits = IntCounter::new("cache_hit", "Cache Hit")?;
        let misses = IntCounter::new("cache_missed", "Cache Missed")?;

        registry.register(Box::new(hits.clone()))?;
        registry.register(Box::new(misses.clone()))?;

        Ok(Self { hits, misses })
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.inc();
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.inc();
    }

    /// Current hit count.
    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    /// Current miss count.
    pub fn misses(&self) -> u64 {
        self.misses.get()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_starts_at_zero() {
        let registry = Registry::new();
        let metrics = CacheMetrics::register(&registry).unwrap();

        assert_eq!(metrics.hits(), 0);
        assert_eq!(metrics.misses(), 0);
    }

    #[test]
    fn test_record_hit_and_miss() {
        let registry = Registry::new();
        let metrics = CacheMetrics::register(&registry).unwrap();

        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();

        assert_eq!(metrics.hits(), 2);
        assert_eq!(metrics.misses(), 1);
    }

    #[test]
    fn test_counters_visible_through_registry() {
        let registry = Registry::new();
        let metrics = CacheMetrics::register(&registry).unwrap();

        metrics.record_hit();

        let families = registry.gather();
        let names: Vec<&str> = families.iter().map(|f| f.get_name()).collect();
        assert!(names.contains(&"cache_hit"));
        assert!(names.contains(&"cache_missed"));
    }

    #[test]
    fn test_double_registration_fails() {
        let registry = Registry::new();
        let _metrics = CacheMetrics::register(&registry).unwrap();

        assert!(CacheMetrics::register(&registry).is_err());
    }

    #[test]
    fn test_isolated_registries_do_not_interfere() {
        let a = CacheMetrics::register(&Registry::new()).unwrap();
        let b = CacheMetrics::register(&Registry::new()).unwrap();

        a.record_hit();

        assert_eq!(a.hits(), 1);
        assert_eq!(b.hits(), 0);
    }
}
