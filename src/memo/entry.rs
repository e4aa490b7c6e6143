//! Cache Entry Module
//!
//! Defines a single memoized result with hit counting and age tracking.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A memoized result plus the metadata eviction policies need.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached result
    pub value: V,
    /// Number of calls served by this entry, starting at 1 for the call that filled it
    pub hits: u64,
    /// Instant the entry was inserted
    pub timestamp: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a fresh entry with `hits = 1` stamped at the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            hits: 1,
            timestamp: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was inserted.
    pub fn age(&self) -> Duration {
        self.timestamp.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `max_age`.
    ///
    /// Boundary condition: an entry whose age equals `max_age` exactly is still
    /// fresh. It only becomes stale once the age strictly exceeds the limit.
    pub fn is_expired(&self, max_age: Duration) -> bool {
        self.age() > max_age
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits = self.hits.saturating_add(1);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(42);

        assert_eq!(entry.value, 42);
        assert_eq!(entry.hits, 1);
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("value");

        assert!(!entry.is_expired(Duration::from_millis(50)));

        sleep(Duration::from_millis(80));

        assert!(entry.is_expired(Duration::from_millis(50)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry {
            value: "test",
            hits: 1,
            timestamp: Instant::now(),
        };

        // Age can never exceed an effectively infinite limit
        assert!(!entry.is_expired(Duration::MAX));
    }

    #[test]
    fn test_record_hit() {
        let mut entry = CacheEntry::new(());
        entry.record_hit();
        entry.record_hit();
        assert_eq!(entry.hits, 3);
    }

    #[test]
    fn test_record_hit_saturates() {
        let mut entry = CacheEntry::new(());
        entry.hits = u64::MAX;
        entry.record_hit();
        assert_eq!(entry.hits, u64::MAX);
    }
}
