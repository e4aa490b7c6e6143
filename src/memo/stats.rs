//! Memo Statistics Module
//!
//! Tracks memoizer performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Memo Stats ==
/// Tracks memoizer performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoStats {
    /// Calls answered from the cache
    pub hits: u64,
    /// Calls that had to invoke the wrapped function (including failed ones)
    pub misses: u64,
    /// Entries removed to make room, or dropped as stale
    pub evictions: u64,
    /// Current number of cached results
    pub total_entries: usize,
}

impl MemoStats {
    // == Constructor ==
    /// Creates a new MemoStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing has been called yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Adds `count` removed entries to the eviction counter.
    pub fn record_evictions(&mut self, count: usize) {
        self.evictions += count as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
