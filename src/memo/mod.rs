//! Memo Module
//!
//! Function memoization with LRU, LFU, time-based, and custom eviction.

mod entry;
mod memoize;
mod policy;
mod stats;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use memoize::{memoize, MemoOptions, Memoized};
pub use policy::{CustomEvictFn, Entries, EvictionPolicy, PolicyKind};
pub use stats::MemoStats;
