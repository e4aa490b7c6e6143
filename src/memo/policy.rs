//! Eviction Policy Module
//!
//! Decides which memoized results leave the cache when it is full.
//!
//! The cache map is a `LinkedHashMap` whose iteration order doubles as the
//! access ledger:
//! - Front = least recently used (LRU) or oldest insertion (other policies)
//! - Back = most recently used or newest insertion

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::time::Duration;

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::MemoQueueError;
use crate::memo::CacheEntry;

/// The live cache mapping, in ledger order.
pub type Entries<K, V> = LinkedHashMap<K, CacheEntry<V>>;

/// User-supplied eviction routine. It receives the live mapping and must
/// remove at least one entry itself.
pub type CustomEvictFn<K, V> = Box<dyn FnMut(&mut Entries<K, V>) + Send>;

// == Policy Kind ==
/// Tag-only view of an eviction policy, used by configuration and reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Lru,
    Lfu,
    Time,
    Custom,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Lru => "lru",
            PolicyKind::Lfu => "lfu",
            PolicyKind::Time => "time",
            PolicyKind::Custom => "custom",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = MemoQueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(PolicyKind::Lru),
            "lfu" => Ok(PolicyKind::Lfu),
            "time" => Ok(PolicyKind::Time),
            "custom" => Ok(PolicyKind::Custom),
            other => Err(MemoQueueError::UnknownPolicy(other.to_string())),
        }
    }
}

// == Eviction Policy ==
/// Eviction strategy applied when the cache reaches `max_size`.
pub enum EvictionPolicy<K, V> {
    /// Evict the least recently used entry
    Lru,
    /// Evict the entry with the fewest hits; ties go to the oldest insertion
    Lfu,
    /// Purge entries older than `max_age`, then the oldest insertion if still full
    Time { max_age: Duration },
    /// Delegate removal to a user-supplied routine
    Custom(CustomEvictFn<K, V>),
}

impl<K, V> fmt::Debug for EvictionPolicy<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvictionPolicy::Lru => f.write_str("Lru"),
            EvictionPolicy::Lfu => f.write_str("Lfu"),
            EvictionPolicy::Time { max_age } => {
                f.debug_struct("Time").field("max_age", max_age).finish()
            }
            EvictionPolicy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<K, V> EvictionPolicy<K, V>
where
    K: Hash + Eq + Clone,
{
    pub fn kind(&self) -> PolicyKind {
        match self {
            EvictionPolicy::Lru => PolicyKind::Lru,
            EvictionPolicy::Lfu => PolicyKind::Lfu,
            EvictionPolicy::Time { .. } => PolicyKind::Time,
            EvictionPolicy::Custom(_) => PolicyKind::Custom,
        }
    }

    /// Returns the staleness limit, which only the TIME policy has.
    pub fn max_age(&self) -> Option<Duration> {
        match self {
            EvictionPolicy::Time { max_age } => Some(*max_age),
            _ => None,
        }
    }

    // == On Hit ==
    /// Updates the ledger after a cache hit. Only LRU reorders.
    pub(crate) fn on_hit(&self, entries: &mut Entries<K, V>, key: &K) {
        if let EvictionPolicy::Lru = self {
            entries.to_back(key);
        }
    }

    // == Evict ==
    /// Makes room for one insertion into a cache holding `max_size` or more entries.
    ///
    /// Returns the number of entries removed.
    pub(crate) fn evict(&mut self, entries: &mut Entries<K, V>, max_size: usize) -> usize {
        match self {
            EvictionPolicy::Lru => evict_oldest(entries),
            EvictionPolicy::Lfu => evict_least_frequent(entries),
            EvictionPolicy::Time { max_age } => {
                let purged = purge_expired(entries, *max_age);
                if entries.len() >= max_size {
                    purged + evict_oldest(entries)
                } else {
                    purged
                }
            }
            EvictionPolicy::Custom(evict_fn) => {
                let before = entries.len();
                evict_fn(entries);
                let removed = before.saturating_sub(entries.len());
                if removed == 0 {
                    warn!(
                        size = entries.len(),
                        max_size, "custom evictor removed nothing, cache grows past its bound"
                    );
                }
                removed
            }
        }
    }
}

// == Helpers ==
/// Pops the ledger head.
fn evict_oldest<K: Hash + Eq, V>(entries: &mut Entries<K, V>) -> usize {
    match entries.pop_front() {
        Some(_) => {
            debug!("evicted ledger head");
            1
        }
        None => 0,
    }
}

/// Removes the entry with the smallest hit counter, first in ledger order on ties.
fn evict_least_frequent<K: Hash + Eq + Clone, V>(entries: &mut Entries<K, V>) -> usize {
    let mut victim: Option<(&K, u64)> = None;
    for (key, entry) in entries.iter() {
        match victim {
            Some((_, least)) if entry.hits >= least => {}
            _ => victim = Some((key, entry.hits)),
        }
    }

    let Some((key, hits)) = victim.map(|(k, h)| (k.clone(), h)) else {
        return 0;
    };
    entries.remove(&key);
    debug!(hits, "evicted least frequently used entry");
    1
}

/// Drops every entry older than `max_age`. Returns how many were dropped.
pub(crate) fn purge_expired<K: Hash + Eq, V>(
    entries: &mut Entries<K, V>,
    max_age: Duration,
) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| !entry.is_expired(max_age));
    let purged = before - entries.len();
    if purged > 0 {
        debug!(purged, "purged expired entries");
    }
    purged
}
