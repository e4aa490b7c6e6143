//! Memoizer Module
//!
//! Wraps a function with a bounded result cache driven by an eviction policy.

use std::fmt;
use std::hash::Hash;
use std::time::Duration;

use tracing::debug;

use crate::error::{MemoQueueError, Result};
use crate::memo::policy::{purge_expired, CustomEvictFn, Entries, EvictionPolicy, PolicyKind};
use crate::memo::{CacheEntry, MemoStats};

// == Options ==
/// Builder for a [`Memoized`] function.
///
/// Settings are validated in [`MemoOptions::build`], so a CUSTOM policy
/// without an evictor or a TIME policy without an age limit never produces a
/// running cache.
pub struct MemoOptions<K, V> {
    max_size: Option<usize>,
    policy: PolicyKind,
    max_age: Option<Duration>,
    custom_evict: Option<CustomEvictFn<K, V>>,
}

impl<K, V> Default for MemoOptions<K, V> {
    fn default() -> Self {
        Self {
            max_size: None,
            policy: PolicyKind::Lru,
            max_age: None,
            custom_evict: None,
        }
    }
}

impl<K, V> MemoOptions<K, V>
where
    K: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of cached results. Unbounded when never set.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Staleness limit for the TIME policy.
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Eviction routine for the CUSTOM policy.
    pub fn custom_evict<E>(mut self, evict: E) -> Self
    where
        E: FnMut(&mut Entries<K, V>) + Send + 'static,
    {
        self.custom_evict = Some(Box::new(evict));
        self
    }

    // == Build ==
    /// Validates the options and wraps `func`.
    ///
    /// # Errors
    /// `InvalidConfig` when `max_size` is zero, when TIME has no `max_age`,
    /// or when CUSTOM has no evictor.
    pub fn build<F>(self, func: F) -> Result<Memoized<K, V, F>> {
        if self.max_size == Some(0) {
            return Err(MemoQueueError::InvalidConfig(
                "max_size must be at least 1".to_string(),
            ));
        }

        let policy = match self.policy {
            PolicyKind::Lru => EvictionPolicy::Lru,
            PolicyKind::Lfu => EvictionPolicy::Lfu,
            PolicyKind::Time => {
                let max_age = self.max_age.ok_or_else(|| {
                    MemoQueueError::InvalidConfig("TIME policy requires max_age".to_string())
                })?;
                EvictionPolicy::Time { max_age }
            }
            PolicyKind::Custom => {
                let evict = self.custom_evict.ok_or_else(|| {
                    MemoQueueError::InvalidConfig(
                        "CUSTOM policy requires a custom evict function".to_string(),
                    )
                })?;
                EvictionPolicy::Custom(evict)
            }
        };

        Ok(Memoized::with_policy(func, policy, self.max_size))
    }
}

/// Wraps `func` with an unbounded LRU cache.
pub fn memoize<K, V, F>(func: F) -> Memoized<K, V, F>
where
    K: Hash + Eq + Clone,
{
    Memoized::with_policy(func, EvictionPolicy::Lru, None)
}

// == Memoized ==
/// A function paired with a cache of its results, keyed by argument value.
///
/// Arguments are hashed structurally: two calls with equal arguments share
/// one entry. Use [`Memoized::call`] for infallible functions and
/// [`Memoized::try_call`] for functions returning `Result`, whose errors are
/// passed through and never cached.
pub struct Memoized<K, V, F> {
    func: F,
    entries: Entries<K, V>,
    policy: EvictionPolicy<K, V>,
    max_size: Option<usize>,
    stats: MemoStats,
}

impl<K, V, F> fmt::Debug for Memoized<K, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("policy", &self.policy)
            .field("max_size", &self.max_size)
            .field("len", &self.entries.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Hash + Eq + Clone,
{
    /// Wraps `func` with an explicit policy. `max_size = None` means unbounded.
    pub fn with_policy(func: F, policy: EvictionPolicy<K, V>, max_size: Option<usize>) -> Self {
        Self {
            func,
            entries: Entries::new(),
            policy,
            max_size,
            stats: MemoStats::new(),
        }
    }

    // == Lookup ==
    /// Serves a hit from the cache, dropping the entry first if it is stale.
    fn lookup(&mut self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let entry = self.entries.get_mut(key)?;

        if let Some(max_age) = self.policy.max_age() {
            if entry.is_expired(max_age) {
                self.entries.remove(key);
                self.stats.record_evictions(1);
                debug!("stale entry dropped on lookup");
                return None;
            }
        }

        entry.record_hit();
        let value = entry.value.clone();
        self.policy.on_hit(&mut self.entries, key);
        self.stats.record_hit();
        Some(value)
    }

    // == Store ==
    /// Makes room if the cache is full, then inserts a fresh entry at the ledger tail.
    fn store(&mut self, key: K, value: V) {
        if let Some(max_size) = self.max_size {
            if self.entries.len() >= max_size {
                let removed = self.policy.evict(&mut self.entries, max_size);
                self.stats.record_evictions(removed);
            }
        }

        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Stats ==
    /// Returns current memoizer statistics.
    pub fn stats(&self) -> MemoStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Checks whether a result is cached for `key`, stale or not.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Inspects a cached entry without counting a hit or touching the ledger.
    pub fn peek_entry(&self, key: &K) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    /// Iterates cached entries in ledger order (front is next to be evicted by LRU).
    pub fn entries(&self) -> impl Iterator<Item = (&K, &CacheEntry<V>)> {
        self.entries.iter()
    }

    // == Clear ==
    /// Drops every cached result and resets statistics.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = MemoStats::new();
    }

    // == Purge Expired ==
    /// Removes all stale entries under the TIME policy.
    ///
    /// Returns the number of entries removed (always 0 for other policies).
    pub fn purge_expired(&mut self) -> usize {
        let Some(max_age) = self.policy.max_age() else {
            return 0;
        };
        let purged = purge_expired(&mut self.entries, max_age);
        self.stats.record_evictions(purged);
        self.stats.set_total_entries(self.entries.len());
        purged
    }
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    // == Call ==
    /// Returns the cached result for `args`, invoking the wrapped function on a miss.
    pub fn call(&mut self, args: K) -> V
    where
        F: FnMut(&K) -> V,
    {
        if let Some(value) = self.lookup(&args) {
            return value;
        }

        self.stats.record_miss();
        let value = (self.func)(&args);
        self.store(args, value.clone());
        value
    }

    // == Try Call ==
    /// Like [`Memoized::call`] for fallible functions.
    ///
    /// An `Err` is returned as-is and leaves the cache untouched, so the next
    /// call with the same arguments invokes the function again.
    pub fn try_call<E>(&mut self, args: K) -> std::result::Result<V, E>
    where
        F: FnMut(&K) -> std::result::Result<V, E>,
    {
        if let Some(value) = self.lookup(&args) {
            return Ok(value);
        }

        self.stats.record_miss();
        let value = (self.func)(&args)?;
        self.store(args, value.clone());
        Ok(value)
    }
}
