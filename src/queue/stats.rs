//! Queue Statistics Module
//!
//! Summary of the priorities and sequence numbers currently queued.

use serde::Serialize;

use crate::queue::QueueEntry;

// == Queue Stats ==
/// Snapshot summary of a non-empty queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueStats {
    pub size: usize,
    pub highest_priority: f64,
    pub lowest_priority: f64,
    /// Smallest sequence number still queued
    pub oldest_insertion: u64,
    /// Largest sequence number still queued
    pub newest_insertion: u64,
    pub average_priority: f64,
}

impl QueueStats {
    /// Summarises `entries`, or returns `None` when there are none.
    pub fn from_entries<T>(entries: &[QueueEntry<T>]) -> Option<Self> {
        let first = entries.first()?;
        let mut stats = Self {
            size: entries.len(),
            highest_priority: first.priority,
            lowest_priority: first.priority,
            oldest_insertion: first.inserted_at,
            newest_insertion: first.inserted_at,
            average_priority: 0.0,
        };

        let mut sum = 0.0;
        for entry in entries {
            stats.highest_priority = stats.highest_priority.max(entry.priority);
            stats.lowest_priority = stats.lowest_priority.min(entry.priority);
            stats.oldest_insertion = stats.oldest_insertion.min(entry.inserted_at);
            stats.newest_insertion = stats.newest_insertion.max(entry.inserted_at);
            sum += entry.priority;
        }
        stats.average_priority = sum / entries.len() as f64;

        Some(stats)
    }
}
