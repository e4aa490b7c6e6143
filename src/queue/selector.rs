//! Selector Module
//!
//! Which extreme entry a peek or dequeue targets, and how snapshots are sorted.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MemoQueueError, Result};
use crate::queue::QueueEntry;

// == Selector ==
/// The axis and direction of a peek or dequeue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    /// Greatest priority, earliest insertion on ties
    #[default]
    Highest,
    /// Smallest priority, earliest insertion on ties
    Lowest,
    /// Earliest insertion
    Oldest,
    /// Latest insertion
    Newest,
}

impl Selector {
    /// Builds a selector from one-flag-per-mode options.
    ///
    /// # Errors
    /// `InvalidSelector` unless exactly one flag is set.
    pub fn from_flags(highest: bool, lowest: bool, oldest: bool, newest: bool) -> Result<Self> {
        let flags = [
            (highest, Selector::Highest),
            (lowest, Selector::Lowest),
            (oldest, Selector::Oldest),
            (newest, Selector::Newest),
        ];
        let active: Vec<Selector> = flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, selector)| *selector)
            .collect();

        match active.as_slice() {
            [selector] => Ok(*selector),
            other => Err(MemoQueueError::InvalidSelector(other.len())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Selector::Highest => "highest",
            Selector::Lowest => "lowest",
            Selector::Oldest => "oldest",
            Selector::Newest => "newest",
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Selector {
    type Err = MemoQueueError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "highest" => Ok(Selector::Highest),
            "lowest" => Ok(Selector::Lowest),
            "oldest" => Ok(Selector::Oldest),
            "newest" => Ok(Selector::Newest),
            other => Err(MemoQueueError::UnknownSelector(other.to_string())),
        }
    }
}

// == Sort Order ==
/// Ordering of a queue snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    PriorityDesc,
    PriorityAsc,
    InsertionAsc,
    InsertionDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::PriorityDesc => "priority-desc",
            SortOrder::PriorityAsc => "priority-asc",
            SortOrder::InsertionAsc => "insertion-asc",
            SortOrder::InsertionDesc => "insertion-desc",
        }
    }

    /// Compares two entries under this order. Priority orders break ties by
    /// earliest insertion.
    pub(crate) fn compare<T>(&self, a: &QueueEntry<T>, b: &QueueEntry<T>) -> Ordering {
        match self {
            SortOrder::PriorityDesc => by_priority(b.priority, a.priority)
                .then(a.inserted_at.cmp(&b.inserted_at)),
            SortOrder::PriorityAsc => by_priority(a.priority, b.priority)
                .then(a.inserted_at.cmp(&b.inserted_at)),
            SortOrder::InsertionAsc => a.inserted_at.cmp(&b.inserted_at),
            SortOrder::InsertionDesc => b.inserted_at.cmp(&a.inserted_at),
        }
    }
}

/// Numeric priority order. `-0.0` and `0.0` compare equal, matching the
/// peek and dequeue scans; priorities are always finite.
fn by_priority(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = MemoQueueError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "priority-desc" => Ok(SortOrder::PriorityDesc),
            "priority-asc" => Ok(SortOrder::PriorityAsc),
            "insertion-asc" => Ok(SortOrder::InsertionAsc),
            "insertion-desc" => Ok(SortOrder::InsertionDesc),
            other => Err(MemoQueueError::UnknownSortOrder(other.to_string())),
        }
    }
}
