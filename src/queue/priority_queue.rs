//! Priority Queue Module
//!
//! Unsorted queue supporting removal from either end of the priority axis or
//! the insertion axis.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MemoQueueError, Result};
use crate::queue::{QueueEntry, QueueStats, Selector, SortOrder};

// == Scan Mode ==
/// How the highest-priority entry is located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanMode {
    /// Scan every entry on each peek or dequeue
    #[default]
    Linear,
    /// Keep the highest-priority index up to date on enqueue, rescan only
    /// when that exact entry is removed
    TrackHighest,
}

// == Priority Queue ==
/// Bidirectional priority queue.
///
/// Entries live in a `Vec` in insertion order. Enqueue is O(1); priority
/// peeks and dequeues scan the whole list, which is cheap for the small
/// queues this is meant for. Among equal priorities the earliest insertion
/// always wins.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    /// Entries in insertion order
    entries: Vec<QueueEntry<T>>,
    /// Next sequence number, reset only by `clear`
    counter: u64,
    mode: ScanMode,
    /// Cached highest-priority index, maintained in `TrackHighest` mode
    highest: Option<usize>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    // == Constructors ==
    /// Creates an empty queue using linear scans.
    pub fn new() -> Self {
        Self::with_mode(ScanMode::Linear)
    }

    pub fn with_mode(mode: ScanMode) -> Self {
        Self {
            entries: Vec::new(),
            counter: 0,
            mode,
            highest: None,
        }
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    // == Enqueue ==
    /// Appends `item` with the next sequence number.
    ///
    /// # Errors
    /// `InvalidPriority` for NaN or infinite priorities. The queue is left
    /// untouched, including its sequence counter.
    pub fn enqueue(&mut self, item: T, priority: f64) -> Result<&mut Self> {
        if !priority.is_finite() {
            return Err(MemoQueueError::InvalidPriority(priority));
        }

        self.entries
            .push(QueueEntry::new(item, priority, self.counter));
        self.counter += 1;

        if self.mode == ScanMode::TrackHighest {
            let newest = self.entries.len() - 1;
            match self.highest {
                Some(current) if !self.entries[newest].outranks_high(&self.entries[current]) => {}
                _ => self.highest = Some(newest),
            }
        }

        Ok(self)
    }

    // == Peek ==
    /// Returns the selected item without removing it, or `None` when empty.
    pub fn peek(&self, selector: Selector) -> Option<&T> {
        self.peek_entry(selector).map(|entry| &entry.item)
    }

    /// Like [`PriorityQueue::peek`] but includes priority and sequence number.
    pub fn peek_entry(&self, selector: Selector) -> Option<&QueueEntry<T>> {
        self.find_index(selector).map(|idx| &self.entries[idx])
    }

    // == Dequeue ==
    /// Removes and returns the selected item, or `None` when empty.
    pub fn dequeue(&mut self, selector: Selector) -> Option<T> {
        self.dequeue_entry(selector).map(|entry| entry.item)
    }

    /// Like [`PriorityQueue::dequeue`] but includes priority and sequence number.
    pub fn dequeue_entry(&mut self, selector: Selector) -> Option<QueueEntry<T>> {
        let idx = self.find_index(selector)?;
        Some(self.remove_at(idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Clear ==
    /// Removes every entry and restarts sequence numbers at 0.
    pub fn clear(&mut self) -> &mut Self {
        let dropped = self.entries.len();
        self.entries.clear();
        self.counter = 0;
        self.highest = None;
        debug!(dropped, "queue cleared");
        self
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry<T>> {
        self.entries.iter()
    }

    // == Snapshots ==
    /// Borrowed snapshot of all entries sorted by `order`.
    pub fn sorted_entries(&self, order: SortOrder) -> Vec<&QueueEntry<T>> {
        let mut sorted: Vec<&QueueEntry<T>> = self.entries.iter().collect();
        sorted.sort_by(|a, b| order.compare(a, b));
        sorted
    }

    /// Items sorted by `order`. The queue itself is not modified.
    pub fn to_vec(&self, order: SortOrder) -> Vec<T>
    where
        T: Clone,
    {
        self.sorted_entries(order)
            .into_iter()
            .map(|entry| entry.item.clone())
            .collect()
    }

    /// Summary statistics, or `None` when empty.
    pub fn stats(&self) -> Option<QueueStats> {
        QueueStats::from_entries(&self.entries)
    }

    // == Index Lookup ==
    fn find_index(&self, selector: Selector) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }

        match selector {
            Selector::Highest => match self.mode {
                ScanMode::Linear => self.scan(QueueEntry::outranks_high),
                ScanMode::TrackHighest => self.highest,
            },
            Selector::Lowest => self.scan(QueueEntry::outranks_low),
            // entries stay in insertion order, so the ends hold the extremes
            Selector::Oldest => Some(0),
            Selector::Newest => Some(self.entries.len() - 1),
        }
    }

    /// Index of the entry that no other entry beats.
    fn scan(&self, beats: fn(&QueueEntry<T>, &QueueEntry<T>) -> bool) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, entry) in self.entries.iter().enumerate() {
            match best {
                Some(current) if !beats(entry, &self.entries[current]) => {}
                _ => best = Some(idx),
            }
        }
        best
    }

    fn remove_at(&mut self, idx: usize) -> QueueEntry<T> {
        let removed = self.entries.remove(idx);

        if self.mode == ScanMode::TrackHighest {
            self.highest = match self.highest {
                Some(current) if current == idx => self.scan(QueueEntry::outranks_high),
                Some(current) if idx < current => Some(current - 1),
                other => other,
            };
        }

        removed
    }
}
