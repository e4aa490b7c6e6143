//! Queue Entry Module
//!
//! An item together with its priority and insertion sequence number.

use serde::Serialize;

// == Queue Entry ==
/// A queued item.
///
/// `inserted_at` is assigned from the queue's counter on enqueue and never
/// changes afterwards, so it orders entries by arrival even after removals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueEntry<T> {
    pub item: T,
    pub priority: f64,
    pub inserted_at: u64,
}

impl<T> QueueEntry<T> {
    pub fn new(item: T, priority: f64, inserted_at: u64) -> Self {
        Self {
            item,
            priority,
            inserted_at,
        }
    }

    // == Outranks ==
    /// True when `self` beats `other` for the highest-priority slot.
    ///
    /// Higher priority wins; equal priorities go to the earlier insertion.
    pub(crate) fn outranks_high(&self, other: &Self) -> bool {
        self.priority > other.priority
            || (self.priority == other.priority && self.inserted_at < other.inserted_at)
    }

    /// True when `self` beats `other` for the lowest-priority slot.
    pub(crate) fn outranks_low(&self, other: &Self) -> bool {
        self.priority < other.priority
            || (self.priority == other.priority && self.inserted_at < other.inserted_at)
    }
}
