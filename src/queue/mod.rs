//! Queue Module
//!
//! Bidirectional priority queue: take from either end of the priority axis
//! or the insertion axis.

mod entry;
mod priority_queue;
mod selector;
mod stats;


// Re-export public types
pub use entry::QueueEntry;
pub use priority_queue::{PriorityQueue, ScanMode};
pub use selector::{Selector, SortOrder};
pub use stats::QueueStats;
