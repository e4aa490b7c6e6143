//! memo_queue - Memoizing cache and bidirectional priority queue
//!
//! Provides function memoization with LRU, LFU, time-based and custom
//! eviction, a priority queue that serves from either end of the priority or
//! insertion axis, and a small HTTP playground exposing both.

pub mod api;
pub mod config;
pub mod demo;
pub mod error;
pub mod memo;
pub mod models;
pub mod queue;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{MemoQueueError, Result};
pub use memo::{memoize, MemoOptions, Memoized, PolicyKind};
pub use queue::{PriorityQueue, ScanMode, Selector, SortOrder};
pub use tasks::spawn_cleanup_task;
