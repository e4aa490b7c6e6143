//! Request DTOs for the playground API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::error::{MemoQueueError, Result};
use crate::queue::{Selector, SortOrder};

/// Maximum accepted item length in bytes
pub const MAX_ITEM_LENGTH: usize = 256;

/// Request body for POST /queue
#[derive(Debug, Clone, Deserialize)]
pub struct EnqueueRequest {
    /// The item to queue
    pub item: String,
    /// Its priority, must be finite
    pub priority: f64,
}

impl EnqueueRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    /// Priority is checked by the queue itself.
    pub fn validate(&self) -> Option<String> {
        if self.item.is_empty() {
            return Some("Item cannot be empty".to_string());
        }
        if self.item.len() > MAX_ITEM_LENGTH {
            return Some(format!(
                "Item exceeds maximum length of {} bytes",
                MAX_ITEM_LENGTH
            ));
        }
        None
    }
}

/// Query string for GET /queue/peek and POST /queue/dequeue
///
/// Either `?select=<name>` or exactly one of the boolean flags
/// (`?lowest=true`). Neither means highest priority.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectQuery {
    #[serde(default)]
    pub select: Option<String>,
    #[serde(default)]
    pub highest: bool,
    #[serde(default)]
    pub lowest: bool,
    #[serde(default)]
    pub oldest: bool,
    #[serde(default)]
    pub newest: bool,
}

impl SelectQuery {
    /// Resolves the requested selector.
    ///
    /// # Errors
    /// `UnknownSelector` for an unrecognized name, `InvalidSelector` when
    /// several modes are requested at once.
    pub fn selector(&self) -> Result<Selector> {
        let flags = [self.highest, self.lowest, self.oldest, self.newest];
        let active = flags.iter().filter(|on| **on).count();

        match (&self.select, active) {
            (None, 0) => Ok(Selector::default()),
            (None, _) => Selector::from_flags(self.highest, self.lowest, self.oldest, self.newest),
            (Some(name), 0) => name.parse(),
            (Some(_), n) => Err(MemoQueueError::InvalidSelector(n + 1)),
        }
    }
}

/// Query string for GET /queue
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Defaults to priority-desc
    #[serde(default)]
    pub order: Option<String>,
}

impl ListQuery {
    /// Resolves the requested sort order.
    ///
    /// # Errors
    /// `UnknownSortOrder` for an unrecognized name.
    pub fn order(&self) -> Result<SortOrder> {
        match &self.order {
            Some(name) => name.parse(),
            None => Ok(SortOrder::default()),
        }
    }
}
