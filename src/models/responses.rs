//! Response DTOs for the playground API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::demo::DemoFunction;
use crate::memo::{MemoStats, PolicyKind};
use crate::queue::{QueueEntry, QueueStats};

/// Response body for GET /memo/:function/:n
#[derive(Debug, Clone, Serialize)]
pub struct MemoResponse {
    pub function: DemoFunction,
    pub n: u64,
    /// Decimal string of the u128 result
    pub result: String,
    /// True when served from the memo table
    pub cached: bool,
}

impl MemoResponse {
    pub fn new(function: DemoFunction, n: u64, result: u128, cached: bool) -> Self {
        Self {
            function,
            n,
            result: result.to_string(),
            cached,
        }
    }
}

/// Response body for GET /memo/stats
#[derive(Debug, Clone, Serialize)]
pub struct MemoStatsResponse {
    pub policy: PolicyKind,
    pub max_size: Option<usize>,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl MemoStatsResponse {
    pub fn new(policy: PolicyKind, max_size: Option<usize>, stats: &MemoStats) -> Self {
        Self {
            policy,
            max_size,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for POST /queue
#[derive(Debug, Clone, Serialize)]
pub struct EnqueueResponse {
    /// Sequence number assigned to the new entry
    pub inserted_at: u64,
    /// Queue size after the insert
    pub size: usize,
}

/// Response body for peek and dequeue; `entry` is null on an empty queue
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    pub entry: Option<QueueEntry<String>>,
}

/// Response body for GET /queue/stats; `stats` is null on an empty queue
#[derive(Debug, Clone, Serialize)]
pub struct QueueStatsResponse {
    pub stats: Option<QueueStats>,
}

/// Response body for the clear endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Number of entries dropped
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(target: &str, cleared: usize) -> Self {
        Self {
            message: format!("{} cleared", target),
            cleared,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
