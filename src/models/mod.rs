//! Request and Response models for the playground API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{EnqueueRequest, ListQuery, SelectQuery, MAX_ITEM_LENGTH};
pub use responses::{
    ClearResponse, EntryResponse, EnqueueResponse, ErrorResponse, HealthResponse, MemoResponse,
    MemoStatsResponse, QueueStatsResponse,
};
