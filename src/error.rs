//! Error types for the memo cache and priority queue
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MemoQueueError {
    /// Memoizer options rejected at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Priority was NaN or infinite
    #[error("Priority must be a finite number, got {0}")]
    InvalidPriority(f64),

    /// Zero or several selection modes were active
    #[error("Exactly one selection mode must be active, got {0}")]
    InvalidSelector(usize),

    /// Selector string did not name a known selector
    #[error("Unknown selector: {0}")]
    UnknownSelector(String),

    /// Sort order string did not name a known order
    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),

    /// Eviction policy string did not name a known policy
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Arithmetic overflow in a memoized computation
    #[error("Overflow: {0}")]
    Overflow(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for MemoQueueError {
    fn into_response(self) -> Response {
        let status = match &self {
            MemoQueueError::NotFound(_) => StatusCode::NOT_FOUND,
            MemoQueueError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MemoQueueError::InvalidPriority(_)
            | MemoQueueError::InvalidSelector(_)
            | MemoQueueError::UnknownSelector(_)
            | MemoQueueError::UnknownSortOrder(_)
            | MemoQueueError::UnknownPolicy(_)
            | MemoQueueError::InvalidRequest(_)
            | MemoQueueError::Overflow(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, MemoQueueError>;
