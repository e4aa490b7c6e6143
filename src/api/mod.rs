//! API Module
//!
//! HTTP handlers and routing for the memo/queue playground.
//!
//! # Endpoints
//! - `GET /memo/:function/:n` - Evaluate a demo function through the memo table
//! - `GET /memo/stats` - Memo table statistics
//! - `DELETE /memo` - Drop all memoized results
//! - `POST /queue` - Enqueue an item with a priority
//! - `GET /queue` - List queued entries in a chosen order
//! - `GET /queue/peek` - Inspect the selected entry
//! - `POST /queue/dequeue` - Remove the selected entry
//!
//! Selection is `?select=<highest|lowest|oldest|newest>` or a single flag such
//! as `?lowest=true`; unknown names and conflicting modes return 400.
//!
//! - `GET /queue/stats` - Queue statistics
//! - `DELETE /queue` - Empty the queue
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
