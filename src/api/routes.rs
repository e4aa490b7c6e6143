//! API Routes
//!
//! Configures the Axum router with all playground endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    dequeue_handler, enqueue_handler, health_handler, list_handler, memo_clear_handler,
    memo_handler, memo_stats_handler, peek_handler, queue_clear_handler, queue_stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/memo", delete(memo_clear_handler))
        .route("/memo/stats", get(memo_stats_handler))
        .route("/memo/:function/:n", get(memo_handler))
        .route(
            "/queue",
            get(list_handler)
                .post(enqueue_handler)
                .delete(queue_clear_handler),
        )
        .route("/queue/peek", get(peek_handler))
        .route("/queue/dequeue", post(dequeue_handler))
        .route("/queue/stats", get(queue_stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
