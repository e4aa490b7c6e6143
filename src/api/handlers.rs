//! API Handlers
//!
//! HTTP request handlers for the memo table and the priority queue.

use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::config::Config;
use crate::demo::{build_memo_table, DemoFunction, MemoTable};
use crate::error::{MemoQueueError, Result};
use crate::models::{
    ClearResponse, EnqueueRequest, EnqueueResponse, EntryResponse, HealthResponse, ListQuery,
    MemoResponse, MemoStatsResponse, QueueStatsResponse, SelectQuery,
};
use crate::queue::{PriorityQueue, QueueEntry, Selector};

/// Application state shared across all handlers.
///
/// The memo table sits behind a `Mutex` since every call may mutate it;
/// the queue uses an `RwLock` so peeks and listings can share it.
#[derive(Clone)]
pub struct AppState {
    pub memo: Arc<Mutex<MemoTable>>,
    pub queue: Arc<RwLock<PriorityQueue<String>>>,
}

impl AppState {
    /// Creates a new AppState around an existing memo table and queue.
    pub fn new(memo: MemoTable, queue: PriorityQueue<String>) -> Self {
        Self {
            memo: Arc::new(Mutex::new(memo)),
            queue: Arc::new(RwLock::new(queue)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// `InvalidConfig` when the memo options are rejected (e.g. zero capacity).
    pub fn from_config(config: &Config) -> Result<Self> {
        let memo = build_memo_table(
            config.memo_max_size,
            config.eviction_policy,
            config.max_age(),
        )?;
        let queue = PriorityQueue::with_mode(config.scan_mode());
        Ok(Self::new(memo, queue))
    }
}

// == Memo Handlers ==

/// Handler for GET /memo/:function/:n
///
/// Evaluates a demo function through the memo table.
pub async fn memo_handler(
    State(state): State<AppState>,
    Path((function, n)): Path<(String, u64)>,
) -> Result<Json<MemoResponse>> {
    let function: DemoFunction = function.parse()?;

    let mut memo = state.memo.lock().await;
    let hits_before = memo.stats().hits;
    let result = memo.try_call((function, n))?;
    let cached = memo.stats().hits > hits_before;
    debug!(%function, n, cached, "memo call");

    Ok(Json(MemoResponse::new(function, n, result, cached)))
}

/// Handler for GET /memo/stats
pub async fn memo_stats_handler(State(state): State<AppState>) -> Json<MemoStatsResponse> {
    let memo = state.memo.lock().await;
    Json(MemoStatsResponse::new(
        memo.policy_kind(),
        memo.max_size(),
        &memo.stats(),
    ))
}

/// Handler for DELETE /memo
pub async fn memo_clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut memo = state.memo.lock().await;
    let cleared = memo.len();
    memo.clear();
    Json(ClearResponse::new("memo", cleared))
}

// == Queue Handlers ==

/// Handler for POST /queue
pub async fn enqueue_handler(
    State(state): State<AppState>,
    Json(req): Json<EnqueueRequest>,
) -> Result<Json<EnqueueResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(MemoQueueError::InvalidRequest(error_msg));
    }

    let mut queue = state.queue.write().await;
    queue.enqueue(req.item, req.priority)?;
    let inserted_at = queue
        .peek_entry(Selector::Newest)
        .map(|entry| entry.inserted_at)
        .unwrap_or_default();

    Ok(Json(EnqueueResponse {
        inserted_at,
        size: queue.len(),
    }))
}

/// Handler for GET /queue
///
/// Lists queued entries without removing them.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<QueueEntry<String>>>> {
    let order = query.order()?;
    let queue = state.queue.read().await;
    let entries = queue
        .sorted_entries(order)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(entries))
}

/// Handler for GET /queue/peek
pub async fn peek_handler(
    State(state): State<AppState>,
    Query(query): Query<SelectQuery>,
) -> Result<Json<EntryResponse>> {
    let selector = query.selector()?;
    let queue = state.queue.read().await;
    let entry = queue.peek_entry(selector).cloned();
    Ok(Json(EntryResponse { entry }))
}

/// Handler for POST /queue/dequeue
pub async fn dequeue_handler(
    State(state): State<AppState>,
    Query(query): Query<SelectQuery>,
) -> Result<Json<EntryResponse>> {
    let selector = query.selector()?;
    let mut queue = state.queue.write().await;
    let entry = queue.dequeue_entry(selector);
    debug!(%selector, found = entry.is_some(), "dequeue");
    Ok(Json(EntryResponse { entry }))
}

/// Handler for GET /queue/stats
pub async fn queue_stats_handler(State(state): State<AppState>) -> Json<QueueStatsResponse> {
    let queue = state.queue.read().await;
    Json(QueueStatsResponse {
        stats: queue.stats(),
    })
}

/// Handler for DELETE /queue
pub async fn queue_clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut queue = state.queue.write().await;
    let cleared = queue.len();
    queue.clear();
    Json(ClearResponse::new("queue", cleared))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::PolicyKind;
    use std::time::Duration;

    fn test_state() -> AppState {
        let memo = build_memo_table(16, PolicyKind::Lru, Duration::from_secs(60)).unwrap();
        AppState::new(memo, PriorityQueue::new())
    }

    async fn enqueue(state: &AppState, item: &str, priority: f64) -> Result<Json<EnqueueResponse>> {
        let req = EnqueueRequest {
            item: item.to_string(),
            priority,
        };
        enqueue_handler(State(state.clone()), Json(req)).await
    }

    #[tokio::test]
    async fn test_memo_handler_caches() {
        let state = test_state();
        let path = || Path(("fibonacci".to_string(), 50u64));

        let first = memo_handler(State(state.clone()), path()).await.unwrap();
        assert_eq!(first.result, "12586269025");
        assert!(!first.cached);

        let second = memo_handler(State(state.clone()), path()).await.unwrap();
        assert!(second.cached);

        let stats = memo_stats_handler(State(state)).await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.policy, PolicyKind::Lru);
    }

    #[tokio::test]
    async fn test_memo_handler_unknown_function() {
        let state = test_state();
        let result = memo_handler(State(state), Path(("sqrt".to_string(), 4))).await;
        assert!(matches!(result, Err(MemoQueueError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_memo_clear_handler() {
        let state = test_state();
        memo_handler(State(state.clone()), Path(("factorial".to_string(), 10)))
            .await
            .unwrap();

        let response = memo_clear_handler(State(state.clone())).await;
        assert_eq!(response.cleared, 1);
        assert!(state.memo.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_enqueue_and_peek_handlers() {
        let state = test_state();

        let first = enqueue(&state, "low", 1.0).await.unwrap();
        assert_eq!(first.inserted_at, 0);
        let second = enqueue(&state, "high", 9.0).await.unwrap();
        assert_eq!(second.inserted_at, 1);
        assert_eq!(second.size, 2);

        let peeked = peek_handler(State(state.clone()), Query(SelectQuery::default()))
            .await
            .unwrap();
        assert_eq!(peeked.entry.as_ref().unwrap().item, "high");

        let query = SelectQuery {
            select: Some("oldest".to_string()),
            ..Default::default()
        };
        let dequeued = dequeue_handler(State(state.clone()), Query(query))
            .await
            .unwrap();
        assert_eq!(dequeued.entry.as_ref().unwrap().item, "low");
        assert_eq!(state.queue.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_enqueue_handler_rejects_empty_item() {
        let state = test_state();
        let result = enqueue(&state, "", 1.0).await;
        assert!(matches!(result, Err(MemoQueueError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_enqueue_handler_rejects_nan() {
        let state = test_state();
        let result = enqueue(&state, "nan", f64::NAN).await;
        assert!(matches!(result, Err(MemoQueueError::InvalidPriority(_))));
        assert!(state.queue.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_dequeue_empty_returns_null_entry() {
        let state = test_state();
        let response = dequeue_handler(State(state), Query(SelectQuery::default()))
            .await
            .unwrap();
        assert!(response.entry.is_none());
    }

    #[tokio::test]
    async fn test_selector_errors_leave_queue_untouched() {
        let state = test_state();
        enqueue(&state, "only", 1.0).await.unwrap();

        let query = SelectQuery {
            select: Some("middle".to_string()),
            ..Default::default()
        };
        let result = dequeue_handler(State(state.clone()), Query(query)).await;
        assert!(matches!(result, Err(MemoQueueError::UnknownSelector(_))));

        let query = SelectQuery {
            highest: true,
            newest: true,
            ..Default::default()
        };
        let result = dequeue_handler(State(state.clone()), Query(query)).await;
        assert!(matches!(result, Err(MemoQueueError::InvalidSelector(2))));
        assert_eq!(state.queue.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_list_handler_unknown_order() {
        let state = test_state();
        let query = ListQuery {
            order: Some("random".to_string()),
        };
        let result = list_handler(State(state), Query(query)).await;
        assert!(matches!(result, Err(MemoQueueError::UnknownSortOrder(_))));
    }

    #[tokio::test]
    async fn test_queue_stats_and_clear_handlers() {
        let state = test_state();
        for (item, priority) in [("a", 5.0), ("b", 1.0), ("c", 10.0), ("d", 3.0), ("e", 7.0)] {
            enqueue(&state, item, priority).await.unwrap();
        }

        let stats = queue_stats_handler(State(state.clone())).await;
        let stats = stats.stats.as_ref().unwrap();
        assert_eq!(stats.average_priority, 5.2);

        let cleared = queue_clear_handler(State(state.clone())).await;
        assert_eq!(cleared.cleared, 5);
        assert!(queue_stats_handler(State(state)).await.stats.is_none());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
