//! API Handlers
//!
//! HTTP request handlers for each ops endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::{keys, CacheStore, SharedStore};
use crate::error::{ApiError, Result};
use crate::models::{
    CleanupResponse, DeleteResponse, HealthResponse, InvalidateResponse, StatsResponse,
    StatusResponse,
};

/// Application state shared across all handlers.
///
/// Holds the cache store behind Arc<RwLock<>> so handlers and the
/// background sweep task operate on the same entries.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store; payloads are opaque JSON documents
    pub cache: SharedStore<serde_json::Value>,
}

impl AppState {
    /// Creates a new AppState with an empty cache store.
    pub fn new() -> Self {
        Self {
            cache: Arc::new(RwLock::new(CacheStore::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler for POST /cache/cleanup
///
/// Sweeps all expired entries immediately and reports the removal count
/// alongside the post-sweep size.
pub async fn cleanup_handler(State(state): State<AppState>) -> Json<CleanupResponse> {
    let (removed, size) = {
        let mut cache = state.cache.write().await;
        let removed = cache.cleanup();
        (removed, cache.len())
    };

    info!(removed, size, "manual cache sweep");
    Json(CleanupResponse::new(removed, size))
}

/// Handler for GET /cache/status
///
/// Reports the raw entry count. Expired entries that have not been read
/// or swept still count, so the number is an upper bound on live data.
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let size = state.cache.read().await.len();
    Json(StatusResponse::new(size))
}

/// Handler for GET /cache/stats
///
/// Returns hit/miss/expiry counters accumulated since startup.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.expired_removals,
        cache.len(),
    ))
}

/// Handler for DELETE /cache/key/:key
///
/// Drops a single cache entry. Responds 404 when the key is absent.
pub async fn delete_key_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let mut cache = state.cache.write().await;
    if !cache.delete(&key) {
        return Err(ApiError::NotFound(key));
    }

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for DELETE /cache/threads/:id
///
/// Drops every cached facet of a thread (replies, insights, detail view)
/// by matching the thread's key fragment. Idempotent; succeeds even when
/// nothing was cached for the thread.
pub async fn invalidate_thread_handler(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Json<InvalidateResponse> {
    let pattern = keys::thread_facets(&thread_id);
    state.cache.write().await.delete_pattern(&pattern);

    info!(%thread_id, "invalidated thread facets");
    Json(InvalidateResponse::new(thread_id))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
