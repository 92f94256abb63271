//! API Routes
//!
//! Configures the Axum router with all ops endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cleanup_handler, delete_key_handler, health_handler, invalidate_thread_handler,
    stats_handler, status_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /cache/cleanup` - Sweep expired entries now
/// - `GET /cache/status` - Current entry count
/// - `GET /cache/stats` - Hit/miss/expiry counters
/// - `DELETE /cache/key/:key` - Drop a single entry
/// - `DELETE /cache/threads/:id` - Drop all cached facets of a thread
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/cache/cleanup", post(cleanup_handler))
        .route("/cache/status", get(status_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/cache/key/:key", delete(delete_key_handler))
        .route("/cache/threads/:id", delete(invalidate_thread_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
