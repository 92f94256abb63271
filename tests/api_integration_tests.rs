//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each ops endpoint, seeding the
//! shared store the way application code does.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use social_cache::cache::keys;
use social_cache::{cached_call, create_router, AppState};
use std::time::Duration;
use tower::ServiceExt;

const TTL: Duration = Duration::from_secs(300);

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new())
}

async fn seed(state: &AppState, key: &str, value: Value, ttl: Duration) {
    state.cache.write().await.set(key.to_string(), value, ttl);
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Cleanup Endpoint Tests ==

#[tokio::test]
async fn test_cleanup_endpoint_removes_expired_entries() {
    let state = AppState::new();
    seed(&state, &keys::thread_replies("1"), json!(["r1"]), TTL).await;
    seed(&state, &keys::mentions("9"), json!([]), Duration::ZERO).await;
    tokio::time::sleep(Duration::from_millis(5)).await;

    let app = create_router(state.clone());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cache/cleanup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["size"].as_u64().unwrap(), 1);
    assert!(json["message"].as_str().unwrap().contains("Removed 1"));

    // The fresh entry survives the sweep.
    assert_eq!(state.cache.read().await.len(), 1);
}

#[tokio::test]
async fn test_cleanup_endpoint_on_empty_cache() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cache/cleanup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["size"].as_u64().unwrap(), 0);
    assert!(json["message"].as_str().unwrap().contains("Removed 0"));
}

// == Status Endpoint Tests ==

#[tokio::test]
async fn test_status_endpoint_reports_raw_size() {
    let state = AppState::new();
    seed(&state, &keys::thread_replies("1"), json!([]), TTL).await;
    // Expired but never read or swept, so it still counts.
    seed(&state, &keys::thread_detail("2"), json!({}), Duration::ZERO).await;
    tokio::time::sleep(Duration::from_millis(5)).await;

    let app = create_router(state);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/cache/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["size"].as_u64().unwrap(), 2);
    assert!(json.get("timestamp").is_some());
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_after_cached_calls() {
    let state = AppState::new();

    // Miss then hit through the cached-call path.
    let key = keys::thread_replies("42");
    let first = cached_call(&state.cache, &key, TTL, || async {
        Ok::<Value, String>(json!(["r1", "r2"]))
    })
    .await;
    assert!(first.is_ok());

    let second = cached_call(&state.cache, &key, TTL, || async {
        Ok::<Value, String>(json!(["never used"]))
    })
    .await;
    assert_eq!(second.unwrap(), json!(["r1", "r2"]));

    let app = create_router(state);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/cache/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    assert_eq!(json["total_entries"].as_u64().unwrap(), 1);
    assert!(json.get("hit_rate").is_some());
}

// == Delete Key Endpoint Tests ==

#[tokio::test]
async fn test_delete_key_endpoint_success() {
    let state = AppState::new();
    seed(&state, &keys::mentions("7"), json!([]), TTL).await;

    let app = create_router(state.clone());
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache/key/mentions:7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["key"].as_str().unwrap(), "mentions:7");

    assert_eq!(state.cache.read().await.len(), 0);
}

#[tokio::test]
async fn test_delete_key_endpoint_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache/key/nonexistent_key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

// == Thread Invalidation Endpoint Tests ==

#[tokio::test]
async fn test_invalidate_thread_endpoint_drops_all_facets() {
    let state = AppState::new();
    seed(&state, &keys::thread_replies("42"), json!([]), TTL).await;
    seed(&state, &keys::insights("42"), json!({}), TTL).await;
    seed(&state, &keys::thread_detail("42"), json!({}), TTL).await;
    seed(&state, &keys::thread_replies("7"), json!([]), TTL).await;

    let app = create_router(state.clone());
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache/threads/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["thread_id"].as_str().unwrap(), "42");

    // Only the unrelated thread's entry remains.
    let mut cache = state.cache.write().await;
    assert_eq!(cache.len(), 1);
    assert!(cache.get(&keys::thread_replies("7")).is_some());
}

#[tokio::test]
async fn test_invalidate_thread_endpoint_is_idempotent() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache/threads/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

// == TTL Expiration via Sweep Tests ==

#[tokio::test]
async fn test_expired_entry_removed_by_cleanup_endpoint() {
    let state = AppState::new();
    seed(
        &state,
        &keys::insights("5"),
        json!({"sentiment": "positive"}),
        Duration::from_millis(20),
    )
    .await;

    // Still fresh right after seeding.
    let app = create_router(state.clone());
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/cache/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_to_json(response.into_body()).await["size"], 1);

    tokio::time::sleep(Duration::from_millis(50)).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cache/cleanup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["size"].as_u64().unwrap(), 0);
    assert!(json["message"].as_str().unwrap().contains("Removed 1"));
}
