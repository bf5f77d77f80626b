//! Storage failure injection tests.
//!
//! The write path splits failure domains: the cache write is authoritative,
//! the time-series append is best effort. The read path always degrades to
//! safe defaults instead of erroring.

mod common;

use axum::http::StatusCode;
use common::*;
use radgate::api::{create_router, AppState};
use radgate::storage::{LatestCache, MemoryLatestCache, ReadingStore, LATEST_KEY};
use std::sync::Arc;
use tower::Service;

fn app_with(
    cache: Arc<dyn LatestCache>,
    readings: Arc<dyn ReadingStore>,
) -> axum::Router {
    let state = Arc::new(AppState::new(cache, readings, Arc::new(test_config())));
    create_router(state)
}

#[tokio::test]
async fn test_append_failure_still_returns_ok() {
    let cache = Arc::new(MemoryLatestCache::new());
    let mut app = app_with(
        Arc::clone(&cache) as Arc<dyn LatestCache>,
        Arc::new(FailingReadingStore),
    );

    let request = ingest_request(TEST_TOKEN, r#"{"clicks": 42}"#);
    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The cache still reflects the new snapshot
    let raw = cache.get(LATEST_KEY).await.unwrap().unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(snapshot["clicks"], 42);
}

#[tokio::test]
async fn test_cache_failure_fails_the_ingest() {
    let mut app = app_with(
        Arc::new(FailingLatestCache),
        Arc::new(FailingReadingStore),
    );

    let request = ingest_request(TEST_TOKEN, r#"{"clicks": 42}"#);
    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_latest_degrades_on_read_failure() {
    let mut app = app_with(
        Arc::new(FailingLatestCache),
        Arc::new(FailingReadingStore),
    );

    let response = app.call(get_request("/latest")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_str(&body_to_string(response.into_body()).await).unwrap();

    assert!(json["latest"].is_null());
    assert_eq!(json["instant_usv"], 0.0);
    assert_eq!(json["avg_usv"], 0.0);
    assert_eq!(json["offline"], true);
}

#[tokio::test]
async fn test_history_degrades_to_empty_on_query_failure() {
    let mut app = app_with(
        Arc::new(MemoryLatestCache::new()),
        Arc::new(FailingReadingStore),
    );

    let response = app.call(get_request("/history?window=10hr")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_str(&body_to_string(response.into_body()).await).unwrap();
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_cached_snapshot_degrades() {
    let cache = Arc::new(MemoryLatestCache::new());
    cache.put(LATEST_KEY, "not json").await.unwrap();

    let mut app = app_with(
        Arc::clone(&cache) as Arc<dyn LatestCache>,
        Arc::new(FailingReadingStore),
    );

    let response = app.call(get_request("/latest")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_str(&body_to_string(response.into_body()).await).unwrap();
    assert!(json["latest"].is_null());
}
