//! Shared test utilities for Radgate integration tests.
//!
//! Provides helpers for building test routers, ingest requests, and
//! deliberately failing storage collaborators.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use radgate::api::{create_router, AppState};
use radgate::config::RadgateConfig;
use radgate::reading::Reading;
use radgate::storage::{
    LatestCache, MemoryLatestCache, MemoryReadingStore, ReadingStore, StorageError,
};
use std::sync::Arc;

/// Token used by test configs and request builders.
pub const TEST_TOKEN: &str = "test-token";

/// Default config with the test device token set.
pub fn test_config() -> RadgateConfig {
    let mut config = RadgateConfig::default();
    config.auth.device_token = Some(TEST_TOKEN.to_string());
    config
}

/// Router backed by fresh in-memory storage, plus handles to that storage.
pub fn test_app(
    config: RadgateConfig,
) -> (axum::Router, Arc<MemoryLatestCache>, Arc<MemoryReadingStore>) {
    let cache = Arc::new(MemoryLatestCache::new());
    let readings = Arc::new(MemoryReadingStore::new());
    let state = Arc::new(AppState::new(
        Arc::clone(&cache) as Arc<dyn LatestCache>,
        Arc::clone(&readings) as Arc<dyn ReadingStore>,
        Arc::new(config),
    ));
    (create_router(state), cache, readings)
}

/// Build a POST /ingest request with the given bearer token and JSON body.
pub fn ingest_request(token: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/ingest")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a simple GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Collect a response body into a string.
pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8_lossy(&bytes).to_string()
}

/// Reading store where every operation fails.
pub struct FailingReadingStore;

#[async_trait]
impl ReadingStore for FailingReadingStore {
    async fn insert(&self, _ts: i64, _clicks: u64) -> Result<(), StorageError> {
        Err(StorageError::Append("injected failure".to_string()))
    }

    async fn query_since(&self, _since: i64) -> Result<Vec<Reading>, StorageError> {
        Err(StorageError::Query("injected failure".to_string()))
    }

    async fn sum_since(&self, _since: i64) -> Result<u64, StorageError> {
        Err(StorageError::Query("injected failure".to_string()))
    }
}

/// Latest cache where every operation fails.
pub struct FailingLatestCache;

#[async_trait]
impl LatestCache for FailingLatestCache {
    async fn put(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::CacheWrite("injected failure".to_string()))
    }

    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::CacheRead("injected failure".to_string()))
    }
}
