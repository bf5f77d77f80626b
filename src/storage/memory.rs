//! In-memory storage implementations
//!
//! Used by the default server and by tests. The cache is a `DashMap` keyed by
//! string; the reading store keeps rows in arrival order and sorts on query,
//! since concurrent writers give no arrival-order guarantee anyway.

use crate::reading::Reading;
use crate::storage::{LatestCache, ReadingStore, StorageError};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::RwLock;

/// DashMap-backed latest-value cache.
#[derive(Default)]
pub struct MemoryLatestCache {
    entries: DashMap<String, String>,
}

impl MemoryLatestCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LatestCache for MemoryLatestCache {
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }
}

/// Append-only in-memory reading store.
#[derive(Default)]
pub struct MemoryReadingStore {
    rows: RwLock<Vec<Reading>>,
}

impl MemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored readings.
    pub fn len(&self) -> usize {
        self.rows.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReadingStore for MemoryReadingStore {
    async fn insert(&self, ts: i64, clicks: u64) -> Result<(), StorageError> {
        self.rows.write().unwrap().push(Reading { ts, clicks });
        Ok(())
    }

    async fn query_since(&self, since: i64) -> Result<Vec<Reading>, StorageError> {
        let mut rows: Vec<Reading> = self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.ts >= since)
            .copied()
            .collect();
        rows.sort_by_key(|r| r.ts);
        Ok(rows)
    }

    async fn sum_since(&self, since: i64) -> Result<u64, StorageError> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.ts >= since)
            .map(|r| r.clicks)
            .sum())
    }
}
