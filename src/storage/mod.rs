//! Storage collaborator interfaces
//!
//! All durable state lives behind two narrow traits so the core never holds
//! in-process singletons: a latest-value cache (key-value, last-write-wins)
//! and an append-only time-series store. Production deployments bind these to
//! managed stores; [`memory`] provides the in-process implementation used by
//! the default server and by tests.

pub mod error;
pub mod memory;

pub use error::StorageError;
pub use memory::{MemoryLatestCache, MemoryReadingStore};

use crate::reading::Reading;
use async_trait::async_trait;

/// Cache key under which the latest snapshot is stored.
pub const LATEST_KEY: &str = "latest";

/// Small latest-value cache. Values are opaque strings (JSON on the wire).
#[async_trait]
pub trait LatestCache: Send + Sync {
    /// Overwrite the value under `key`.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Fetch the value under `key`, or None if never written.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Append-only time-series store for sensor readings.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Append one reading. Duplicate timestamps are allowed.
    async fn insert(&self, ts: i64, clicks: u64) -> Result<(), StorageError>;

    /// All readings with `ts >= since`, ordered by `ts` ascending.
    async fn query_since(&self, since: i64) -> Result<Vec<Reading>, StorageError>;

    /// Sum of clicks over readings with `ts >= since`.
    async fn sum_since(&self, since: i64) -> Result<u64, StorageError>;
}
