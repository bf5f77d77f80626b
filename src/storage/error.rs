//! Storage error types

use thiserror::Error;

/// Errors surfaced by the storage collaborators.
///
/// Callers on the read path degrade to defaults instead of propagating these;
/// the ingest path swallows append failures but surfaces cache failures.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("cache write failed: {0}")]
    CacheWrite(String),

    #[error("cache read failed: {0}")]
    CacheRead(String),

    #[error("time-series append failed: {0}")]
    Append(String),

    #[error("time-series query failed: {0}")]
    Query(String),

    #[error("stored value is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}
