//! Ingest endpoint handler.
//!
//! Two side effects per accepted reading, in independent failure domains: the
//! latest-snapshot cache write is the liveness signal and must succeed; the
//! time-series append is analytics and its failure is logged and swallowed.

use crate::api::{ApiError, AppState};
use crate::logging::generate_request_id;
use crate::reading::{now_ms, LatestSnapshot, ReadingPayload};
use crate::storage::LATEST_KEY;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// POST /ingest - Accept one device reading.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = generate_request_id();

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if !state.config.auth.accepts(authorization) {
        tracing::warn!(request_id = %request_id, "Ingest rejected: bad device token");
        return ApiError::unauthorized().into_response();
    }

    let payload: ReadingPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Ingest rejected: invalid JSON");
            return ApiError::bad_request("Invalid JSON").into_response();
        }
    };

    let now = now_ms();
    let reading = payload.normalize(now);

    let snapshot = LatestSnapshot {
        clicks: reading.clicks,
        ts: reading.ts,
        received_at: now,
    };
    let snapshot_json = match serde_json::to_string(&snapshot) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Snapshot serialization failed");
            return ApiError::internal("Failed to record reading").into_response();
        }
    };
    if let Err(e) = state.cache.put(LATEST_KEY, &snapshot_json).await {
        tracing::error!(request_id = %request_id, error = %e, "Latest cache write failed");
        return ApiError::internal("Failed to record reading").into_response();
    }

    // Best effort: a flaky analytics store must not stop the device from
    // reporting alive.
    if let Err(e) = state.readings.insert(reading.ts, reading.clicks).await {
        tracing::error!(
            request_id = %request_id,
            error = %e,
            ts = reading.ts,
            clicks = reading.clicks,
            "Time-series append failed"
        );
    }

    tracing::info!(
        request_id = %request_id,
        ts = reading.ts,
        clicks = reading.clicks,
        "Reading ingested"
    );

    "OK".into_response()
}
