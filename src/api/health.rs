//! Health check endpoint handler.

use crate::api::{AppState, HealthResponse};
use crate::reading::now_ms;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /health - Return service health status.
///
/// Mirrors the sensor offline flag: the service itself answering is implied
/// by the response existing at all.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let metrics = state.metrics.metrics_at(now_ms()).await;
    let status = if metrics.offline { "offline" } else { "online" };

    Json(HealthResponse {
        status: status.to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
