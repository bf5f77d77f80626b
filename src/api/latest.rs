//! Latest metrics endpoint handler.

use crate::api::AppState;
use crate::dose::DoseMetrics;
use crate::reading::now_ms;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /latest - Current dose-rate metrics and liveness.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<DoseMetrics> {
    Json(state.metrics.metrics_at(now_ms()).await)
}
