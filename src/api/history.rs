//! History endpoint handler.

use crate::api::{AppState, HistoryResponse};
use crate::history::Window;
use crate::reading::now_ms;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    /// Window label; unrecognized or absent falls back to the shortest window
    pub window: Option<String>,
}

/// GET /history - Windowed dose-rate series for charting.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> Json<HistoryResponse> {
    let window = Window::parse(params.window.as_deref().unwrap_or("1hr"));
    let data = state.history.window_at(window, now_ms()).await;
    Json(HistoryResponse { data })
}
