//! # HTTP API
//!
//! JSON endpoints for sensor ingest and dose-rate queries, plus the embedded
//! dashboard page.
//!
//! ## Endpoints
//!
//! - `POST /ingest` - Accept a device reading (bearer-token gated)
//! - `GET /latest` - Current dose-rate metrics and liveness
//! - `GET /history?window=1hr|10hr|10day|50day` - Windowed series for charting
//! - `GET /health` - Service health and uptime
//! - `GET /`, `GET /index.html` - Dashboard page
//!
//! ## Example
//!
//! ```no_run
//! use radgate::api::{AppState, create_router};
//! use radgate::config::RadgateConfig;
//! use radgate::storage::{MemoryLatestCache, MemoryReadingStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Arc::new(RadgateConfig::default());
//! let state = Arc::new(AppState::new(
//!     Arc::new(MemoryLatestCache::new()),
//!     Arc::new(MemoryReadingStore::new()),
//!     config,
//! ));
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Errors are returned as a JSON envelope:
//! ```json
//! {
//!   "error": {
//!     "message": "Invalid or missing device token",
//!     "type": "auth_error",
//!     "code": "unauthorized"
//!   }
//! }
//! ```
//! Read-path storage failures never become error responses; they degrade to
//! zeroed metrics or an empty series.

mod dashboard;
mod health;
mod history;
mod ingest;
mod latest;
pub mod types;

pub use types::*;

use crate::config::RadgateConfig;
use crate::dose::MetricsEngine;
use crate::history::HistoryEngine;
use crate::storage::{LatestCache, ReadingStore};
use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub config: Arc<RadgateConfig>,
    pub cache: Arc<dyn LatestCache>,
    pub readings: Arc<dyn ReadingStore>,
    pub metrics: MetricsEngine,
    pub history: HistoryEngine,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state with the given storage collaborators and
    /// configuration.
    pub fn new(
        cache: Arc<dyn LatestCache>,
        readings: Arc<dyn ReadingStore>,
        config: Arc<RadgateConfig>,
    ) -> Self {
        let metrics = MetricsEngine::new(
            Arc::clone(&cache),
            Arc::clone(&readings),
            config.calibration.clone(),
        );
        let history = HistoryEngine::new(Arc::clone(&readings), config.calibration.clone());

        Self {
            config,
            cache,
            readings,
            metrics,
            history,
            start_time: Instant::now(),
        }
    }
}

/// Create the main API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_body = state.config.server.max_body_bytes;

    Router::new()
        .route("/ingest", post(ingest::handle))
        .route("/latest", get(latest::handle))
        .route("/history", get(history::handle))
        .route("/health", get(health::handle))
        .route("/", get(dashboard::index_handler))
        .route("/index.html", get(dashboard::index_handler))
        .route("/assets/*path", get(dashboard::asset_handler))
        .fallback(fallback_handler)
        .layer(RequestBodyLimitLayer::new(max_body))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Catch-all for unknown routes.
async fn fallback_handler(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path())
}
