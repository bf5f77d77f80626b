//! HTTP handlers for the dashboard page
//!
//! The dashboard is a static page that polls `/latest` and `/history`
//! client-side; nothing here touches storage.

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use rust_embed::RustEmbed;

/// Embedded dashboard assets from dashboard/ directory
#[derive(RustEmbed)]
#[folder = "dashboard/"]
struct DashboardAssets;

/// Serves the dashboard HTML page
pub async fn index_handler() -> Response {
    match DashboardAssets::get("index.html") {
        Some(content) => match std::str::from_utf8(&content.data) {
            Ok(html) => Html(html.to_string()).into_response(),
            Err(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Invalid HTML encoding").into_response()
            }
        },
        None => (StatusCode::NOT_FOUND, "Dashboard not built").into_response(),
    }
}

/// Serves any other embedded dashboard asset with a guessed content type
pub async fn asset_handler(Path(path): Path<String>) -> Response {
    match DashboardAssets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                content.data.to_vec(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}
