//! Historical window queries
//!
//! Maps named lookback windows to durations and serves the rows the dashboard
//! charts. Rows are returned raw (no binning); each is converted to a dose
//! rate with the same calibration as the live metrics.

use crate::config::CalibrationConfig;
use crate::dose;
use crate::storage::ReadingStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Named lookback windows accepted by `GET /history`.
///
/// Unrecognized labels fall back to the shortest window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    OneHour,
    TenHours,
    TenDays,
    FiftyDays,
}

impl Window {
    /// Parse a window label, falling back to [`Window::OneHour`].
    pub fn parse(label: &str) -> Self {
        match label {
            "1hr" => Window::OneHour,
            "10hr" => Window::TenHours,
            "10day" => Window::TenDays,
            "50day" => Window::FiftyDays,
            _ => Window::OneHour,
        }
    }

    /// Window duration in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        match self {
            Window::OneHour => 3_600_000,
            Window::TenHours => 10 * 3_600_000,
            Window::TenDays => 10 * 86_400_000,
            Window::FiftyDays => 50 * 86_400_000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Window::OneHour => "1hr",
            Window::TenHours => "10hr",
            Window::TenDays => "10day",
            Window::FiftyDays => "50day",
        }
    }
}

/// One charted point: reading timestamp and derived dose rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub ts: i64,
    pub usv: f64,
}

/// Serves windowed history from the reading store.
pub struct HistoryEngine {
    readings: Arc<dyn ReadingStore>,
    calibration: CalibrationConfig,
}

impl HistoryEngine {
    pub fn new(readings: Arc<dyn ReadingStore>, calibration: CalibrationConfig) -> Self {
        Self {
            readings,
            calibration,
        }
    }

    /// All points inside `window` as of `now`, oldest first.
    ///
    /// History is best-effort: a failed query yields an empty series, never
    /// an error.
    pub async fn window_at(&self, window: Window, now: i64) -> Vec<HistoryPoint> {
        let since = now - window.duration_ms();
        let rows = match self.readings.query_since(since).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(error = %e, window = window.label(), "History query failed");
                return Vec::new();
            }
        };

        rows.iter()
            .map(|r| HistoryPoint {
                ts: r.ts,
                usv: dose::usv_per_hour(r.clicks, &self.calibration),
            })
            .collect()
    }
}
