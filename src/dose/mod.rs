//! Dose-rate derivation
//!
//! Converts raw click counts into calibrated dose rates and assembles the
//! `/latest` metrics payload. Everything here is a pure function of current
//! time, the latest snapshot, and a windowed click sum; no hidden state, so
//! metrics are recomputed fresh on every read.
//!
//! The `cpm` response field is the per-minute-normalized click sum over the
//! averaging window, not the tube's true instantaneous rate. Devices in the
//! field chart this value, so the name is kept on the wire.

use crate::config::CalibrationConfig;
use crate::reading::LatestSnapshot;
use crate::storage::{LatestCache, ReadingStore, LATEST_KEY};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Dose-rate unit reported in every metrics payload.
pub const UNIT: &str = "µSv/h";

/// Normalize a click count to counts-per-minute.
pub fn counts_per_minute(clicks: u64, calibration: &CalibrationConfig) -> f64 {
    clicks as f64 / calibration.per_minute_factor()
}

/// Convert a click count to a µSv/h dose rate.
pub fn usv_per_hour(clicks: u64, calibration: &CalibrationConfig) -> f64 {
    counts_per_minute(clicks, calibration) * calibration.cpm_to_usv
}

/// Metrics payload served by `GET /latest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoseMetrics {
    /// Most recent snapshot, if any reading was ever ingested
    pub latest: Option<LatestSnapshot>,
    /// Per-minute-normalized click sum over the averaging window
    pub cpm: f64,
    /// Dose rate derived from the latest snapshot alone
    pub instant_usv: f64,
    /// Dose rate derived from the windowed click sum
    pub avg_usv: f64,
    pub unit: String,
    /// True when the sensor has been silent past the offline threshold
    pub offline: bool,
    /// Milliseconds since the last ingest; null when nothing was ever ingested
    #[serde(rename = "lastSeenAgo")]
    pub last_seen_ago: Option<i64>,
}

/// Assemble metrics from the latest snapshot and the windowed click sum.
///
/// `now` is millisecond epoch. With no snapshot the sensor counts as offline
/// and `lastSeenAgo` is null rather than an epoch-sized number.
pub fn compute_metrics(
    latest: Option<LatestSnapshot>,
    window_clicks: u64,
    now: i64,
    calibration: &CalibrationConfig,
) -> DoseMetrics {
    let cpm = counts_per_minute(window_clicks, calibration);
    let avg_usv = cpm * calibration.cpm_to_usv;

    let instant_usv = latest
        .map(|s| usv_per_hour(s.clicks, calibration))
        .unwrap_or(0.0);

    let (offline, last_seen_ago) = match latest {
        Some(snapshot) => {
            let ago = now - snapshot.received_at;
            (ago > calibration.offline_threshold_ms as i64, Some(ago))
        }
        None => (true, None),
    };

    DoseMetrics {
        latest,
        cpm,
        instant_usv,
        avg_usv,
        unit: UNIT.to_string(),
        offline,
        last_seen_ago,
    }
}

/// Reads the storage collaborators and derives the metrics payload.
///
/// Read-path storage failures never surface to the caller: a failed cache
/// read degrades to "no latest data" and a failed window query to a zero sum.
pub struct MetricsEngine {
    cache: Arc<dyn LatestCache>,
    readings: Arc<dyn ReadingStore>,
    calibration: CalibrationConfig,
}

impl MetricsEngine {
    pub fn new(
        cache: Arc<dyn LatestCache>,
        readings: Arc<dyn ReadingStore>,
        calibration: CalibrationConfig,
    ) -> Self {
        Self {
            cache,
            readings,
            calibration,
        }
    }

    /// Current metrics as of `now` (millisecond epoch).
    pub async fn metrics_at(&self, now: i64) -> DoseMetrics {
        let latest = match self.cache.get(LATEST_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<LatestSnapshot>(&raw) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    tracing::error!(error = %e, "Cached latest snapshot is corrupt");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::error!(error = %e, "Latest cache read failed");
                None
            }
        };

        let since = now - self.calibration.avg_window_ms as i64;
        let window_clicks = match self.readings.sum_since(since).await {
            Ok(sum) => sum,
            Err(e) => {
                tracing::error!(error = %e, since, "Window sum query failed");
                0
            }
        };

        compute_metrics(latest, window_clicks, now, &self.calibration)
    }
}
