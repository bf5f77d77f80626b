//! Tube calibration and timing configuration
//!
//! These constants turn raw click counts into dose rates and decide when a
//! silent sensor is considered offline. Defaults match the SBM-20 tube the
//! reference device ships with; other tubes need a different `cpm_to_usv`.

use serde::{Deserialize, Serialize};

/// Calibration constants for dose-rate derivation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Expected interval between device posts, in milliseconds.
    /// Click counts are normalized to counts-per-minute against this.
    pub post_interval_ms: u64,
    /// Conversion factor from counts-per-minute to µSv/h
    pub cpm_to_usv: f64,
    /// Lookback window for the rolling average, in milliseconds
    pub avg_window_ms: u64,
    /// Silence longer than this marks the sensor offline, in milliseconds
    pub offline_threshold_ms: u64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            post_interval_ms: 300_000,
            cpm_to_usv: 0.0018,
            avg_window_ms: 300_000,
            offline_threshold_ms: 600_000,
        }
    }
}

impl CalibrationConfig {
    /// Clicks-per-post to counts-per-minute divisor
    pub fn per_minute_factor(&self) -> f64 {
        self.post_interval_ms as f64 / 60_000.0
    }
}
