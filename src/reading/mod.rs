//! Sensor reading data model and ingest normalization
//!
//! A device posts `{ clicks, ts? }` once per interval. Normalization guards
//! against devices that send second-resolution, zero, or garbage timestamps
//! by falling back to server receive time.

use serde::{Deserialize, Serialize};

/// Timestamps at or below this are not plausible millisecond epochs.
/// (1e12 ms is Sep 2001; second-resolution epochs sit three orders below.)
pub const TS_SANITY_THRESHOLD_MS: i64 = 1_000_000_000_000;

/// Raw ingest payload as posted by a device.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReadingPayload {
    /// Click count over the last post interval; absent counts as zero
    #[serde(default)]
    pub clicks: Option<u64>,
    /// Device-supplied millisecond epoch, used only if plausible
    #[serde(default, deserialize_with = "lenient_ts")]
    pub ts: Option<i64>,
}

/// Accept any JSON value for `ts`, keeping only numbers.
///
/// Buggy firmware has been seen sending strings and nulls here; those fall
/// back to server time during normalization rather than failing the ingest.
fn lenient_ts<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    })
}

/// One appended time-series row. Immutable once stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Reading {
    /// Millisecond epoch
    pub ts: i64,
    /// Clicks counted over the post interval ending at `ts`
    pub clicks: u64,
}

/// The most recent reading plus server receipt time.
///
/// Overwritten on every successful ingest; the receipt time drives offline
/// detection. Wire names match the device dashboard contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LatestSnapshot {
    pub clicks: u64,
    pub ts: i64,
    #[serde(rename = "receivedAt")]
    pub received_at: i64,
}

impl ReadingPayload {
    /// Normalize a device payload into a storable reading.
    ///
    /// `now` is the server receive time in millisecond epoch. The device
    /// timestamp is kept only when strictly above the sanity threshold.
    pub fn normalize(&self, now: i64) -> Reading {
        let ts = match self.ts {
            Some(ts) if ts > TS_SANITY_THRESHOLD_MS => ts,
            _ => now,
        };
        Reading {
            ts,
            clicks: self.clicks.unwrap_or(0),
        }
    }
}

/// Current wall-clock time as a millisecond epoch.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
