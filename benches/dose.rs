//! Benchmarks for dose-rate derivation.
//!
//! The metrics path runs on every dashboard poll; keep it well under a
//! millisecond even for the 50-day window.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radgate::config::CalibrationConfig;
use radgate::dose::{compute_metrics, usv_per_hour};
use radgate::history::HistoryEngine;
use radgate::history::Window;
use radgate::reading::LatestSnapshot;
use radgate::storage::{MemoryReadingStore, ReadingStore};
use std::sync::Arc;

fn bench_usv_conversion(c: &mut Criterion) {
    let calibration = CalibrationConfig::default();
    c.bench_function("usv_per_hour", |b| {
        b.iter(|| usv_per_hour(black_box(300), black_box(&calibration)))
    });
}

fn bench_compute_metrics(c: &mut Criterion) {
    let calibration = CalibrationConfig::default();
    let now = 1_700_000_000_000;
    let snapshot = LatestSnapshot {
        clicks: 300,
        ts: now,
        received_at: now,
    };
    c.bench_function("compute_metrics", |b| {
        b.iter(|| {
            compute_metrics(
                black_box(Some(snapshot)),
                black_box(12_345),
                black_box(now),
                &calibration,
            )
        })
    });
}

fn bench_history_window(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = Arc::new(MemoryReadingStore::new());
    let now = 1_700_000_000_000i64;

    // 50 days of 5-minute posts
    rt.block_on(async {
        for i in 0i64..(50 * 288) {
            store
                .insert(now - i * 300_000, (i % 40) as u64)
                .await
                .unwrap();
        }
    });

    let engine = HistoryEngine::new(store, CalibrationConfig::default());
    c.bench_function("history_window_50day", |b| {
        b.iter(|| rt.block_on(engine.window_at(black_box(Window::FiftyDays), now)))
    });
}

criterion_group!(
    benches,
    bench_usv_conversion,
    bench_compute_metrics,
    bench_history_window
);
criterion_main!(benches);
