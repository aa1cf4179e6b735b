//! Orbit calculator and animation benchmarks.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orbitscope::prelude::*;

/// Closed-form metrics for each catalog preset.
fn bench_compute_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_metrics");
    group.sample_size(100);
    group.confidence_level(0.95);

    for preset in presets() {
        group.bench_with_input(BenchmarkId::new("preset", preset.id), &preset.params, |b, p| {
            b.iter(|| {
                compute_metrics(
                    black_box(p.altitude_km),
                    black_box(p.inclination_deg),
                    black_box(p.eccentricity),
                )
            });
        });
    }

    group.finish();
}

/// One pure tick transition.
fn bench_tick(c: &mut Criterion) {
    let motion = MotionConfig::default();
    let snapshot = TrackSnapshot::capture(&OrbitParameters::default(), &GeometryConfig::default());
    let state = AnimationState::default();

    c.bench_function("tick", |b| {
        b.iter(|| tick(black_box(&state), black_box(&snapshot), black_box(&motion)));
    });
}

/// A full revolution stepped headless through the driver.
fn bench_full_revolution(c: &mut Criterion) {
    let snapshot = TrackSnapshot::capture(&OrbitParameters::default(), &GeometryConfig::default());

    c.bench_function("driver_315_steps", |b| {
        b.iter(|| {
            let mut driver = AnimationDriver::default();
            driver.prime(snapshot);
            for _ in 0..315 {
                black_box(driver.step());
            }
        });
    });
}

criterion_group!(benches, bench_compute_metrics, bench_tick, bench_full_revolution);
criterion_main!(benches);
