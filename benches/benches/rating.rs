// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_rating::config::RatingConfig;
use understory_rating::controller::{NoopObserver, RatingController};
use understory_rating::precision::{Precision, calculate};

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("rating/calculate");

    for precision in [Precision::Tenth, Precision::Half, Precision::Whole] {
        let offsets: Vec<f64> = (0..1_024).map(|i| f64::from(i) * 0.25).collect();
        group.throughput(Throughput::Elements(offsets.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{precision:?}")),
            &offsets,
            |b, offsets| {
                b.iter(|| {
                    for &offset in offsets {
                        black_box(calculate(black_box(offset), 256.0, 5, precision));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_hover_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("rating/hover_sweep");

    // Pointer sweeps across the track: most moves stay inside a bucket and
    // must not produce a preview change.
    for icon_count in [5_u32, 10, 100] {
        let width = 40.0 * f64::from(icon_count);
        let positions: Vec<Point> = (0..2_048)
            .map(|i| Point::new(width * f64::from(i) / 2_048.0, 20.0))
            .collect();
        group.throughput(Throughput::Elements(positions.len() as u64));

        let config = RatingConfig::default()
            .with_icon_count(icon_count)
            .with_precision(Precision::Tenth)
            .with_hoverable(true);
        let mut rating = RatingController::new(config, NoopObserver);
        rating.set_track_bounds(Rect::new(0.0, 0.0, width, 40.0));

        group.bench_with_input(
            BenchmarkId::from_parameter(icon_count),
            &positions,
            |b, positions| {
                b.iter(|| {
                    for &pos in positions {
                        rating.pointer_move(pos);
                    }
                    rating.pointer_leave();
                    black_box(rating.display_ratio());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_calculate, bench_hover_sweep);
criterion_main!(benches);
