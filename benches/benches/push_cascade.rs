// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_ring_slider::{
    Endpoint, Interval, MovementDirection, PointRing, RangeRing, Resolver, RingRange,
    points_to_ranges, ranges_to_points,
};

const SPAN: f64 = 86_400.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn day() -> Interval {
    Interval::new(0.0, SPAN, 1).unwrap()
}

/// `n` points exactly `SPAN / n` apart.
fn even_values(n: usize) -> Vec<f64> {
    let gap = SPAN / n as f64;
    (0..n).map(|i| i as f64 * gap).collect()
}

fn bench_packed_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_packed_points");
    for &n in &[16usize, 256, 4096] {
        let values = even_values(n);
        let distance = SPAN / n as f64;
        let resolver = Resolver::new(day(), Some(distance));
        group.throughput(Throughput::Elements(n as u64));
        // Every gap is exactly `distance`, so a small nudge pushes the whole ring.
        group.bench_function(format!("full_cascade_n{}", n), |b| {
            b.iter_batched(
                || {
                    let points = PointRing::from_values(&values);
                    let head = points.head().unwrap();
                    (points, head)
                },
                |(mut points, head)| {
                    let res = resolver.resolve(
                        &mut points,
                        head,
                        distance / 2.0,
                        MovementDirection::Clockwise,
                    );
                    black_box(res);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_sparse_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_sparse_points");
    for &n in &[16usize, 256] {
        let values = even_values(n);
        let resolver = Resolver::new(day(), Some(SPAN / n as f64 / 4.0));
        let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
        let jitter: Vec<f64> = (0..64).map(|_| (rng.next_f64() - 0.5) * SPAN / n as f64).collect();
        group.bench_function(format!("random_nudges_n{}", n), |b| {
            b.iter_batched(
                || PointRing::from_values(&values),
                |mut points| {
                    let head = points.head().unwrap();
                    for &d in &jitter {
                        let old = points.value(head).unwrap_or_default();
                        let _ = resolver.resolve(
                            &mut points,
                            head,
                            old + d,
                            MovementDirection::Stationary,
                        );
                    }
                    black_box(points.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_range_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_ranges");
    for &n in &[8usize, 128] {
        let bounds = even_values(2 * n);
        let length = SPAN / (2 * n) as f64;
        let resolver = Resolver::new(day(), Some(length));
        let ranges: RangeRing = bounds
            .chunks_exact(2)
            .map(|p| RingRange::new(p[0], p[1], ()))
            .collect();
        let anchor = ranges.head().unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("flatten_resolve_write_back_n{}", n), |b| {
            b.iter_batched(
                || ranges.clone(),
                |mut ranges| {
                    let Some((mut points, dragged)) =
                        ranges_to_points(&ranges, anchor, Endpoint::End)
                    else {
                        return;
                    };
                    let _ = resolver.resolve(
                        &mut points,
                        dragged,
                        2.0 * length,
                        MovementDirection::Clockwise,
                    );
                    black_box(points_to_ranges(&points, &mut ranges));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_packed_points,
    bench_sparse_points,
    bench_range_drag
);
criterion_main!(benches);
