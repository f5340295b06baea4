// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::ControlFlow;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_ring::{Direction, RingList};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_build");
    for &n in &[64usize, 1024, 16384] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("push_back_n{}", n), |b| {
            b.iter(|| {
                let ring: RingList<u32> = (0..n as u32).collect();
                black_box(ring.len());
            })
        });
        group.bench_function(format!("remove_every_other_n{}", n), |b| {
            b.iter_batched(
                || (0..n as u32).collect::<RingList<u32>>(),
                |mut ring| {
                    let removed = ring.remove_where(|v| v % 2 == 0);
                    black_box(removed);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_walk");
    for &n in &[64usize, 1024, 16384] {
        let ring: RingList<u32> = (0..n as u32).collect();
        let start = ring.tail().unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("iter_backward_n{}", n), |b| {
            b.iter(|| {
                let sum: u64 = ring
                    .iter_from(start, Direction::Backward)
                    .map(|(_, v)| u64::from(*v))
                    .sum();
                black_box(sum);
            })
        });
        group.bench_function(format!("traverse_to_last_n{}", n), |b| {
            b.iter(|| {
                let hit = ring.traverse(None, Direction::Forward, |id, v| {
                    if *v + 1 == n as u32 {
                        ControlFlow::Break(id)
                    } else {
                        ControlFlow::Continue(())
                    }
                });
                black_box(hit);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_walk);
criterion_main!(benches);
