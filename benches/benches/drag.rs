// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the drag move path.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_drag::{DragConfig, DragController, DragHost, Placement};

/// Host that only keeps the last placement.
#[derive(Default)]
struct LastPlacement(Option<Placement>);

impl DragHost<u32> for LastPlacement {
    fn apply_position(&mut self, _element: &u32, placement: Placement) {
        self.0 = Some(placement);
    }
}

/// Pointer path of `len` samples along a slow diagonal wobble.
fn pointer_path(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            Point::new(100.0 + t * 0.75, 100.0 + (t * 0.1).sin() * 40.0)
        })
        .collect()
}

fn bench_move_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/move_to");

    for (name, config) in [
        ("translate3d", DragConfig::transform()),
        ("absolute", DragConfig::absolute()),
    ] {
        for len in [64_usize, 1_024] {
            let path = pointer_path(len);
            group.throughput(Throughput::Elements(len as u64));
            group.bench_with_input(BenchmarkId::new(name, len), &path, |b, path| {
                let mut drag = DragController::new(config, |_: &u32| true);
                let mut host = LastPlacement::default();
                b.iter(|| {
                    drag.start(&1, Point::new(100.0, 100.0), &host);
                    for &p in path {
                        black_box(drag.move_to(p, &mut host));
                    }
                    drag.end();
                });
            });
        }
    }

    group.finish();
}

fn bench_many_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/many_elements");

    for count in [16_u32, 1_024] {
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut drag = DragController::new(DragConfig::default(), |_: &u32| true);
            let mut host = LastPlacement::default();
            b.iter(|| {
                for element in 0..count {
                    drag.start(&element, Point::new(0.0, 0.0), &host);
                    drag.move_to(Point::new(1.0, 1.0), &mut host);
                    drag.end();
                }
                black_box(drag.registry().len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_move_to, bench_many_elements);
criterion_main!(benches);
