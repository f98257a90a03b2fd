// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use spanscope_space::{TimelineIntervals, View, nice_interval};

fn bench_nice_interval(c: &mut Criterion) {
    c.bench_function("nice_interval/ladder", |b| {
        b.iter(|| {
            let mut target = 0.013;
            let mut acc = 0.0;
            while target < 1.0e7 {
                acc += nice_interval(black_box(target)).unwrap_or_default();
                target *= 1.3;
            }
            black_box(acc)
        });
    });
}

fn bench_recompute(c: &mut Criterion) {
    let physical = 1_600.0;
    let mut group = c.benchmark_group("intervals/recompute");
    for (name, width) in [("ms", 50.0), ("s", 30_000.0), ("hours", 7_200_000.0)] {
        group.bench_function(name, |b| {
            let mut intervals = TimelineIntervals::with_capacity(120);
            let mut x = 0.0;
            b.iter(|| {
                // Pan across the trace the way a wheel gesture does.
                x = (x + width * 0.01) % (width * 10.0);
                let view = View::new(x, 0.0, width, 1.0);
                intervals.recompute(black_box(&view), width / physical * 100.0);
                black_box(intervals.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nice_interval, bench_recompute);
criterion_main!(benches);
