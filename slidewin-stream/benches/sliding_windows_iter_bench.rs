// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use slidewin_core::SlidingWindowExt;
use std::hint::black_box;

/// Benchmarks the iterator adapter against `slice::windows` as a baseline.
pub fn bench_sliding_windows_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("sliding_windows_iter");
    let sizes = [1000usize, 10000];
    let window_sizes = [2usize, 10usize, 50usize];

    for &size in &sizes {
        let data: Vec<u64> = (0..size as u64).collect();

        for &window_size in &window_sizes {
            group.throughput(Throughput::Elements(size as u64));

            let id = BenchmarkId::new("adapter", format!("n{size}_w{window_size}"));
            group.bench_with_input(id, &window_size, |bencher, &window_size| {
                bencher.iter(|| {
                    for window in data.iter().copied().sliding_window(window_size).unwrap() {
                        black_box(window);
                    }
                });
            });

            let id = BenchmarkId::new("slice_windows", format!("n{size}_w{window_size}"));
            group.bench_with_input(id, &window_size, |bencher, &window_size| {
                bencher.iter(|| {
                    for window in data.windows(window_size) {
                        black_box(window.to_vec());
                    }
                });
            });
        }
    }

    group.finish();
}
