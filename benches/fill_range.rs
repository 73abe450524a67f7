//! Benchmarks for whole-array and rectangular-range fills.
//!
//! Run with:
//! ```bash
//! cargo bench --bench fill_range
//! ```

use std::hint::black_box;
use std::ops::{Range};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use multiarray::DenseArray;

/// Fills the region one element at a time, for comparison.
fn naive_fill_range(a: &mut DenseArray<f64, 3>, ranges: &[Range<usize>; 3], value: f64) {
    for i in ranges[0].clone() {
        for j in ranges[1].clone() {
            for k in ranges[2].clone() {
                a[[i, j, k]] = value;
            }
        }
    }
}

fn bench_fill_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_range");

    let cases = [
        ("small", [32, 32, 32], [4..28, 4..28, 4..28]),
        ("medium", [128, 128, 128], [16..112, 16..112, 16..112]),
        ("thin_rows", [256, 256, 8], [0..256, 0..256, 2..6]),
    ];

    for (name, sizes, ranges) in cases {
        let touched: usize = ranges.iter().map(|r| r.len()).product();
        group.throughput(Throughput::Elements(touched as u64));
        let mut a: DenseArray<f64, 3> = DenseArray::new(sizes);

        group.bench_with_input(BenchmarkId::new("bulk", name), &ranges, |b, ranges| {
            b.iter(|| {
                a.fill_range(black_box(ranges.clone()), black_box(1.0));
            });
        });

        group.bench_with_input(BenchmarkId::new("naive", name), &ranges, |b, ranges| {
            b.iter(|| naive_fill_range(&mut a, black_box(ranges), black_box(1.0)));
        });
    }

    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for (name, sizes) in [("medium", [128, 128, 128]), ("large", [256, 256, 256])] {
        let mut a: DenseArray<f64, 3> = DenseArray::new(sizes);
        group.throughput(Throughput::Elements(a.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                a.fill(black_box(2.0));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fill_range, bench_fill);
criterion_main!(benches);
