//! Benchmarks for the diff and merge engines.
//!
//! Performance-critical paths:
//! - `diff`: Myers search cost grows with edit distance, not just input size
//! - `merge`: linear walk over both derivatives

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tandem_engine::{MergeOptions, diff, merge, merge_with_options};

fn source_lines(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("    let value_{i} = compute({i});")).collect()
}

/// Copies `lines`, replacing every `stride`-th line.
fn edited(lines: &[String], stride: usize) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i % stride == 0 {
                format!("{line} // edited")
            } else {
                line.clone()
            }
        })
        .collect()
}

fn bench_diff_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/diff_size");

    for size in [100usize, 1_000, 10_000] {
        let left = source_lines(size);
        let right = edited(&left, 50);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| diff(black_box(&left), black_box(&right)));
        });
    }

    group.finish();
}

fn bench_diff_by_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/diff_distance");
    let left = source_lines(2_000);

    // Smaller strides mean more edits
    for stride in [500usize, 100, 20, 5] {
        let right = edited(&left, stride);
        group.bench_with_input(BenchmarkId::new("stride", stride), &stride, |b, _| {
            b.iter(|| diff(black_box(&left), black_box(&right)));
        });
    }

    group.finish();
}

fn bench_diff_identical(c: &mut Criterion) {
    let lines = source_lines(10_000);
    c.bench_function("engine/diff_identical_10k", |b| {
        b.iter(|| diff(black_box(&lines), black_box(&lines)));
    });
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/merge");

    for size in [1_000usize, 10_000] {
        let base = source_lines(size);
        let left = edited(&base, 10);
        let right = edited(&base, 15);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("per_pair", size), &size, |b, _| {
            b.iter(|| merge(black_box(&base), black_box(&left), black_box(&right)));
        });
        group.bench_with_input(BenchmarkId::new("coalesced", size), &size, |b, _| {
            let options = MergeOptions {
                coalesce_conflicts: true,
            };
            b.iter(|| merge_with_options(black_box(&base), black_box(&left), black_box(&right), &options));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_diff_by_size,
    bench_diff_by_distance,
    bench_diff_identical,
    bench_merge
);
criterion_main!(benches);
