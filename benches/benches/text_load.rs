//! Benchmarks for text acquisition and rendering.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::fs;
use tandem_engine::diff;
use tandem_kernel::render::{format_html, format_side_by_side, format_table, side_by_side};
use tandem_kernel::text::{InputLimits, load, split_lines};

fn sample_text(lines: usize, ending: &str) -> String {
    (0..lines).map(|i| format!("line number {i}{ending}")).collect()
}

fn bench_split_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("text/split_lines");

    for (name, ending) in [("lf", "\n"), ("crlf", "\r\n")] {
        let text = sample_text(10_000, ending);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| split_lines(black_box(text)));
        });
    }

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("input.txt");
    fs::write(&path, sample_text(50_000, "\n")).unwrap();
    let limits = InputLimits::default();

    c.bench_function("text/load_50k_lines", |b| {
        b.iter(|| load(black_box(&path), &limits).unwrap());
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let left = split_lines(&sample_text(2_000, "\n")).lines;
    let right: Vec<String> = left
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 7 != 0)
        .map(|(_, line)| line.clone())
        .collect();
    let script = diff(&left, &right);

    group.bench_function("table", |b| b.iter(|| format_table(black_box(&script))));
    group.bench_function("side_by_side", |b| {
        b.iter(|| format_side_by_side(&side_by_side(black_box(&script)), 60));
    });
    group.bench_function("html", |b| b.iter(|| format_html(black_box(&script), "bench")));

    group.finish();
}

criterion_group!(benches, bench_split_lines, bench_load, bench_render);
criterion_main!(benches);
