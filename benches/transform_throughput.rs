//! Benchmarks for parsing and transforming recordings
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use evemu_rs::recording::to_bytes;
use evemu_rs::{merge, parse, repeat, Event, Recording};

fn synthetic_recording(events: usize) -> Recording {
    let header = [
        "# EVEMU 1.3\n",
        "# Input device name: \"Microsoft X-Box 360 pad\"\n",
        "################################\n",
    ];
    let events = (0..events)
        .map(|i| {
            let value = if i % 2 == 0 { "0001" } else { "0000" };
            Event::new(i as f64 * 0.008, "0001", "0131", value)
        })
        .collect();
    Recording::new(header, events)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [1000, 10_000, 100_000].iter() {
        let bytes = to_bytes(&synthetic_recording(*size));
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", size), &bytes, |b, bytes| {
            b.iter(|| parse(black_box(bytes.as_slice())).unwrap());
        });
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [1000, 10_000, 100_000].iter() {
        let recording = synthetic_recording(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("to_bytes", size), &recording, |b, recording| {
            b.iter(|| to_bytes(black_box(recording)));
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for size in [1000, 10_000, 100_000].iter() {
        let base = synthetic_recording(*size);
        let addition = synthetic_recording(*size);
        group.throughput(Throughput::Elements(*size as u64 * 2));
        group.bench_function(BenchmarkId::new("merge", size), |b| {
            b.iter(|| merge(black_box(base.clone()), black_box(addition.clone())));
        });
    }

    group.finish();
}

fn bench_repeat(c: &mut Criterion) {
    let mut group = c.benchmark_group("repeat");
    let recording = synthetic_recording(10_000);

    for count in [1i64, 10, 50].iter() {
        group.throughput(Throughput::Elements(10_000 * *count as u64));
        group.bench_with_input(BenchmarkId::new("repeat", count), count, |b, &count| {
            b.iter(|| repeat(black_box(recording.clone()), count));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_serialize, bench_merge, bench_repeat);
criterion_main!(benches);
