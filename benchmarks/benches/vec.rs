// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use rampart_vec::RampartVec;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench vec
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Vec vs RampartVec
// =============================================================================

fn bench_push_growing(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_growing");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("RampartVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = RampartVec::new();
                for i in 0..s {
                    vec.push(i as u64).expect("Failed to push(..)");
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_push_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_reserved");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("RampartVec", size), &size, |b, &s| {
            let mut vec = RampartVec::with_capacity(s).expect("Failed to with_capacity(..)");
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u64).expect("Failed to push(..)");
                }
                black_box(&vec);
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.insert(0, i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("RampartVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = RampartVec::new();
                for i in 0..s {
                    vec.insert(0, i as u64).expect("Failed to insert(..)");
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u64).collect::<Vec<_>>(),
                |mut vec| {
                    while !vec.is_empty() {
                        vec.remove(0);
                    }
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("RampartVec", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u64).collect::<RampartVec<_>>(),
                |mut vec| {
                    while !vec.is_empty() {
                        vec.erase(0);
                    }
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_clone_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone_strings");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let source: Vec<String> = (0..size).map(|i| format!("element-{i}")).collect();
        let rampart = RampartVec::try_from_slice(&source).expect("Failed to try_from_slice(..)");

        group.bench_with_input(BenchmarkId::new("Vec", size), &source, |b, src| {
            b.iter(|| black_box(src.clone()));
        });

        group.bench_with_input(BenchmarkId::new("RampartVec", size), &rampart, |b, src| {
            b.iter(|| black_box(src.try_clone().expect("Failed to try_clone()")));
        });
    }

    group.finish();
}

fn bench_clone_from_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone_from_reuse");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let source: Vec<u64> = (0..size as u64).collect();
        let rampart = RampartVec::try_from_slice(&source).expect("Failed to try_from_slice(..)");

        group.bench_with_input(BenchmarkId::new("Vec", size), &source, |b, src| {
            let mut dst = Vec::with_capacity(src.len());
            b.iter(|| {
                dst.clone_from(src);
                black_box(&dst);
            });
        });

        group.bench_with_input(BenchmarkId::new("RampartVec", size), &rampart, |b, src| {
            let mut dst = RampartVec::with_capacity(src.len()).expect("Failed to with_capacity(..)");
            b.iter(|| {
                dst.try_clone_from(src).expect("Failed to try_clone_from(..)");
                black_box(&dst);
            });
        });
    }

    group.finish();
}

criterion_group!(
    vec_benches,
    bench_push_growing,
    bench_push_reserved,
    bench_insert_front,
    bench_erase_front,
    bench_clone_strings,
    bench_clone_from_reuse
);

criterion_main!(vec_benches);
