//! Benchmark for Set and ConcurrentSet vs standard HashSet.
//!
//! Compares the set types against Rust's standard `HashSet` for the common
//! operations, and measures the algebra functions.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use setkit::collection::{ConcurrentSet, Set, difference, intersection, union};
use std::collections::HashSet;
use std::hint::black_box;

// =============================================================================
// add Benchmark
// =============================================================================

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add");

    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = Set::new();
                for index in 0..size {
                    set.add(black_box(index));
                }
                black_box(set)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("ConcurrentSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let set = ConcurrentSet::new();
                    for index in 0..size {
                        set.add(black_box(index));
                    }
                    black_box(set)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = HashSet::new();
                for index in 0..size {
                    set.insert(black_box(index));
                }
                black_box(set)
            });
        });
    }

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in [1_000, 10_000, 100_000] {
        let set: Set<i32> = (0..size).collect();
        let concurrent: ConcurrentSet<i32> = (0..size).collect();
        let standard: HashSet<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for index in 0..size {
                    black_box(set.contains(&index));
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("ConcurrentSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for index in 0..size {
                        black_box(concurrent.contains(&index));
                    }
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for index in 0..size {
                    black_box(standard.contains(&index));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// pop Benchmark
// =============================================================================

fn benchmark_pop(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pop");

    // Draining measures per-pop cost as the set empties; it should scale
    // linearly with size.
    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || (0..size).collect::<Set<i32>>(),
                |mut set| {
                    while let Some(value) = set.pop() {
                        black_box(value);
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("ConcurrentSet", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || (0..size).collect::<ConcurrentSet<i32>>(),
                    |set| {
                        while let Some(value) = set.pop() {
                            black_box(value);
                        }
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("HashSet::drain", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || (0..size).collect::<HashSet<i32>>(),
                    |mut set| {
                        for value in set.drain() {
                            black_box(value);
                        }
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// =============================================================================
// Algebra Benchmark
// =============================================================================

fn benchmark_algebra(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("algebra");

    for size in [1_000, 10_000] {
        let left: Set<i32> = (0..size).collect();
        let right: Set<i32> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(union(&left, &right)));
        });

        group.bench_with_input(
            BenchmarkId::new("intersection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(intersection(&left, &right)));
            },
        );

        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bencher, _| {
            bencher.iter(|| black_box(difference(&left, &right)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_contains,
    benchmark_pop,
    benchmark_algebra
);
criterion_main!(benches);
