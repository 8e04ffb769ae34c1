//! Benchmark for Set vs standard HashSet.
//!
//! Focuses on skewed operand sizes, where iterating the smaller side of
//! `intersection` and `difference` changes the cost from O(n + m) to
//! O(min(n, m)).

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hashset_algebra::Set;
use std::collections::HashSet;
use std::hint::black_box;

const LARGE_SIZES: [u64; 3] = [1_000, 10_000, 100_000];
const SMALL_SIZE: u64 = 16;

fn small_and_large(size: u64) -> (Set<u64>, Set<u64>) {
    let small: Set<u64> = (0..SMALL_SIZE).map(|value| value * 7).collect();
    let large: Set<u64> = (0..size).collect();
    (small, large)
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in LARGE_SIZES {
        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = Set::new();
                set.insert((0..size).map(black_box));
                black_box(set)
            });
        });

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = HashSet::new();
                set.extend((0..size).map(black_box));
                black_box(set)
            });
        });
    }

    group.finish();
}

// =============================================================================
// intersection Benchmark
// =============================================================================

fn benchmark_intersection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("intersection_skewed");

    for size in LARGE_SIZES {
        let (small, large) = small_and_large(size);

        group.bench_with_input(
            BenchmarkId::new("small_with_large", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(small.intersection(black_box(&large))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("large_with_small", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(large.intersection(black_box(&small))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// difference Benchmark
// =============================================================================

fn benchmark_difference(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("difference_skewed");

    for size in LARGE_SIZES {
        let (small, large) = small_and_large(size);

        group.bench_with_input(
            BenchmarkId::new("small_minus_large", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(small.difference(black_box(&large))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("large_minus_small", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(large.difference(black_box(&small))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// sorted_items Benchmark
// =============================================================================

fn benchmark_sorted_items(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_items");

    for size in LARGE_SIZES {
        let set: Set<u64> = (0..size).rev().collect();
        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.sorted_items()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_intersection,
    benchmark_difference,
    benchmark_sorted_items
);
criterion_main!(benches);
