use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use monotone_window::{generate_random_sequence, generate_sorted_sources, naive, queries};
use std::time::Duration;

/// Deque-based sliding maxima against rescanning every window.
fn sliding(c: &mut Criterion) {
    let seq = generate_random_sequence(100_000, -1_000_000, 1_000_000, rand::random());

    let mut g = c.benchmark_group("sliding_max");
    for w in [4, 64, 1024] {
        g.bench_with_input(BenchmarkId::new("deque", w), &w, |b, &w| {
            b.iter(|| queries::sliding_window_maximum(&seq, w))
        });
        g.bench_with_input(BenchmarkId::new("naive", w), &w, |b, &w| {
            b.iter(|| naive::sliding_window_maximum(&seq, w))
        });
    }
}

/// Heap merge against concatenate-and-sort.
fn merge(c: &mut Criterion) {
    let mut g = c.benchmark_group("merge");
    for k in [2, 16, 256] {
        let sources = generate_sorted_sources(100_000, k, rand::random());
        g.bench_with_input(BenchmarkId::new("heap", k), &sources, |b, s| {
            b.iter(|| queries::merge_k_sorted_sequences(s))
        });
        g.bench_with_input(BenchmarkId::new("sort", k), &sources, |b, s| {
            b.iter(|| naive::merge_k_sorted_sequences(s))
        });
    }
}

fn single_pass(c: &mut Criterion) {
    let seq = generate_random_sequence(100_000, -50, 100, 213456);
    let heights = seq.iter().map(|x| x.abs()).collect::<Vec<_>>();

    let mut g = c.benchmark_group("single_pass");
    g.bench_function("daily_temperatures", |b| {
        b.iter(|| queries::daily_temperatures(&seq))
    });
    g.bench_function("largest_rectangle", |b| {
        b.iter(|| queries::largest_rectangle_area(&heights))
    });
    g.bench_function("shortest_subarray", |b| {
        b.iter(|| queries::shortest_subarray_sum_at_least_k(&seq, 500))
    });
    g.bench_function("pattern_132", |b| b.iter(|| queries::find_132_pattern(&heights)));
}

criterion_group!(
    name = group;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_millis(2000))
        .sample_size(10);
    targets = sliding, merge, single_pass
);

criterion_main!(group);
