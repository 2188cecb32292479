//! Brute-force counterparts of the queries, used to cross-check them.
//! These take quadratic time and do no validation.

use itertools::Itertools;

pub fn daily_temperatures<T: Ord>(temps: &[T]) -> Vec<usize> {
    (0..temps.len())
        .map(|i| {
            (i + 1..temps.len())
                .find(|&j| temps[j] > temps[i])
                .map_or(0, |j| j - i)
        })
        .collect()
}

pub fn largest_rectangle_area(heights: &[i64]) -> i64 {
    let mut best = 0;
    for i in 0..heights.len() {
        let mut min = i64::MAX;
        for j in i..heights.len() {
            min = min.min(heights[j]);
            best = best.max(min * (j - i + 1) as i64);
        }
    }
    best
}

pub fn shortest_subarray_sum_at_least_k(seq: &[i64], k: i64) -> Option<usize> {
    (0..seq.len())
        .flat_map(|i| {
            let mut sum = 0;
            (i..seq.len()).filter_map(move |j| {
                sum += seq[j];
                (sum >= k).then_some(j - i + 1)
            })
        })
        .min()
}

pub fn merge_k_sorted_sequences<T: Ord + Clone>(sources: &[Vec<T>]) -> Vec<T> {
    sources.iter().flatten().cloned().sorted().collect()
}

pub fn sliding_window_maximum<T: Ord + Clone>(seq: &[T], w: usize) -> Vec<T> {
    seq.windows(w)
        .map(|win| win.iter().max().expect("w > 0").clone())
        .collect()
}

pub fn sliding_window_minimum<T: Ord + Clone>(seq: &[T], w: usize) -> Vec<T> {
    seq.windows(w)
        .map(|win| win.iter().min().expect("w > 0").clone())
        .collect()
}

pub fn has_132_pattern<T: Ord>(seq: &[T]) -> bool {
    (0..seq.len()).tuple_combinations().any(|(i, j, k)| seq[i] < seq[k] && seq[k] < seq[j])
}

/// Sums of the k smallest pairs, in increasing order.
pub fn k_smallest_pair_sums(a: &[i64], b: &[i64], k: usize) -> Vec<i64> {
    a.iter()
        .cartesian_product(b)
        .map(|(x, y)| x + y)
        .sorted()
        .take(k)
        .collect()
}

pub fn k_closest(sorted: &[i64], target: i64, k: usize) -> Vec<i64> {
    sorted
        .iter()
        .copied()
        .sorted_by_key(|&x| ((x - target).abs(), x))
        .take(k)
        .sorted()
        .collect()
}
