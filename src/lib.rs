//! Monotone windows: sliding-window and k-way merge queries driven by a
//! monotone deque or a small heap.
//!
//! Every query makes one (or two) passes over its input. A [`MonotoneQueue`]
//! evicts dominated entries on push and expired entries on read, so each
//! element is pushed and popped at most once. K-way merges keep one
//! [`heap::HeapNode`] per source in a [`heap::BoundedHeap`] and replace the
//! root in place.
//!
//! ```
//! use monotone_window::queries::*;
//!
//! assert_eq!(
//!     sliding_window_maximum(&[1, 2, 3, 1, 4, 5, 2, 3, 6], 3).unwrap(),
//!     [3, 3, 4, 5, 5, 5, 6]
//! );
//! assert_eq!(largest_rectangle_area(&[2, 1, 5, 6, 2, 3]).unwrap(), 10);
//! assert_eq!(shortest_subarray_sum_at_least_k(&[2, -1, 2], 3).unwrap(), Some(3));
//! ```

pub mod engine;
mod error;
pub mod heap;
pub mod merge;
pub mod monotone_queue;
pub mod naive;
pub mod order;
pub mod queries;

pub use error::{Result, WindowError};
pub use merge::KWayMerge;
pub use monotone_queue::{Entry, MonotoneQueue};

use itertools::Itertools;
use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaChaRng,
};

/// Generate a reproducible random sequence of `n` values in `lo..hi`.
pub fn generate_random_sequence(n: usize, lo: i64, hi: i64, seed: u64) -> Vec<i64> {
    assert!(lo < hi, "empty value range {lo}..{hi}");
    let span = hi.abs_diff(lo);
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..n)
        .map(|_| lo.wrapping_add((rng.next_u64() % span) as i64))
        .collect()
}

/// Generate `k` reproducible ascending sources with total length about `n`.
pub fn generate_sorted_sources(n: usize, k: usize, seed: u64) -> Vec<Vec<i64>> {
    assert!(k > 0);
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut sources = vec![vec![]; k];
    for _ in 0..n {
        let s = (rng.next_u64() % k as u64) as usize;
        sources[s].push((rng.next_u64() % (4 * n as u64 + 1)) as i64);
    }
    sources
        .into_iter()
        .map(|s| s.into_iter().sorted().collect())
        .collect()
}

#[cfg(test)]
#[ctor::ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn random_sequences_are_reproducible() {
        let a = generate_random_sequence(100, -5, 5, 7);
        assert_eq!(a, generate_random_sequence(100, -5, 5, 7));
        assert!(a.iter().all(|x| (-5..5).contains(x)));
    }

    #[test]
    fn sorted_sources() {
        let s = generate_sorted_sources(200, 4, 1);
        assert_eq!(s.len(), 4);
        assert_eq!(s.iter().map(Vec::len).sum::<usize>(), 200);
        assert!(s.iter().all(|s| s.iter().tuple_windows().all(|(a, b)| a <= b)));
    }
}
