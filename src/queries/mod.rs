//! Queries answered by a single monotone deque or k-way merge pass.

mod histogram;
mod merge;
mod pattern;
mod subarray;
mod temperatures;
mod window;

pub use histogram::*;
pub use merge::*;
pub use pattern::*;
pub use subarray::*;
pub use temperatures::*;
pub use window::*;

use super::{
    engine::{nearest_better, sliding_extremum, Scan},
    heap::{BoundedHeap, Front, HeapNode},
    merge::KWayMerge,
    monotone_queue::MonotoneQueue,
    order::*,
    Result, WindowError,
};
use itertools::Itertools;
use tracing::debug;

/// Fails with `InvalidArgument` unless `seq` is non-decreasing.
fn check_sorted<T: Ord>(name: &'static str, seq: &[T]) -> Result<()> {
    match seq.iter().tuple_windows().position(|(a, b)| a > b) {
        Some(i) => Err(WindowError::invalid(
            name,
            format!("not sorted at position {}", i + 1),
        )),
        None => Ok(()),
    }
}
