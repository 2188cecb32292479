use super::*;
use num::{CheckedAdd, Zero};
use std::ops::Sub;

/// Length of the shortest non-empty contiguous subarray with sum at least `k`,
/// or `None` when no such subarray exists.
///
/// Values may be negative, so a two-pointer scan does not work. Instead the
/// deque holds prefix sums in increasing order: a later prefix that is not
/// larger makes every earlier larger one a worse left endpoint, and a front
/// that already completes a window can only give longer windows later.
pub fn shortest_subarray_sum_at_least_k<T>(seq: &[T], k: T) -> Result<Option<usize>>
where
    T: Copy + Ord + Zero + CheckedAdd + Sub<Output = T>,
{
    if k <= T::zero() {
        return Err(WindowError::invalid("k", "must be positive"));
    }
    let prefix = prefix_sums(seq)?;

    let mut q = MonotoneQueue::<T, Min>::with_capacity(prefix.len());
    let mut best: Option<usize> = None;
    for (i, &p) in prefix.iter().enumerate() {
        q.evict_dominated(|&back| p <= back);
        while let Ok(front) = q.front() {
            if p - front.key < k {
                break;
            }
            let len = i - front.index;
            best = Some(best.map_or(len, |b| b.min(len)));
            q.pop_front();
        }
        q.push_back(i, p);
    }
    debug!(n = seq.len(), ops = q.ops(), ?best, "shortest_subarray_sum_at_least_k");
    Ok(best)
}

/// `P[0] = 0` and `P[i + 1] = P[i] + seq[i]`.
fn prefix_sums<T: Copy + Zero + CheckedAdd>(seq: &[T]) -> Result<Vec<T>> {
    let mut prefix = Vec::with_capacity(seq.len() + 1);
    let mut sum = T::zero();
    prefix.push(sum);
    for (i, x) in seq.iter().enumerate() {
        sum = sum
            .checked_add(x)
            .ok_or_else(|| WindowError::invalid("seq", format!("prefix sum overflows at {i}")))?;
        prefix.push(sum);
    }
    Ok(prefix)
}
