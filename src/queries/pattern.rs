use super::*;

/// Find indices `i < j < k` with `seq[i] < seq[k] < seq[j]`.
///
/// Scans right to left keeping a deque of candidates for `seq[j]` whose values
/// decrease towards the back. Every entry popped by a larger value becomes the
/// best known `seq[k]` for that larger `seq[j]`; popped values only grow, so
/// keeping the last one suffices.
pub fn find_132_pattern<T: Ord + Clone>(seq: &[T]) -> Option<(usize, usize, usize)> {
    let n = seq.len();
    // Deque indices are scan steps; step s is position n - 1 - s.
    let pos = |step: usize| n - 1 - step;
    let mut q = MonotoneQueue::<T, Max>::with_capacity(n);
    // (j, k) with seq[k] < seq[j], maximizing seq[k].
    let mut third: Option<(usize, usize)> = None;

    for (step, x) in seq.iter().rev().enumerate() {
        let i = pos(step);
        if let Some((j, k)) = third {
            if *x < seq[k] {
                debug!(n, ops = q.ops(), i, j, k, "find_132_pattern");
                return Some((i, j, k));
            }
        }
        while let Some(back) = q.back() {
            if back.key >= *x {
                break;
            }
            let k = pos(back.index);
            q.pop_back();
            third = Some((i, k));
        }
        q.push(step, x.clone());
    }
    debug!(n, ops = q.ops(), "find_132_pattern: none");
    None
}
