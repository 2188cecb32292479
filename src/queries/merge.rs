use super::*;
use num::{CheckedAdd, CheckedSub};

/// Merge ascending sources into one ascending sequence.
pub fn merge_k_sorted_sequences<T: Ord + Clone>(sources: &[Vec<T>]) -> Result<Vec<T>> {
    if sources.is_empty() {
        return Err(WindowError::EmptySources);
    }
    for s in sources {
        check_sorted("sources", s)?;
    }
    let slices = sources.iter().map(Vec::as_slice).collect_vec();
    Ok(KWayMerge::<_, Min>::initialize(&slices)?.collect())
}

/// The `k` pairs `(a[i], b[j])` with the smallest sums, in order of
/// increasing sum. Both inputs must be ascending. Fewer than `k` pairs are
/// returned when `a.len() * b.len() < k`.
///
/// Row `i` of the implicit matrix `a[i] + b[j]` is one heap source, so
/// only the frontier of at most `min(k, a.len())` rows is ever materialized.
pub fn k_smallest_pairs<T>(a: &[T], b: &[T], k: usize) -> Result<Vec<(T, T)>>
where
    T: Copy + Ord + CheckedAdd,
{
    if k == 0 {
        return Err(WindowError::invalid("k", "must be positive"));
    }
    check_sorted("a", a)?;
    check_sorted("b", b)?;
    if a.is_empty() || b.is_empty() {
        return Ok(vec![]);
    }

    let sum = |i: usize, j: usize| -> Result<Front<T>> {
        match b.get(j) {
            Some(y) => a[i]
                .checked_add(y)
                .map(Front::HasValue)
                .ok_or_else(|| WindowError::invalid("a", format!("a[{i}] + b[{j}] overflows"))),
            None => Ok(Front::Exhausted),
        }
    };

    let rows = k.min(a.len());
    let mut heap = BoundedHeap::<T, Min>::with_capacity(rows);
    for i in 0..rows {
        heap.push(HeapNode {
            front: sum(i, 0)?,
            source: i,
            next: 1,
        });
    }
    let mut out = Vec::with_capacity(k.min(a.len().saturating_mul(b.len())));
    while out.len() < k {
        let Some(&root) = heap.peek() else { break };
        if root.front.is_exhausted() {
            break;
        }
        out.push((a[root.source], b[root.next - 1]));
        heap.replace_root(HeapNode {
            front: sum(root.source, root.next)?,
            next: root.next + 1,
            ..root
        });
    }
    debug!(k, rows, found = out.len(), "k_smallest_pairs");
    Ok(out)
}

/// The `k`-th smallest cell (1-based) of a matrix whose rows are ascending.
pub fn kth_smallest_in_sorted_matrix<T: Ord + Clone>(matrix: &[Vec<T>], k: usize) -> Result<T> {
    if matrix.is_empty() {
        return Err(WindowError::EmptySources);
    }
    let cells: usize = matrix.iter().map(Vec::len).sum();
    if k == 0 || k > cells {
        return Err(WindowError::invalid(
            "k",
            format!("must lie in 1..={cells}, got {k}"),
        ));
    }
    for row in matrix {
        check_sorted("matrix", row)?;
    }
    let rows = matrix.iter().map(Vec::as_slice).collect_vec();
    KWayMerge::<_, Min>::initialize(&rows)?
        .nth(k - 1)
        .ok_or(WindowError::EmptyWindow)
}

/// The `k` values of the ascending `sorted` closest to `target`, returned in
/// ascending order. Between equally close values the smaller one wins.
///
/// The values below and above the insertion point of `target` form two
/// sources that are each ascending in distance; a two-way merge on
/// `(distance, value)` yields the closest values first. A distance that does
/// not fit in `T` is an `InvalidArgument`.
pub fn k_closest<T>(sorted: &[T], target: T, k: usize) -> Result<Vec<T>>
where
    T: Copy + Ord + CheckedSub,
{
    if k == 0 || k > sorted.len() {
        return Err(WindowError::invalid(
            "k",
            format!("must lie in 1..={}, got {k}", sorted.len()),
        ));
    }
    check_sorted("sorted", sorted)?;
    let split = sorted.partition_point(|x| *x < target);
    let dist = |far: &T, near: &T| {
        far.checked_sub(near).ok_or_else(|| {
            WindowError::invalid("target", "distance to a value overflows")
        })
    };
    let below: Vec<(T, T)> = sorted[..split]
        .iter()
        .rev()
        .map(|x| Ok((dist(&target, x)?, *x)))
        .collect::<Result<_>>()?;
    let above: Vec<(T, T)> = sorted[split..]
        .iter()
        .map(|x| Ok((dist(x, &target)?, *x)))
        .collect::<Result<_>>()?;
    let mut out = KWayMerge::<_, Min>::initialize(&[&below[..], &above[..]])?
        .take(k)
        .map(|(_, x)| x)
        .collect_vec();
    out.sort();
    Ok(out)
}
