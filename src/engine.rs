//! Single-pass drivers over a sequence.
//!
//! Each driver owns one [`MonotoneQueue`] for the duration of the call, feeds
//! it every element once, and reads answers off its front or back.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::check_window;
use crate::monotone_queue::{Entry, MonotoneQueue};
use crate::order::{Direction, Order, ToKey};
use crate::Result;

/// The direction of a scan over the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scan {
    LeftToRight,
    RightToLeft,
}

impl Scan {
    fn indices(self, n: usize) -> Box<dyn Iterator<Item = usize>> {
        match self {
            Scan::LeftToRight => Box::new(0..n),
            Scan::RightToLeft => Box::new((0..n).rev()),
        }
    }
}

/// For every index, the nearest index on the already-scanned side whose key
/// is strictly better under `O`.
///
/// With `Max` this is the nearest strictly greater element, with `Min` the
/// nearest strictly smaller one. The deque holds the candidates as a stack:
/// its back is the nearest surviving candidate.
pub fn nearest_better<T, O: Order>(
    elems: &[T],
    key: &impl ToKey<T>,
    scan: Scan,
) -> Vec<Option<usize>> {
    let n = elems.len();
    let mut out = vec![None; n];
    // Insertion order of a right-to-left scan is decreasing in the original
    // index, so the deque stores scan steps and we map back on read.
    let mut q = MonotoneQueue::<_, O>::with_capacity(n);
    let mut steps = Vec::with_capacity(n);
    for (step, i) in scan.indices(n).enumerate() {
        let k = key.key(&elems[i]);
        q.evict_dominated(|back| !O::better(back, &k));
        out[i] = q.back().map(|e| steps[e.index]);
        q.push_back(step, k);
        steps.push(i);
    }
    debug!(n, ops = q.ops(), order = O::name(), ?scan, "nearest_better");
    out
}

/// The best entry of every window of `w` consecutive elements.
///
/// Returns `n - w + 1` entries, one per window start. `ties` decides which
/// index is reported when several elements share the best key.
pub fn sliding_extremum<T, K: Ord, O: Order>(
    elems: &[T],
    key: &impl ToKey<T, Key = K>,
    w: usize,
    ties: Direction,
) -> Result<Vec<Entry<K>>>
where
    K: Clone,
{
    check_window(w, elems.len())?;
    let n = elems.len();
    if n == 0 {
        return Ok(vec![]);
    }
    let mut q = MonotoneQueue::<K, O>::with_capacity(w);
    let mut out = Vec::with_capacity(n - w + 1);
    for (i, e) in elems.iter().enumerate() {
        match ties {
            Direction::Rightmost => q.push_back(i, key.key(e)),
            Direction::Leftmost => q.push(i, key.key(e)),
        }
        // The first w-1 elements do not complete a window.
        if i + 1 >= w {
            q.evict_expired(i + 1 - w);
            out.push(q.front()?.clone());
        }
    }
    debug!(n, w, ops = q.ops(), order = O::name(), "sliding_extremum");
    Ok(out)
}
