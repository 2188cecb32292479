use tracing::{debug, trace};

use crate::heap::{BoundedHeap, Front, HeapNode};
use crate::order::Order;
use crate::{Result, WindowError};

/// Merges k sorted sources into one stream that is sorted under `O`.
///
/// The heap holds exactly one node per source for the whole merge. When a
/// source runs out, its node is replaced by [`Front::Exhausted`] instead of
/// being removed.
pub struct KWayMerge<'a, V, O: Order> {
    sources: Vec<&'a [V]>,
    heap: BoundedHeap<V, O>,
    remaining: usize,
}

impl<'a, V: Ord + Clone, O: Order> KWayMerge<'a, V, O> {
    /// Register every source with its first element.
    /// Empty sources are allowed; an empty list of sources is not.
    pub fn initialize(sources: &[&'a [V]]) -> Result<Self> {
        if sources.is_empty() {
            return Err(WindowError::EmptySources);
        }
        let mut heap = BoundedHeap::with_capacity(sources.len());
        for (source, s) in sources.iter().enumerate() {
            heap.push(HeapNode {
                front: Self::front_of(s, 0),
                source,
                next: 1,
            });
        }
        let remaining = sources.iter().map(|s| s.len()).sum();
        debug!(
            k = sources.len(),
            n = remaining,
            order = O::name(),
            "k-way merge initialized"
        );
        Ok(Self {
            sources: sources.to_vec(),
            heap,
            remaining,
        })
    }

    fn front_of(source: &[V], i: usize) -> Front<V> {
        match source.get(i) {
            Some(v) => Front::HasValue(v.clone()),
            None => Front::Exhausted,
        }
    }

    /// Emit the best front and advance its source.
    pub fn pop_and_advance(&mut self) -> Option<V> {
        if self.remaining == 0 {
            return None;
        }
        let root = self.heap.peek()?;
        let (source, next) = (root.source, root.next);
        let replacement = HeapNode {
            front: Self::front_of(self.sources[source], next),
            source,
            next: next + 1,
        };
        if replacement.front.is_exhausted() {
            trace!(source, "source exhausted");
        }
        match self.heap.replace_root(replacement).front {
            Front::HasValue(v) => {
                self.remaining -= 1;
                Some(v)
            }
            Front::Exhausted => {
                debug_assert!(false, "exhausted root with {} values left", self.remaining);
                None
            }
        }
    }

    /// Number of values that have not been emitted yet.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Number of registered sources.
    pub fn k(&self) -> usize {
        self.sources.len()
    }
}

impl<V: Ord + Clone, O: Order> Iterator for KWayMerge<'_, V, O> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.pop_and_advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V: Ord + Clone, O: Order> ExactSizeIterator for KWayMerge<'_, V, O> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::order::{Max, Min};
    use itertools::Itertools;

    #[test]
    fn merges_three_sources() {
        let a = [1, 3, 5, 7];
        let b = [2, 4, 6, 8];
        let c = [0, 9, 10, 11];
        let m = KWayMerge::<_, Min>::initialize(&[&a[..], &b, &c]).unwrap();
        assert_eq!(m.len(), 12);
        assert_eq!(m.collect_vec(), (0..=11).collect_vec());
    }

    #[test]
    fn descending_with_max() {
        let a = [9, 4, 1];
        let b = [8, 8, 2];
        let m = KWayMerge::<_, Max>::initialize(&[&a[..], &b]).unwrap();
        assert_eq!(m.collect_vec(), [9, 8, 8, 4, 2, 1]);
    }

    #[test]
    fn empty_sources() {
        let empty: &[i32] = &[];
        assert_eq!(
            KWayMerge::<i32, Min>::initialize(&[]).err(),
            Some(WindowError::EmptySources)
        );
        let mut m = KWayMerge::<_, Min>::initialize(&[empty, &[3], empty]).unwrap();
        assert_eq!(m.k(), 3);
        assert_eq!(m.pop_and_advance(), Some(3));
        assert_eq!(m.remaining(), 0);
        assert_eq!(m.pop_and_advance(), None);
    }

    #[test]
    fn heap_size_stays_k() {
        let a = [1];
        let b = [2, 3, 4];
        let mut m = KWayMerge::<_, Min>::initialize(&[&a[..], &b]).unwrap();
        while m.pop_and_advance().is_some() {
            assert_eq!(m.heap.len(), 2);
        }
        assert!(m.heap.all_exhausted());
    }
}
