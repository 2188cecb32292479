//! A binary heap of per-source fronts for k-way merges.
//!
//! Unlike [`std::collections::BinaryHeap`], [`BoundedHeap`] supports replacing
//! its root in place with a single sift-down, which is the only operation a
//! merge needs once every source has been registered. Exhausted sources stay
//! in the heap as [`Front::Exhausted`] so the heap never shrinks mid-merge.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::order::Order;

/// The current front of a source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Front<V> {
    HasValue(V),
    Exhausted,
}

impl<V> Front<V> {
    pub fn value(&self) -> Option<&V> {
        match self {
            Front::HasValue(v) => Some(v),
            Front::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Front::Exhausted)
    }
}

/// One entry per source: its front value, its id, and the position of the
/// element that follows the front in that source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeapNode<V> {
    pub front: Front<V>,
    pub source: usize,
    pub next: usize,
}

impl<V: Ord> HeapNode<V> {
    /// Total order under `O`: values by `O`, then lower source first.
    /// `Exhausted` sorts after every value.
    fn cmp_by<O: Order>(&self, other: &Self) -> Ordering {
        let by_front = match (&self.front, &other.front) {
            (Front::HasValue(a), Front::HasValue(b)) => {
                if O::better(a, b) {
                    Ordering::Less
                } else if O::better(b, a) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
            (Front::HasValue(_), Front::Exhausted) => Ordering::Less,
            (Front::Exhausted, Front::HasValue(_)) => Ordering::Greater,
            (Front::Exhausted, Front::Exhausted) => Ordering::Equal,
        };
        by_front.then(self.source.cmp(&other.source))
    }
}

/// A binary heap whose root is the best node under `O`.
#[derive(Clone, Debug)]
pub struct BoundedHeap<V, O: Order> {
    data: Vec<HeapNode<V>>,
    _order: PhantomData<O>,
}

impl<V: Ord, O: Order> Default for BoundedHeap<V, O> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<V: Ord, O: Order> BoundedHeap<V, O> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn peek(&self) -> Option<&HeapNode<V>> {
        self.data.first()
    }

    pub fn push(&mut self, node: HeapNode<V>) {
        self.data.push(node);
        self.sift_up(self.data.len() - 1);
    }

    /// Replace the root with `node` and restore the heap order.
    /// Returns the old root, or `node` itself when the heap is empty.
    pub fn replace_root(&mut self, node: HeapNode<V>) -> HeapNode<V> {
        if self.data.is_empty() {
            return node;
        }
        let old = std::mem::replace(&mut self.data[0], node);
        self.sift_down(0);
        old
    }

    pub fn pop(&mut self) -> Option<HeapNode<V>> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        Some(self.replace_root(last))
    }

    /// All nodes left in the heap are `Exhausted`.
    pub fn all_exhausted(&self) -> bool {
        self.peek().map_or(true, |root| root.front.is_exhausted())
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.data[i].cmp_by::<O>(&self.data[j]) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.data.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let child = if right < n && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, i) {
                break;
            }
            self.data.swap(i, child);
            i = child;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::order::{Max, Min};

    fn node(v: i32, source: usize) -> HeapNode<i32> {
        HeapNode {
            front: Front::HasValue(v),
            source,
            next: 1,
        }
    }

    #[test]
    fn min_root() {
        let mut h = BoundedHeap::<i32, Min>::with_capacity(4);
        for (s, v) in [7, 3, 9, 3].into_iter().enumerate() {
            h.push(node(v, s));
        }
        // Equal values: lower source first.
        assert_eq!(h.peek(), Some(&node(3, 1)));
        let old = h.replace_root(node(10, 1));
        assert_eq!(old, node(3, 1));
        assert_eq!(h.peek(), Some(&node(3, 3)));
        assert_eq!(h.len(), 4);
    }

    #[test]
    fn max_root() {
        let mut h = BoundedHeap::<i32, Max>::default();
        for (s, v) in [7, 3, 9].into_iter().enumerate() {
            h.push(node(v, s));
        }
        let order: Vec<_> = std::iter::from_fn(|| h.pop())
            .filter_map(|n| n.front.value().copied())
            .collect();
        assert_eq!(order, [9, 7, 3]);
    }

    #[test]
    fn exhausted_sorts_last() {
        for_both::<Min>();
        for_both::<Max>();

        fn for_both<O: Order>() {
            let mut h = BoundedHeap::<i32, O>::default();
            h.push(HeapNode {
                front: Front::Exhausted,
                source: 0,
                next: 0,
            });
            h.push(node(i32::MAX, 1));
            h.push(node(i32::MIN, 2));
            assert!(!h.all_exhausted());
            h.replace_root(HeapNode {
                front: Front::Exhausted,
                source: 5,
                next: 0,
            });
            h.replace_root(HeapNode {
                front: Front::Exhausted,
                source: 6,
                next: 0,
            });
            assert!(h.all_exhausted());
            assert_eq!(h.len(), 3);
        }
    }
}
