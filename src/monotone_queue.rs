use std::collections::VecDeque;
use std::marker::PhantomData;

use serde::Serialize;

use crate::{order::Order, Result, WindowError};

/// A key at an absolute position in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Entry<K> {
    pub index: usize,
    pub key: K,
}

/// A queue of (index, key) entries.
/// Indices are always increasing, and keys are monotone under `O` so that the
/// best key is always at the front: for `Max` keys decrease from front to back,
/// for `Min` they increase.
///
/// Use `push_back` to keep the keys strictly monotone (latest equal key wins),
/// and `push` to keep equal keys (earliest equal key stays in front).
#[derive(Clone, Debug)]
pub struct MonotoneQueue<K, O: Order> {
    q: VecDeque<Entry<K>>,
    ops: usize,
    _order: PhantomData<O>,
}

impl<K: Ord, O: Order> Default for MonotoneQueue<K, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, O: Order> MonotoneQueue<K, O> {
    /// Initialize a new queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            q: VecDeque::with_capacity(capacity),
            ops: 0,
            _order: PhantomData,
        }
    }

    /// Push `key` with index `index`.
    /// Preceding keys that are not strictly better are removed, so that the
    /// queue is strictly monotone.
    pub fn push_back(&mut self, index: usize, key: K) {
        self.evict_dominated(|back| !O::better(back, &key));
        self.append(index, key);
    }

    /// Push `key` with index `index`.
    /// Only strictly worse preceding keys are removed, so that equal keys are kept.
    pub fn push(&mut self, index: usize, key: K) {
        self.evict_dominated(|back| O::better(&key, back));
        self.append(index, key);
    }

    /// Pop entries from the back while `dominated` holds for their key.
    /// Returns the number of evicted entries.
    pub fn evict_dominated(&mut self, mut dominated: impl FnMut(&K) -> bool) -> usize {
        let mut evicted = 0;
        while let Some(back) = self.q.back() {
            if !dominated(&back.key) {
                break;
            }
            self.pop_back();
            evicted += 1;
        }
        evicted
    }

    fn append(&mut self, index: usize, key: K) {
        debug_assert!(
            self.q.back().map_or(true, |back| back.index < index),
            "indices must be pushed in increasing order"
        );
        self.q.push_back(Entry { index, key });
        self.ops += 1;
    }

    /// Drop entries with index < `lo`.
    pub fn evict_expired(&mut self, lo: usize) {
        while let Some(front) = self.q.front() {
            if front.index >= lo {
                break;
            }
            self.pop_front();
        }
    }

    /// Drop entries with index < `lo`.
    /// Then return the first element with index >= `lo`.
    pub fn pop(&mut self, lo: usize) -> Option<&Entry<K>> {
        self.evict_expired(lo);
        self.q.front()
    }

    /// The best entry of the current window.
    pub fn front(&self) -> Result<&Entry<K>> {
        self.q.front().ok_or(WindowError::EmptyWindow)
    }

    /// The most recently pushed entry.
    pub fn back(&self) -> Option<&Entry<K>> {
        self.q.back()
    }

    pub fn pop_front(&mut self) -> Option<Entry<K>> {
        let e = self.q.pop_front();
        self.ops += e.is_some() as usize;
        e
    }

    pub fn pop_back(&mut self) -> Option<Entry<K>> {
        let e = self.q.pop_back();
        self.ops += e.is_some() as usize;
        e
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// Entries from front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Entry<K>> + '_ {
        self.q.iter()
    }

    /// Total number of pushes and pops so far.
    /// Each entry is pushed and popped at most once, so this is at most twice
    /// the number of pushed entries.
    pub fn ops(&self) -> usize {
        self.ops
    }
}
