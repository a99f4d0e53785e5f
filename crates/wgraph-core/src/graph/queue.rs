//! Indexed binary min-heap with decrease-key
//!
//! Every key appears at most once. A key -> heap position index is kept
//! alongside the heap so lookups and priority changes never scan.

use crate::error::{GraphError, Result};
use crate::graph::types::Weight;

/// Entry of the queue: a node index and its current priority
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapItem<W> {
    pub key: usize,
    pub priority: W,
}

#[derive(Debug, Clone, Default)]
pub struct IndexedMinHeap<W> {
    heap: Vec<HeapItem<W>>,
    positions: Vec<Option<usize>>,
}

impl<W: Weight> IndexedMinHeap<W> {
    pub fn new() -> Self {
        IndexedMinHeap {
            heap: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Queue sized for keys `0..key_space`
    pub fn with_key_space(key_space: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::with_capacity(key_space),
            positions: vec![None; key_space],
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, key: usize) -> bool {
        self.position(key).is_some()
    }

    /// Current entry for `key`, if queued
    pub fn find(&self, key: usize) -> Option<HeapItem<W>> {
        self.position(key).map(|pos| self.heap[pos])
    }

    /// Smallest entry without removing it
    pub fn peek(&self) -> Option<HeapItem<W>> {
        self.heap.first().copied()
    }

    pub fn push(&mut self, key: usize, priority: W) -> Result<()> {
        if self.contains(key) {
            return Err(GraphError::AlreadyQueued { key });
        }
        if key >= self.positions.len() {
            self.positions.resize(key + 1, None);
        }

        let pos = self.heap.len();
        self.heap.push(HeapItem { key, priority });
        self.positions[key] = Some(pos);
        self.sift_up(pos);
        Ok(())
    }

    /// Remove and return the entry with the smallest priority. Ties are
    /// broken arbitrarily.
    pub fn pop_min(&mut self) -> Option<HeapItem<W>> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let item = self.heap.pop()?;
        self.positions[item.key] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(item)
    }

    /// Lower the priority of a queued key and restore heap order.
    ///
    /// A larger priority is accepted too and sifts the entry down.
    pub fn decrease_priority(&mut self, key: usize, priority: W) -> Result<()> {
        let pos = self.position(key).ok_or(GraphError::NotQueued { key })?;
        self.heap[pos].priority = priority;
        let pos = self.sift_up(pos);
        self.sift_down(pos);
        Ok(())
    }

    fn position(&self, key: usize) -> Option<usize> {
        self.positions.get(key).copied().flatten()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].priority < self.heap[b].priority
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].key] = Some(a);
        self.positions[self.heap[b].key] = Some(b);
    }

    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}
