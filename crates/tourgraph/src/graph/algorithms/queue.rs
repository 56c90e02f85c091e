//! Indexed binary min-heap keyed by vertex id.
//!
//! Tracks each vertex's heap position so a key can be lowered in place
//! (decrease-key) instead of removing and reinserting the vertex.

use crate::graph::VertexId;
use std::cmp::Ordering;

/// Min-priority queue over vertex ids with `f64` keys.
///
/// Ties break on the smaller vertex id, i.e. on creation order.
#[derive(Debug, Clone)]
pub(crate) struct IndexedMinQueue {
    heap: Vec<VertexId>,
    positions: Vec<Option<usize>>,
    keys: Vec<f64>,
}

impl IndexedMinQueue {
    /// Empty queue able to hold vertex ids `0..capacity` without growing.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
            keys: vec![f64::INFINITY; capacity],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn contains(&self, vertex: VertexId) -> bool {
        matches!(self.positions.get(vertex), Some(Some(_)))
    }

    /// Insert `vertex` with `key`. A vertex already queued only has its key lowered.
    pub(crate) fn push(&mut self, vertex: VertexId, key: f64) {
        if self.contains(vertex) {
            self.decrease_key(vertex, key);
            return;
        }
        if vertex >= self.positions.len() {
            self.positions.resize(vertex + 1, None);
            self.keys.resize(vertex + 1, f64::INFINITY);
        }
        self.keys[vertex] = key;
        self.positions[vertex] = Some(self.heap.len());
        self.heap.push(vertex);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the vertex with the smallest key.
    pub(crate) fn pop(&mut self) -> Option<(VertexId, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.positions[top] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((top, self.keys[top]))
    }

    /// Lower the key of a queued vertex.
    ///
    /// Returns false (and changes nothing) when the vertex isn't queued or
    /// `key` isn't smaller than its current key.
    pub(crate) fn decrease_key(&mut self, vertex: VertexId, key: f64) -> bool {
        match self.positions.get(vertex).copied().flatten() {
            Some(position) if key < self.keys[vertex] => {
                self.keys[vertex] = key;
                self.sift_up(position);
                true
            }
            _ => false,
        }
    }

    fn less(&self, a: VertexId, b: VertexId) -> bool {
        self.keys[a]
            .total_cmp(&self.keys[b])
            .then_with(|| a.cmp(&b))
            == Ordering::Less
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.positions[self.heap[i]] = Some(i);
        self.positions[self.heap[j]] = Some(j);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.less(self.heap[position], self.heap[parent]) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;
            if left < len && self.less(self.heap[left], self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.less(self.heap[right], self.heap[smallest]) {
                smallest = right;
            }
            if smallest == position {
                break;
            }
            self.swap(position, smallest);
            position = smallest;
        }
    }
}
