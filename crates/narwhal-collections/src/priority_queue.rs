//! Binary min/max heap over `(priority, item)` pairs.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapKind {
    /// Smallest priority first.
    #[default]
    Min,
    /// Largest priority first.
    Max,
}

#[derive(Debug, Clone)]
struct Entry<P, T> {
    priority: P,
    seq: u64,
    kind: HeapKind,
    item: T,
}

impl<P: PartialOrd, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: PartialOrd, T> Eq for Entry<P, T> {}

impl<P: PartialOrd, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: PartialOrd, T> Ord for Entry<P, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Incomparable priorities (NaN) rank as equal and fall back to insertion order.
        let by_priority = self
            .priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal);
        let by_priority = match self.kind {
            HeapKind::Max => by_priority,
            HeapKind::Min => by_priority.reverse(),
        };
        by_priority.then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue with a fixed [`HeapKind`]. Items with equal priority pop in insertion order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<P, T> {
    kind: HeapKind,
    heap: BinaryHeap<Entry<P, T>>,
    next_seq: u64,
}

impl<P: PartialOrd, T> Default for PriorityQueue<P, T> {
    fn default() -> Self {
        Self::new(HeapKind::Min)
    }
}

impl<P: PartialOrd, T> PriorityQueue<P, T> {
    pub fn new(kind: HeapKind) -> Self {
        Self {
            kind,
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn min() -> Self {
        Self::new(HeapKind::Min)
    }

    pub fn max() -> Self {
        Self::new(HeapKind::Max)
    }

    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, priority: P, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            kind: self.kind,
            item,
        });
    }

    pub fn pop(&mut self) -> Option<(P, T)> {
        self.heap.pop().map(|e| (e.priority, e.item))
    }

    /// Like [`PriorityQueue::pop`], but an empty queue is an error.
    pub fn poll(&mut self) -> Result<(P, T)> {
        self.pop().ok_or(Error::Empty {
            structure: "priority queue",
        })
    }

    pub fn peek(&self) -> Result<(&P, &T)> {
        self.heap
            .peek()
            .map(|e| (&e.priority, &e.item))
            .ok_or(Error::Empty {
                structure: "priority queue",
            })
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
