//! Indexed d-ary min-heap.
//!
//! Values are addressed by an external index in `0..capacity`. `position` maps an index to its heap
//! slot and `inverse` maps a heap slot back to its index; the two are kept as mutual inverses so
//! that decrease-key on an index is `O(log_d n)` without searching the heap.

use crate::error::{Error, Result};

const STRUCTURE: &str = "indexed priority queue";

#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<T> {
    degree: usize,
    values: Vec<Option<T>>,
    position: Vec<Option<usize>>,
    inverse: Vec<usize>,
}

impl<T: PartialOrd> IndexedPriorityQueue<T> {
    /// Binary heap over indices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            degree: 2,
            values: (0..capacity).map(|_| None).collect(),
            position: vec![None; capacity],
            inverse: Vec::with_capacity(capacity),
        }
    }

    /// Heap with `degree` children per node.
    pub fn with_degree(capacity: usize, degree: usize) -> Result<Self> {
        if degree < 2 {
            return Err(Error::InvalidDegree { degree });
        }
        let mut q = Self::new(capacity);
        q.degree = degree;
        Ok(q)
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn len(&self) -> usize {
        self.inverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inverse.is_empty()
    }

    pub fn contains(&self, k: usize) -> Result<bool> {
        self.check_index(k)?;
        Ok(self.position[k].is_some())
    }

    pub fn insert(&mut self, k: usize, value: T) -> Result<()> {
        if self.contains(k)? {
            return Err(Error::DuplicateIndex { index: k });
        }
        let slot = self.inverse.len();
        self.position[k] = Some(slot);
        self.inverse.push(k);
        self.values[k] = Some(value);
        self.swim(slot);
        Ok(())
    }

    pub fn value_of(&self, k: usize) -> Result<&T> {
        self.check_index(k)?;
        self.values[k].as_ref().ok_or(Error::MissingIndex { index: k })
    }

    /// Index currently holding the smallest value.
    pub fn peek_index(&self) -> Result<usize> {
        self.inverse.first().copied().ok_or(Error::Empty {
            structure: STRUCTURE,
        })
    }

    pub fn peek(&self) -> Result<(usize, &T)> {
        let k = self.peek_index()?;
        Ok((k, self.value_of(k)?))
    }

    /// Removes and returns the smallest value together with its index.
    pub fn poll(&mut self) -> Result<(usize, T)> {
        let k = self.peek_index()?;
        let value = self.remove(k)?;
        Ok((k, value))
    }

    pub fn remove(&mut self, k: usize) -> Result<T> {
        let slot = self.slot_of(k)?;
        let last = self.inverse.len() - 1;
        self.swap(slot, last);
        self.inverse.pop();
        self.position[k] = None;
        let value = self.values[k].take().ok_or(Error::MissingIndex { index: k })?;
        if slot < self.inverse.len() {
            self.sink(slot);
            self.swim(slot);
        }
        Ok(value)
    }

    /// Replaces the value at `k` regardless of direction and returns the previous one.
    pub fn change(&mut self, k: usize, value: T) -> Result<T> {
        let slot = self.slot_of(k)?;
        let old = self.values[k].replace(value).ok_or(Error::MissingIndex { index: k })?;
        self.sink(slot);
        self.swim(slot);
        Ok(old)
    }

    /// Lowers the value at `k`. No-op unless `value` is strictly smaller.
    pub fn decrease(&mut self, k: usize, value: T) -> Result<()> {
        let slot = self.slot_of(k)?;
        if self.values[k].as_ref().is_some_and(|cur| value < *cur) {
            self.values[k] = Some(value);
            self.swim(slot);
        }
        Ok(())
    }

    /// Raises the value at `k`. No-op unless `value` is strictly larger.
    pub fn increase(&mut self, k: usize, value: T) -> Result<()> {
        let slot = self.slot_of(k)?;
        if self.values[k].as_ref().is_some_and(|cur| *cur < value) {
            self.values[k] = Some(value);
            self.sink(slot);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        for k in self.inverse.drain(..) {
            self.position[k] = None;
            self.values[k] = None;
        }
    }

    /// Iterates `(index, value)` pairs in heap-slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.inverse
            .iter()
            .filter_map(|&k| self.values[k].as_ref().map(|v| (k, v)))
    }

    /// Checks that `position` and `inverse` are mutual inverses and that heap order holds.
    pub fn is_consistent(&self) -> bool {
        let inverse_ok = self
            .inverse
            .iter()
            .enumerate()
            .all(|(slot, &k)| self.position[k] == Some(slot) && self.values[k].is_some());
        let tracked = self.position.iter().filter(|p| p.is_some()).count();
        let heap_ok = (1..self.inverse.len()).all(|slot| !self.less(slot, (slot - 1) / self.degree));
        inverse_ok && tracked == self.inverse.len() && heap_ok
    }

    fn check_index(&self, k: usize) -> Result<()> {
        if k >= self.values.len() {
            return Err(Error::IndexOutOfRange {
                index: k,
                capacity: self.values.len(),
            });
        }
        Ok(())
    }

    fn slot_of(&self, k: usize) -> Result<usize> {
        self.check_index(k)?;
        self.position[k].ok_or(Error::MissingIndex { index: k })
    }

    fn less(&self, i: usize, j: usize) -> bool {
        match (&self.values[self.inverse[i]], &self.values[self.inverse[j]]) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.inverse.swap(i, j);
        self.position[self.inverse[i]] = Some(i);
        self.position[self.inverse[j]] = Some(j);
    }

    fn swim(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / self.degree;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sink(&mut self, mut i: usize) {
        loop {
            let first = i * self.degree + 1;
            if first >= self.inverse.len() {
                break;
            }
            let end = (first + self.degree).min(self.inverse.len());
            let mut best = i;
            for child in first..end {
                if self.less(child, best) {
                    best = child;
                }
            }
            if best == i {
                break;
            }
            self.swap(i, best);
            i = best;
        }
    }
}
