//! Weighted sequences returned by the algorithms.
//!
//! A [`Path`] is used both for vertex routes (shortest, widest, traversal order) and for edge
//! lists (spanning trees). The weight is maintained by the caller through the `delta` argument of
//! the push/pop operations.

use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Path<T> {
    items: VecDeque<T>,
    weight: f64,
}

impl<T> Default for Path<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Path<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            weight: 0.0,
        }
    }

    pub fn with_weight(weight: f64) -> Self {
        Self {
            items: VecDeque::new(),
            weight,
        }
    }

    pub fn from_items(items: impl IntoIterator<Item = T>, weight: f64) -> Self {
        Self {
            items: items.into_iter().collect(),
            weight,
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.items.get(i)
    }

    pub fn push_back(&mut self, item: T, delta: f64) {
        self.items.push_back(item);
        self.weight += delta;
    }

    pub fn push_front(&mut self, item: T, delta: f64) {
        self.items.push_front(item);
        self.weight += delta;
    }

    pub fn pop_back(&mut self, delta: f64) -> Option<T> {
        let item = self.items.pop_back()?;
        self.weight -= delta;
        Some(item)
    }

    pub fn pop_front(&mut self, delta: f64) -> Option<T> {
        let item = self.items.pop_front()?;
        self.weight -= delta;
        Some(item)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }
}

impl<T: PartialEq> Path<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T: Clone> Path<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> IntoIterator for Path<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, " | weight: {}", self.weight)
    }
}
