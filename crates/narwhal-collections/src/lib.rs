#![forbid(unsafe_code)]

//! Heap and disjoint-set primitives used by `narwhal`.
//!
//! The graph algorithms only need three structures beyond the standard collections:
//! a plain min/max priority queue, an index-addressable priority queue with decrease-key, and a
//! union-find over arbitrary hashable elements.

pub mod error;
pub mod indexed_priority_queue;
pub mod priority_queue;
pub mod union_find;

pub use error::{Error, Result};
pub use indexed_priority_queue::IndexedPriorityQueue;
pub use priority_queue::{HeapKind, PriorityQueue};
pub use union_find::UnionFind;
