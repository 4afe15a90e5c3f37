#![forbid(unsafe_code)]

//! Weighted graph container and the classic algorithms over it.
//!
//! A [`Graph`] owns vertices and edges; queries such as [`Graph::shortest_paths`] build a
//! throwaway algorithm component from [`alg`] that borrows the graph immutably for its lifetime.
//! Supporting heaps and the union-find live in [`narwhal_collections`], re-exported here as
//! [`collections`].

pub mod alg;
pub mod error;
pub mod generate;
pub mod graph;
pub mod path;

pub use narwhal_collections as collections;

pub use alg::{
    ClaspDirection, CycleStrategy, DepthFirstOrder, DepthFirstSearch, MstAlgorithm,
};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeEntry, Graph, GraphDocument, GraphOptions, Vertex, VertexEntry};
pub use path::Path;
