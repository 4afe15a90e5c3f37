//! Graph algorithms.
//!
//! Every component borrows a [`Graph`] for its lifetime and works over a [`Snapshot`]: the
//! vertices relabeled densely in key order, with weighted adjacency lists indexed by position.

mod cycles;
mod describe;
mod scc;
mod shortest_path;
mod spanning_tree;
mod traversal;
mod widest_path;

pub use cycles::{CycleDetection, CycleStrategy};
pub use describe::Describer;
pub use scc::StronglyConnectedComponents;
pub use shortest_path::ShortestPath;
pub use spanning_tree::{MinimumSpanningTree, MstAlgorithm};
pub use traversal::{ClaspDirection, DepthFirstOrder, DepthFirstSearch, Traversal};
pub use widest_path::WidestPath;

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use crate::path::Path;
use rustc_hash::FxBuildHasher;
use std::collections::BTreeMap;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Dense, read-only view of a graph. Both `out[i]` and `incoming[i]` are sorted by position, which
/// matches the key order of the underlying sets.
#[derive(Debug)]
pub(crate) struct Snapshot<'g, V> {
    vertices: Vec<&'g V>,
    index: HashMap<&'g V, usize>,
    out: Vec<Vec<(usize, f64)>>,
    incoming: Vec<Vec<usize>>,
}

impl<'g, V: Vertex> Snapshot<'g, V> {
    pub(crate) fn new(graph: &'g Graph<V>) -> Self {
        let vertices: Vec<&V> = graph.vertices().collect();
        let index: HashMap<&V, usize> = vertices.iter().enumerate().map(|(i, v)| (*v, i)).collect();

        let mut out = vec![Vec::new(); vertices.len()];
        let mut incoming = vec![Vec::new(); vertices.len()];
        for (i, (u, neighbors)) in graph.adjacency().iter().enumerate() {
            for w in neighbors {
                let (Some(&j), Some(edge)) = (index.get(w), graph.edge(u, w)) else {
                    debug_assert!(false, "adjacency out of sync with the edge map");
                    continue;
                };
                out[i].push((j, edge.weight()));
                incoming[j].push(i);
            }
        }

        Self {
            vertices,
            index,
            out,
            incoming,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn vertex(&self, i: usize) -> &'g V {
        self.vertices[i]
    }

    pub(crate) fn index_of(&self, v: &V) -> Result<usize> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| Error::vertex_not_found(v))
    }

    pub(crate) fn out(&self, i: usize) -> &[(usize, f64)] {
        &self.out[i]
    }

    pub(crate) fn incoming(&self, i: usize) -> &[usize] {
        &self.incoming[i]
    }

    pub(crate) fn adjacent(&self, i: usize, j: usize) -> bool {
        self.out[i].binary_search_by_key(&j, |&(k, _)| k).is_ok()
    }

    pub(crate) fn has_negative_weight(&self) -> bool {
        self.out.iter().flatten().any(|&(_, w)| w < 0.0)
    }

    /// Materializes one path per vertex from a parent table. `weights[i]` becomes the weight of
    /// the path to `i`. The walk stops at the first repeated vertex, so parent cycles left by a
    /// negative cycle terminate.
    pub(crate) fn paths_from_parents(
        &self,
        weights: &[f64],
        parent: &[Option<usize>],
    ) -> BTreeMap<V, Path<V>> {
        let mut seen = vec![false; self.len()];
        (0..self.len())
            .map(|i| {
                let path = self.path_to(i, weights[i], parent, &mut seen);
                (self.vertex(i).clone(), path)
            })
            .collect()
    }

    pub(crate) fn path_to(
        &self,
        target: usize,
        weight: f64,
        parent: &[Option<usize>],
        seen: &mut [bool],
    ) -> Path<V> {
        let mut path = Path::with_weight(weight);
        let mut trail = Vec::new();
        let mut current = target;
        while let Some(p) = parent[current] {
            if seen[current] {
                break;
            }
            seen[current] = true;
            trail.push(current);
            path.push_front(self.vertex(current).clone(), 0.0);
            current = p;
        }
        if !path.is_empty() && !seen[current] {
            path.push_front(self.vertex(current).clone(), 0.0);
        }
        for i in trail {
            seen[i] = false;
        }
        path
    }
}
