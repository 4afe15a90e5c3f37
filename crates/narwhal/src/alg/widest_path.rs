//! Bottleneck paths.
//!
//! The widest path to a vertex maximizes its smallest edge weight; the narrowest path minimizes
//! its largest edge weight. Both run the Dijkstra skeleton with `min`/`max` as the combining
//! operator.

use super::Snapshot;
use crate::error::Result;
use crate::graph::{Graph, Vertex};
use crate::path::Path;
use narwhal_collections::{HeapKind, PriorityQueue};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy)]
enum Bottleneck {
    Widest,
    Narrowest,
}

impl Bottleneck {
    fn start(self) -> f64 {
        match self {
            Self::Widest => f64::INFINITY,
            Self::Narrowest => f64::NEG_INFINITY,
        }
    }

    fn heap(self) -> HeapKind {
        match self {
            Self::Widest => HeapKind::Max,
            Self::Narrowest => HeapKind::Min,
        }
    }

    fn combine(self, through: f64, weight: f64) -> f64 {
        match self {
            Self::Widest => through.min(weight),
            Self::Narrowest => through.max(weight),
        }
    }

    fn improves(self, candidate: f64, current: f64) -> bool {
        match self {
            Self::Widest => candidate > current,
            Self::Narrowest => candidate < current,
        }
    }
}

#[derive(Debug)]
pub struct WidestPath<'g, V> {
    snapshot: Snapshot<'g, V>,
}

impl<'g, V: Vertex> WidestPath<'g, V> {
    pub fn new(graph: &'g Graph<V>) -> Self {
        Self {
            snapshot: Snapshot::new(graph),
        }
    }

    /// Source maps to an empty path of weight `+inf`; unreachable vertices to `-inf`.
    pub fn widest(&self, source: &V) -> Result<BTreeMap<V, Path<V>>> {
        self.run(source, Bottleneck::Widest)
    }

    /// Source maps to an empty path of weight `-inf`; unreachable vertices to `+inf`.
    pub fn narrowest(&self, source: &V) -> Result<BTreeMap<V, Path<V>>> {
        self.run(source, Bottleneck::Narrowest)
    }

    fn run(&self, source: &V, mode: Bottleneck) -> Result<BTreeMap<V, Path<V>>> {
        let s = self.snapshot.index_of(source)?;
        let n = self.snapshot.len();
        tracing::debug!(source = ?source, mode = ?mode, "bottleneck paths");

        let mut width = vec![-mode.start(); n];
        let mut parent = vec![None; n];
        let mut visited = vec![false; n];
        width[s] = mode.start();

        let mut queue = PriorityQueue::new(mode.heap());
        queue.push(width[s], s);
        while let Some((_, u)) = queue.pop() {
            if visited[u] {
                continue;
            }
            visited[u] = true;
            for &(w, weight) in self.snapshot.out(u) {
                if visited[w] {
                    continue;
                }
                let candidate = mode.combine(width[u], weight);
                if mode.improves(candidate, width[w]) {
                    width[w] = candidate;
                    parent[w] = Some(u);
                    queue.push(candidate, w);
                }
            }
        }

        Ok(self.snapshot.paths_from_parents(&width, &parent))
    }
}
