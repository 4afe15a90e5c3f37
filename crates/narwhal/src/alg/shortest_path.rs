//! Single-source, single-pair, all-pairs and hop-count shortest paths.

use super::Snapshot;
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use crate::path::Path;
use narwhal_collections::PriorityQueue;
use std::collections::BTreeMap;

/// Distances and the parent table of a single-source run.
struct Tree {
    distance: Vec<f64>,
    parent: Vec<Option<usize>>,
}

impl Tree {
    fn new(n: usize, source: usize) -> Self {
        let mut distance = vec![f64::INFINITY; n];
        distance[source] = 0.0;
        Self {
            distance,
            parent: vec![None; n],
        }
    }
}

/// Picks Dijkstra when every weight is non-negative and Bellman-Ford otherwise.
#[derive(Debug)]
pub struct ShortestPath<'g, V> {
    snapshot: Snapshot<'g, V>,
}

impl<'g, V: Vertex> ShortestPath<'g, V> {
    pub fn new(graph: &'g Graph<V>) -> Self {
        Self {
            snapshot: Snapshot::new(graph),
        }
    }

    pub fn has_negative_weight(&self) -> bool {
        self.snapshot.has_negative_weight()
    }

    /// Shortest path from `source` to every vertex. Unreachable vertices map to an empty path of
    /// weight `+inf`; vertices behind a reachable negative cycle get weight `-inf`.
    pub fn from_source(&self, source: &V) -> Result<BTreeMap<V, Path<V>>> {
        let tree = self.tree(self.snapshot.index_of(source)?);
        Ok(self
            .snapshot
            .paths_from_parents(&tree.distance, &tree.parent))
    }

    pub fn dijkstra(&self, source: &V) -> Result<BTreeMap<V, Path<V>>> {
        let source = self.snapshot.index_of(source)?;
        if self.has_negative_weight() {
            return Err(Error::invalid_operation(
                "dijkstra requires non-negative edge weights",
            ));
        }
        let tree = self.dijkstra_tree(source);
        Ok(self
            .snapshot
            .paths_from_parents(&tree.distance, &tree.parent))
    }

    pub fn bellman_ford(&self, source: &V) -> Result<BTreeMap<V, Path<V>>> {
        let tree = self.bellman_ford_tree(self.snapshot.index_of(source)?);
        Ok(self
            .snapshot
            .paths_from_parents(&tree.distance, &tree.parent))
    }

    pub fn between(&self, source: &V, destination: &V) -> Result<Path<V>> {
        let s = self.snapshot.index_of(source)?;
        let t = self.snapshot.index_of(destination)?;
        let tree = self.tree(s);
        let mut seen = vec![false; self.snapshot.len()];
        Ok(self
            .snapshot
            .path_to(t, tree.distance[t], &tree.parent, &mut seen))
    }

    fn tree(&self, source: usize) -> Tree {
        if self.has_negative_weight() {
            tracing::debug!(source = ?self.snapshot.vertex(source), algorithm = "bellman-ford", "shortest paths");
            self.bellman_ford_tree(source)
        } else {
            tracing::debug!(source = ?self.snapshot.vertex(source), algorithm = "dijkstra", "shortest paths");
            self.dijkstra_tree(source)
        }
    }

    fn dijkstra_tree(&self, source: usize) -> Tree {
        let n = self.snapshot.len();
        let mut tree = Tree::new(n, source);
        let mut visited = vec![false; n];
        let mut queue = PriorityQueue::min();
        queue.push(0.0, source);

        while let Some((d, u)) = queue.pop() {
            if visited[u] || d > tree.distance[u] {
                continue;
            }
            visited[u] = true;
            for &(w, weight) in self.snapshot.out(u) {
                if visited[w] {
                    continue;
                }
                let candidate = tree.distance[u] + weight;
                if candidate < tree.distance[w] {
                    tree.distance[w] = candidate;
                    tree.parent[w] = Some(u);
                    queue.push(candidate, w);
                }
            }
        }
        tree
    }

    fn bellman_ford_tree(&self, source: usize) -> Tree {
        let n = self.snapshot.len();
        let mut tree = Tree::new(n, source);
        let edges: Vec<(usize, usize, f64)> = (0..n)
            .flat_map(|u| self.snapshot.out(u).iter().map(move |&(w, weight)| (u, w, weight)))
            .collect();

        for _ in 1..n {
            let mut changed = false;
            for &(u, w, weight) in &edges {
                if tree.distance[u] == f64::INFINITY {
                    continue;
                }
                let candidate = tree.distance[u] + weight;
                if candidate < tree.distance[w] {
                    tree.distance[w] = candidate;
                    tree.parent[w] = Some(u);
                    changed = true;
                }
            }
            if !changed {
                return tree;
            }
        }

        let mut negative_cycle = false;
        for _ in 0..n {
            let mut changed = false;
            for &(u, w, weight) in &edges {
                if tree.distance[u] == f64::INFINITY {
                    continue;
                }
                if tree.distance[u] + weight < tree.distance[w] {
                    tree.distance[w] = f64::NEG_INFINITY;
                    tree.parent[w] = Some(u);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
            negative_cycle = true;
        }
        if negative_cycle {
            tracing::warn!(source = ?self.snapshot.vertex(source), "negative cycle reachable from source");
        }
        tree
    }

    /// Floyd-Warshall over every pair. Missing routes are `+inf`.
    pub fn all_distances(&self) -> BTreeMap<V, BTreeMap<V, f64>> {
        let n = self.snapshot.len();
        let mut matrix = vec![vec![f64::INFINITY; n]; n];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = 0.0;
            for &(j, weight) in self.snapshot.out(i) {
                row[j] = row[j].min(weight);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let via = matrix[i][k];
                if via == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let candidate = via + matrix[k][j];
                    if candidate < matrix[i][j] {
                        matrix[i][j] = candidate;
                    }
                }
            }
        }
        tracing::debug!(vertices = n, "all-pairs distances");

        matrix
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let row = row
                    .into_iter()
                    .enumerate()
                    .map(|(j, d)| (self.snapshot.vertex(j).clone(), d))
                    .collect();
                (self.snapshot.vertex(i).clone(), row)
            })
            .collect()
    }

    /// Fewest edges from `source` to `destination`.
    pub fn hops(&self, source: &V, destination: &V) -> Result<Option<usize>> {
        let s = self.snapshot.index_of(source)?;
        let t = self.snapshot.index_of(destination)?;
        if s == t {
            return Ok(Some(0));
        }

        let mut reached = vec![false; self.snapshot.len()];
        reached[s] = true;
        let mut queue = PriorityQueue::min();
        queue.push(0_usize, s);
        while let Some((hops, u)) = queue.pop() {
            if u == t {
                return Ok(Some(hops));
            }
            for &(w, _) in self.snapshot.out(u) {
                if !reached[w] {
                    reached[w] = true;
                    queue.push(hops + 1, w);
                }
            }
        }
        Ok(None)
    }
}
