//! Graph container.
//!
//! The edge map is authoritative. `adjacency` (outgoing neighbors) and `incoming` (predecessors)
//! are derived indexes updated by every mutation. Undirected graphs store each edge once under a
//! canonical `(min, max)` key and mirror it in both adjacency directions.
//!
//! Algorithms are exposed as methods that build a short-lived component borrowing the graph
//! immutably; see [`crate::alg`].

mod document;
mod edge;
mod edge_key;
mod options;

pub use document::{EdgeEntry, GraphDocument, VertexEntry};
pub use edge::Edge;
pub use options::GraphOptions;

use crate::alg::{
    ClaspDirection, CycleDetection, CycleStrategy, DepthFirstOrder, DepthFirstSearch, Describer,
    MinimumSpanningTree, MstAlgorithm, ShortestPath, StronglyConnectedComponents, Traversal,
    WidestPath,
};
use crate::error::{Error, Result};
use crate::path::Path;
use edge_key::{EdgeKey, EdgeKeyView};
use narwhal_collections::UnionFind;
use rustc_hash::FxBuildHasher;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Requirements on vertex labels. Ordering drives iteration order, hashing drives the dense
/// relabeling computed per algorithm call, and `Debug` renders vertices in errors and logs.
pub trait Vertex: Clone + Ord + Hash + fmt::Debug {}

impl<T: Clone + Ord + Hash + fmt::Debug> Vertex for T {}

#[derive(Debug, Clone)]
pub struct Graph<V> {
    options: GraphOptions,
    adjacency: BTreeMap<V, BTreeSet<V>>,
    incoming: BTreeMap<V, BTreeSet<V>>,
    edges: HashMap<EdgeKey<V>, Edge<V>>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<V: Vertex> Graph<V> {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            adjacency: BTreeMap::new(),
            incoming: BTreeMap::new(),
            edges: HashMap::default(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphOptions::DIRECTED)
    }

    pub fn undirected() -> Self {
        Self::new(GraphOptions::UNDIRECTED)
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn add_vertex(&mut self, v: V) -> &mut Self {
        if !self.adjacency.contains_key(&v) {
            tracing::trace!(vertex = ?v, "add vertex");
            self.incoming.insert(v.clone(), BTreeSet::new());
            self.adjacency.insert(v, BTreeSet::new());
        }
        self
    }

    /// Removes `v` together with every edge incident to it.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        if !self.contains(v) {
            return false;
        }
        let outgoing: Vec<V> = self
            .adjacency
            .get(v)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default();
        for w in &outgoing {
            self.remove_edge(v, w);
        }
        let incoming: Vec<V> = self
            .incoming
            .get(v)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default();
        for u in &incoming {
            self.remove_edge(u, v);
        }
        self.adjacency.remove(v);
        self.incoming.remove(v);
        tracing::trace!(vertex = ?v, "remove vertex");
        true
    }

    /// Inserts or updates the edge `u -> v` (`{u, v}` for undirected graphs), creating missing
    /// endpoints. An existing edge keeps its endpoints and only has its weight replaced.
    pub fn set_edge(&mut self, u: V, v: V, weight: Option<f64>) -> &mut Self {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());

        let directed = self.is_directed();
        if let Some(edge) = self.edges.get_mut(&EdgeKeyView::new(&u, &v, directed)) {
            edge.set_weight(weight);
            return self;
        }

        self.link(&u, &v);
        if !directed {
            self.link(&v, &u);
        }
        tracing::trace!(source = ?u, destination = ?v, weight = ?weight, "add edge");
        let key = EdgeKey::new(&u, &v, directed);
        self.edges.insert(key, Edge::new(u, v, weight, directed));
        self
    }

    pub fn add_edge(&mut self, u: V, v: V) -> &mut Self {
        self.set_edge(u, v, None)
    }

    pub fn add_weighted_edge(&mut self, u: V, v: V, weight: f64) -> &mut Self {
        self.set_edge(u, v, Some(weight))
    }

    /// Adds unweighted edges between consecutive vertices of `vertices`.
    pub fn set_path(&mut self, vertices: &[V]) -> &mut Self {
        for pair in vertices.windows(2) {
            self.set_edge(pair[0].clone(), pair[1].clone(), None);
        }
        self
    }

    pub fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        let directed = self.is_directed();
        if self
            .edges
            .remove(&EdgeKeyView::new(u, v, directed))
            .is_none()
        {
            return false;
        }
        self.unlink(u, v);
        if !directed {
            self.unlink(v, u);
        }
        tracing::trace!(source = ?u, destination = ?v, "remove edge");
        true
    }

    fn link(&mut self, u: &V, v: &V) {
        if let Some(out) = self.adjacency.get_mut(u) {
            out.insert(v.clone());
        }
        if let Some(preds) = self.incoming.get_mut(v) {
            preds.insert(u.clone());
        }
    }

    fn unlink(&mut self, u: &V, v: &V) {
        if let Some(out) = self.adjacency.get_mut(u) {
            out.remove(v);
        }
        if let Some(preds) = self.incoming.get_mut(v) {
            preds.remove(u);
        }
    }

    pub fn contains(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.edges
            .contains_key(&EdgeKeyView::new(u, v, self.is_directed()))
    }

    pub fn edge(&self, u: &V, v: &V) -> Option<&Edge<V>> {
        self.edges.get(&EdgeKeyView::new(u, v, self.is_directed()))
    }

    pub(crate) fn require(&self, v: &V) -> Result<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(Error::vertex_not_found(v))
        }
    }

    /// Weight of the edge `u -> v`. A vertex is at distance `0.0` from itself.
    pub fn weight(&self, u: &V, v: &V) -> Result<f64> {
        self.require(u)?;
        self.require(v)?;
        if u == v {
            return Ok(0.0);
        }
        self.edge(u, v)
            .map(Edge::weight)
            .ok_or_else(|| Error::edge_not_found(u, v))
    }

    /// `(in, out)` degree. Undirected graphs report the same count twice.
    pub fn degree(&self, v: &V) -> Result<(usize, usize)> {
        let out = self.neighbors(v)?.len();
        if !self.is_directed() {
            return Ok((out, out));
        }
        Ok((self.predecessors(v)?.len(), out))
    }

    pub fn degree_list(&self) -> BTreeMap<V, (usize, usize)> {
        self.adjacency
            .iter()
            .map(|(v, out)| {
                let in_degree = if self.is_directed() {
                    self.incoming.get(v).map_or(0, BTreeSet::len)
                } else {
                    out.len()
                };
                (v.clone(), (in_degree, out.len()))
            })
            .collect()
    }

    pub fn neighbors(&self, v: &V) -> Result<&BTreeSet<V>> {
        self.adjacency
            .get(v)
            .ok_or_else(|| Error::vertex_not_found(v))
    }

    pub fn predecessors(&self, v: &V) -> Result<&BTreeSet<V>> {
        self.incoming
            .get(v)
            .ok_or_else(|| Error::vertex_not_found(v))
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in key order: by source, then destination. Undirected edges are visited once, from
    /// their smaller endpoint.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> + '_ {
        let directed = self.is_directed();
        self.adjacency.iter().flat_map(move |(u, out)| {
            out.iter()
                .filter(move |v| directed || u <= *v)
                .filter_map(move |v| self.edge(u, v))
        })
    }

    pub fn edge_list(&self) -> Vec<Edge<V>> {
        self.edges().cloned().collect()
    }

    pub fn adjacency(&self) -> &BTreeMap<V, BTreeSet<V>> {
        &self.adjacency
    }

    /// Merges `u` into `into`: every edge incident to `u` is rewired to `into` and `u` is
    /// removed. Edges between the two vertices disappear; a self-loop on `u` becomes a self-loop
    /// on `into`. When the rewired edge already exists at `into`, the existing one is kept.
    pub fn contract(&mut self, u: &V, into: &V) -> Result<()> {
        self.require(u)?;
        self.require(into)?;
        if u == into {
            return Ok(());
        }

        let mut rewired: Vec<(V, V, Option<f64>)> = Vec::new();
        for w in self.neighbors(u)? {
            let Some(edge) = self.edge(u, w) else {
                debug_assert!(false, "adjacency entry without an edge");
                continue;
            };
            if w == into {
                continue;
            }
            let target = if w == u { into.clone() } else { w.clone() };
            rewired.push((into.clone(), target, edge.explicit_weight()));
        }
        if self.is_directed() {
            for w in self.predecessors(u)? {
                if w == into || w == u {
                    continue;
                }
                let Some(edge) = self.edge(w, u) else {
                    debug_assert!(false, "incoming entry without an edge");
                    continue;
                };
                rewired.push((w.clone(), into.clone(), edge.explicit_weight()));
            }
        }

        self.remove_vertex(u);
        for (a, b, weight) in rewired {
            if !self.contains_edge(&a, &b) {
                self.set_edge(a, b, weight);
            }
        }
        tracing::debug!(vertex = ?u, into = ?into, "contract vertex");
        Ok(())
    }

    /// Subgraph on `vertices`, keeping every edge whose endpoints both survive.
    pub fn induce_vertices<'a>(&self, vertices: impl IntoIterator<Item = &'a V>) -> Result<Self>
    where
        V: 'a,
    {
        let mut sub = Self::new(self.options);
        for v in vertices {
            self.require(v)?;
            sub.add_vertex(v.clone());
        }
        for edge in self.edges() {
            let (u, v) = edge.endpoints();
            if sub.contains(u) && sub.contains(v) {
                sub.set_edge(u.clone(), v.clone(), edge.explicit_weight());
            }
        }
        Ok(sub)
    }

    /// Subgraph made of `edges` and their endpoints. Weights are taken from this graph.
    pub fn induce_edges<'a>(&self, edges: impl IntoIterator<Item = &'a Edge<V>>) -> Result<Self>
    where
        V: 'a,
    {
        let mut sub = Self::new(self.options);
        for requested in edges {
            let (u, v) = requested.endpoints();
            let edge = self.edge(u, v).ok_or_else(|| Error::edge_not_found(u, v))?;
            sub.set_edge(u.clone(), v.clone(), edge.explicit_weight());
        }
        Ok(sub)
    }

    /// Reverses every edge. An undirected graph is its own transpose.
    pub fn transpose(&self) -> Self {
        if !self.is_directed() {
            return self.clone();
        }
        let mut reversed = Self::new(self.options);
        for v in self.vertices() {
            reversed.add_vertex(v.clone());
        }
        for edge in self.edges() {
            let (u, v) = edge.endpoints();
            reversed.set_edge(v.clone(), u.clone(), edge.explicit_weight());
        }
        reversed
    }

    /// Vertices reachable from `v` (forward) or that can reach `v` (backward), `v` included.
    pub fn clasp(&self, v: &V, direction: ClaspDirection) -> Result<BTreeSet<V>> {
        Traversal::new(self).reachable(v, direction)
    }

    /// Number of connected components, ignoring edge direction.
    pub fn component_count(&self) -> usize {
        let mut uf = UnionFind::new(self.vertices());
        for edge in self.edges() {
            let (u, v) = edge.endpoints();
            let Ok(_) = uf.unify(&u, &v) else {
                debug_assert!(false, "edge endpoint missing from the vertex set");
                continue;
            };
        }
        uf.number_of_components()
    }

    pub fn shortest_paths(&self, source: &V) -> Result<BTreeMap<V, Path<V>>> {
        ShortestPath::new(self).from_source(source)
    }

    pub fn shortest_path(&self, source: &V, destination: &V) -> Result<Path<V>> {
        ShortestPath::new(self).between(source, destination)
    }

    /// Fewest edges from `source` to `destination`, or `None` when unreachable.
    pub fn distance(&self, source: &V, destination: &V) -> Result<Option<usize>> {
        ShortestPath::new(self).hops(source, destination)
    }

    pub fn all_distances(&self) -> BTreeMap<V, BTreeMap<V, f64>> {
        ShortestPath::new(self).all_distances()
    }

    pub fn widest_paths(&self, source: &V) -> Result<BTreeMap<V, Path<V>>> {
        WidestPath::new(self).widest(source)
    }

    pub fn narrowest_paths(&self, source: &V) -> Result<BTreeMap<V, Path<V>>> {
        WidestPath::new(self).narrowest(source)
    }

    pub fn minimum_spanning_tree(&self, algorithm: MstAlgorithm) -> Result<Path<Edge<V>>> {
        MinimumSpanningTree::new(self).compute(algorithm)
    }

    pub fn strongly_connected_components(&self) -> Result<Vec<Vec<V>>> {
        StronglyConnectedComponents::new(self).components()
    }

    pub fn cycles(&self, strategy: CycleStrategy, isomorphic: bool) -> Vec<Vec<V>> {
        CycleDetection::new(self).find(strategy, isomorphic)
    }

    pub fn is_cyclic(&self) -> bool {
        Traversal::new(self).is_cyclic()
    }

    pub fn breadth_first(&self, start: &V) -> Result<Path<V>> {
        Traversal::new(self).breadth_first(start)
    }

    pub fn depth_first(&self, start: &V) -> Result<DepthFirstSearch<V>> {
        Traversal::new(self).depth_first(start)
    }

    pub fn depth_first_order(&self) -> DepthFirstOrder<V> {
        Traversal::new(self).depth_first_order()
    }

    pub fn describe(&self) -> Describer<'_, V> {
        Describer::new(self)
    }
}

impl<V: Vertex + fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, out) in &self.adjacency {
            write!(f, "{v}:")?;
            for w in out {
                match self.edge(v, w).and_then(Edge::explicit_weight) {
                    Some(weight) => write!(f, " {w}({weight})")?,
                    None => write!(f, " {w}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
