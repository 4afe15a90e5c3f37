//! Structural properties of a graph.

use super::{Snapshot, Traversal};
use crate::graph::{Graph, Vertex};
use narwhal_collections::UnionFind;

#[derive(Debug)]
pub struct Describer<'g, V> {
    graph: &'g Graph<V>,
    snapshot: Snapshot<'g, V>,
}

impl<'g, V: Vertex> Describer<'g, V> {
    pub fn new(graph: &'g Graph<V>) -> Self {
        Self {
            graph,
            snapshot: Snapshot::new(graph),
        }
    }

    /// Every vertex has the same degree (the same in- and out-degree for directed graphs).
    pub fn is_regular(&self) -> bool {
        let degrees = self.graph.degree_list();
        let mut values = degrees.values();
        match values.next() {
            Some(first) => values.all(|d| d == first),
            None => true,
        }
    }

    /// Every vertex is adjacent to every other vertex (in both directions for directed graphs).
    /// Self-loops are ignored.
    pub fn is_complete(&self) -> bool {
        let n = self.snapshot.len();
        (0..n).all(|v| {
            let out = self.snapshot.out(v).iter().filter(|&&(u, _)| u != v).count();
            let incoming = self.snapshot.incoming(v).iter().filter(|&&u| u != v).count();
            out + 1 == n && incoming + 1 == n
        })
    }

    /// Two-colorable, ignoring edge direction. A self-loop rules it out.
    pub fn is_bipartite(&self) -> bool {
        let n = self.snapshot.len();
        let mut color: Vec<Option<bool>> = vec![None; n];
        for root in 0..n {
            if color[root].is_some() {
                continue;
            }
            color[root] = Some(false);
            let mut stack = vec![root];
            while let Some(v) = stack.pop() {
                let Some(side) = color[v] else {
                    debug_assert!(false, "stacked vertex without a color");
                    continue;
                };
                let neighbors = self
                    .snapshot
                    .out(v)
                    .iter()
                    .map(|&(u, _)| u)
                    .chain(self.snapshot.incoming(v).iter().copied());
                for u in neighbors {
                    match color[u] {
                        None => {
                            color[u] = Some(!side);
                            stack.push(u);
                        }
                        Some(other) if other == side => return false,
                        Some(_) => {}
                    }
                }
            }
        }
        true
    }

    /// Connected with exactly `|V| - 1` edges.
    pub fn is_tree(&self) -> bool {
        let n = self.graph.vertex_count();
        n > 0 && self.graph.component_count() == 1 && self.graph.edge_count() == n - 1
    }

    /// Acyclic in the undirected sense: exactly `|V| - components` edges.
    pub fn is_forest(&self) -> bool {
        self.graph.edge_count() + self.graph.component_count() == self.graph.vertex_count()
    }

    pub fn is_cyclic(&self) -> bool {
        Traversal::new(self.graph).is_cyclic()
    }

    /// Has an Eulerian trail: every edge lies in one connected component and, for undirected
    /// graphs, zero or two vertices have odd degree; for directed graphs, every vertex is balanced
    /// or exactly one has one extra outgoing edge and one has one extra incoming edge.
    pub fn is_eulerian(&self) -> bool {
        if !self.edges_connected() {
            return false;
        }
        let n = self.snapshot.len();
        if self.graph.is_directed() {
            let (mut starts, mut ends) = (0, 0);
            for v in 0..n {
                let out = self.snapshot.out(v).len();
                let incoming = self.snapshot.incoming(v).len();
                if out == incoming + 1 {
                    starts += 1;
                } else if incoming == out + 1 {
                    ends += 1;
                } else if out != incoming {
                    return false;
                }
            }
            return (starts, ends) == (0, 0) || (starts, ends) == (1, 1);
        }

        let odd = (0..n)
            .filter(|&v| {
                // A self-loop adds two to the degree.
                let loops = usize::from(self.snapshot.adjacent(v, v));
                (self.snapshot.out(v).len() + loops) % 2 == 1
            })
            .count();
        odd == 0 || odd == 2
    }

    /// Non-isolated vertices form a single component, ignoring direction.
    fn edges_connected(&self) -> bool {
        let mut uf = UnionFind::new(self.graph.vertices());
        for edge in self.graph.edges() {
            let (u, v) = edge.endpoints();
            let Ok(_) = uf.unify(&u, &v) else {
                debug_assert!(false, "edge endpoint missing from the vertex set");
                continue;
            };
        }
        let isolated = self
            .graph
            .vertices()
            .filter(|v| self.graph.neighbors(v).is_ok_and(|s| s.is_empty()))
            .filter(|v| self.graph.predecessors(v).is_ok_and(|s| s.is_empty()))
            .count();
        uf.number_of_components() <= isolated + 1
    }
}
