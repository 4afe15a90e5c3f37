use super::Snapshot;
use crate::error::Result;
use crate::graph::{Edge, Graph, Vertex};
use crate::path::Path;
use narwhal_collections::{IndexedPriorityQueue, UnionFind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MstAlgorithm {
    Kruskal,
    #[default]
    Prim,
}

/// Minimum spanning tree, or spanning forest when the graph is disconnected. The result lists
/// tree edges in the order they were chosen, weighted by their total.
#[derive(Debug)]
pub struct MinimumSpanningTree<'g, V> {
    graph: &'g Graph<V>,
    snapshot: Snapshot<'g, V>,
}

impl<'g, V: Vertex> MinimumSpanningTree<'g, V> {
    pub fn new(graph: &'g Graph<V>) -> Self {
        Self {
            graph,
            snapshot: Snapshot::new(graph),
        }
    }

    pub fn compute(&self, algorithm: MstAlgorithm) -> Result<Path<Edge<V>>> {
        let tree = match algorithm {
            MstAlgorithm::Kruskal => self.kruskal()?,
            MstAlgorithm::Prim => self.prim()?,
        };
        tracing::debug!(
            algorithm = ?algorithm,
            edges = tree.len(),
            weight = tree.weight(),
            "minimum spanning tree"
        );
        Ok(tree)
    }

    /// Edge direction is ignored. Equal weights keep key order.
    pub fn kruskal(&self) -> Result<Path<Edge<V>>> {
        let mut edges: Vec<&Edge<V>> = self.graph.edges().collect();
        edges.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

        let mut uf = UnionFind::new(self.graph.vertices());
        let mut tree = Path::new();
        for edge in edges {
            let (u, v) = edge.endpoints();
            if uf.unify(&u, &v)? {
                tree.push_back(edge.clone(), edge.weight());
            }
        }
        Ok(tree)
    }

    /// Grows a tree from the first unvisited vertex, restarting until every vertex is covered.
    /// Directed graphs only follow outgoing edges.
    pub fn prim(&self) -> Result<Path<Edge<V>>> {
        let n = self.snapshot.len();
        let mut visited = vec![false; n];
        let mut via: Vec<Option<usize>> = vec![None; n];
        let mut queue: IndexedPriorityQueue<f64> = IndexedPriorityQueue::new(n);
        let mut tree = Path::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            queue.insert(root, 0.0)?;
            while !queue.is_empty() {
                let (k, key) = queue.poll()?;
                visited[k] = true;
                if let Some(p) = via[k] {
                    let from = self.snapshot.vertex(p);
                    let Some(edge) = self.graph.edge(from, self.snapshot.vertex(k)) else {
                        debug_assert!(false, "tree edge missing from the graph");
                        continue;
                    };
                    tree.push_back(edge.oriented_from(from), key);
                }

                for &(w, weight) in self.snapshot.out(k) {
                    if visited[w] {
                        continue;
                    }
                    if queue.contains(w)? {
                        if weight < *queue.value_of(w)? {
                            queue.decrease(w, weight)?;
                            via[w] = Some(k);
                        }
                    } else {
                        queue.insert(w, weight)?;
                        via[w] = Some(k);
                    }
                }
            }
        }
        Ok(tree)
    }
}
