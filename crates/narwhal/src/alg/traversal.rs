//! Breadth-first and depth-first traversals, reachability and acyclicity.

use super::Snapshot;
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use crate::path::Path;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::str::FromStr;

/// Direction of a reachability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaspDirection {
    /// Vertices reachable from the start.
    Forward,
    /// Vertices the start is reachable from.
    Backward,
}

impl FromStr for ClaspDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Self::Forward),
            "-" => Ok(Self::Backward),
            other => Err(Error::invalid_operation(format!(
                "unknown clasp direction {other:?}, expected \"+\" or \"-\""
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstSearch<V> {
    /// Vertices in discovery order.
    pub order: Vec<V>,
    /// `(discovery, finish)` timestamps from a single clock starting at 1.
    pub times: BTreeMap<V, (usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstOrder<V> {
    pub preorder: Vec<V>,
    pub postorder: Vec<V>,
    /// Topological order when the graph is a DAG.
    pub reverse_postorder: Vec<V>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

#[derive(Debug)]
pub struct Traversal<'g, V> {
    graph: &'g Graph<V>,
    snapshot: Snapshot<'g, V>,
}

impl<'g, V: Vertex> Traversal<'g, V> {
    pub fn new(graph: &'g Graph<V>) -> Self {
        Self {
            graph,
            snapshot: Snapshot::new(graph),
        }
    }

    /// Vertices in breadth-first visit order, starting with `start`.
    pub fn breadth_first(&self, start: &V) -> Result<Path<V>> {
        let s = self.snapshot.index_of(start)?;
        let mut visited = vec![false; self.snapshot.len()];
        visited[s] = true;
        let mut queue = VecDeque::from([s]);
        let mut path = Path::new();
        while let Some(v) = queue.pop_front() {
            path.push_back(self.snapshot.vertex(v).clone(), 0.0);
            for &(u, _) in self.snapshot.out(v) {
                if !visited[u] {
                    visited[u] = true;
                    queue.push_back(u);
                }
            }
        }
        Ok(path)
    }

    pub fn depth_first(&self, start: &V) -> Result<DepthFirstSearch<V>> {
        let s = self.snapshot.index_of(start)?;
        let mut search = DepthFirstSearch {
            order: Vec::new(),
            times: BTreeMap::new(),
        };
        let mut discovered = vec![0_usize; self.snapshot.len()];
        let mut visited = vec![false; self.snapshot.len()];
        let mut clock = 0;

        visited[s] = true;
        clock += 1;
        discovered[s] = clock;
        search.order.push(start.clone());
        let mut frames: Vec<(usize, usize)> = vec![(s, 0)];
        while let Some(frame) = frames.last_mut() {
            let v = frame.0;
            if let Some(&(u, _)) = self.snapshot.out(v).get(frame.1) {
                frame.1 += 1;
                if !visited[u] {
                    visited[u] = true;
                    clock += 1;
                    discovered[u] = clock;
                    search.order.push(self.snapshot.vertex(u).clone());
                    frames.push((u, 0));
                }
                continue;
            }
            frames.pop();
            clock += 1;
            search
                .times
                .insert(self.snapshot.vertex(v).clone(), (discovered[v], clock));
        }
        Ok(search)
    }

    /// Pre-, post- and reverse postorder over every vertex, restarting from each unvisited vertex
    /// in key order.
    pub fn depth_first_order(&self) -> DepthFirstOrder<V> {
        let n = self.snapshot.len();
        let mut visited = vec![false; n];
        let mut preorder = Vec::with_capacity(n);
        let mut postorder = Vec::with_capacity(n);

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            preorder.push(root);
            let mut frames: Vec<(usize, usize)> = vec![(root, 0)];
            while let Some(frame) = frames.last_mut() {
                let v = frame.0;
                if let Some(&(u, _)) = self.snapshot.out(v).get(frame.1) {
                    frame.1 += 1;
                    if !visited[u] {
                        visited[u] = true;
                        preorder.push(u);
                        frames.push((u, 0));
                    }
                    continue;
                }
                frames.pop();
                postorder.push(v);
            }
        }

        let label = |order: &[usize]| -> Vec<V> {
            order
                .iter()
                .map(|&i| self.snapshot.vertex(i).clone())
                .collect()
        };
        let reverse: Vec<usize> = postorder.iter().rev().copied().collect();
        DepthFirstOrder {
            preorder: label(&preorder),
            postorder: label(&postorder),
            reverse_postorder: label(&reverse),
        }
    }

    pub fn reachable(&self, start: &V, direction: ClaspDirection) -> Result<BTreeSet<V>> {
        let s = self.snapshot.index_of(start)?;
        let mut visited = vec![false; self.snapshot.len()];
        visited[s] = true;
        let mut stack = vec![s];
        let mut reached = BTreeSet::new();
        while let Some(v) = stack.pop() {
            reached.insert(self.snapshot.vertex(v).clone());
            let mut push = |u: usize| {
                if !visited[u] {
                    visited[u] = true;
                    stack.push(u);
                }
            };
            match direction {
                ClaspDirection::Forward => {
                    for &(u, _) in self.snapshot.out(v) {
                        push(u);
                    }
                }
                ClaspDirection::Backward => {
                    for &u in self.snapshot.incoming(v) {
                        push(u);
                    }
                }
            }
        }
        Ok(reached)
    }

    /// Directed graphs: any directed cycle, self-loops included. Undirected graphs: any cycle of
    /// three or more vertices.
    pub fn is_cyclic(&self) -> bool {
        let n = self.snapshot.len();
        let directed = self.graph.is_directed();
        let mut color = vec![Color::White; n];

        for root in 0..n {
            if color[root] != Color::White {
                continue;
            }
            color[root] = Color::Gray;
            // (vertex, parent, next neighbor position)
            let mut frames: Vec<(usize, Option<usize>, usize)> = vec![(root, None, 0)];
            while let Some(frame) = frames.last_mut() {
                let (v, parent) = (frame.0, frame.1);
                let Some(&(u, _)) = self.snapshot.out(v).get(frame.2) else {
                    color[v] = Color::Black;
                    frames.pop();
                    continue;
                };
                frame.2 += 1;

                if directed {
                    match color[u] {
                        Color::Gray => return true,
                        Color::White => {
                            color[u] = Color::Gray;
                            frames.push((u, Some(v), 0));
                        }
                        Color::Black => {}
                    }
                } else {
                    if u == v || Some(u) == parent {
                        continue;
                    }
                    if color[u] != Color::White {
                        return true;
                    }
                    color[u] = Color::Gray;
                    frames.push((u, Some(v), 0));
                }
            }
        }
        false
    }
}
