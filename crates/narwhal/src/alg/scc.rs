use super::Snapshot;
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};

#[derive(Debug)]
pub struct StronglyConnectedComponents<'g, V> {
    graph: &'g Graph<V>,
    snapshot: Snapshot<'g, V>,
}

impl<'g, V: Vertex> StronglyConnectedComponents<'g, V> {
    pub fn new(graph: &'g Graph<V>) -> Self {
        Self {
            graph,
            snapshot: Snapshot::new(graph),
        }
    }

    /// Components in the order Tarjan's algorithm completes them, each sorted.
    pub fn components(&self) -> Result<Vec<Vec<V>>> {
        if !self.graph.is_directed() {
            return Err(Error::invalid_operation(
                "strongly connected components require a directed graph",
            ));
        }

        let mut tarjan = Tarjan::new(&self.snapshot);
        for v in 0..self.snapshot.len() {
            if tarjan.ids[v].is_none() {
                tarjan.visit(v);
            }
        }
        tracing::debug!(components = tarjan.components.len(), "strongly connected components");

        Ok(tarjan
            .components
            .into_iter()
            .map(|component| {
                let mut vertices: Vec<V> = component
                    .into_iter()
                    .map(|i| self.snapshot.vertex(i).clone())
                    .collect();
                vertices.sort();
                vertices
            })
            .collect())
    }
}

struct Tarjan<'s, 'g, V> {
    snapshot: &'s Snapshot<'g, V>,
    counter: usize,
    ids: Vec<Option<usize>>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    components: Vec<Vec<usize>>,
}

impl<'s, 'g, V: Vertex> Tarjan<'s, 'g, V> {
    fn new(snapshot: &'s Snapshot<'g, V>) -> Self {
        let n = snapshot.len();
        Self {
            snapshot,
            counter: 0,
            ids: vec![None; n],
            low: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            components: Vec::new(),
        }
    }

    fn discover(&mut self, v: usize) {
        self.ids[v] = Some(self.counter);
        self.low[v] = self.counter;
        self.counter += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
    }

    fn visit(&mut self, root: usize) {
        let snapshot = self.snapshot;
        self.discover(root);
        // (vertex, next neighbor position)
        let mut frames: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(frame) = frames.last_mut() {
            let u = frame.0;
            if let Some(&(w, _)) = snapshot.out(u).get(frame.1) {
                frame.1 += 1;
                match self.ids[w] {
                    None => {
                        self.discover(w);
                        frames.push((w, 0));
                    }
                    Some(id) if self.on_stack[w] => {
                        self.low[u] = self.low[u].min(id);
                    }
                    Some(_) => {}
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                self.low[parent] = self.low[parent].min(self.low[u]);
            }
            if self.ids[u] == Some(self.low[u]) {
                let mut component = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w] = false;
                    component.push(w);
                    if w == u {
                        break;
                    }
                }
                self.components.push(component);
            }
        }
    }
}
