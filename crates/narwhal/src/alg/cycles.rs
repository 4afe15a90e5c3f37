//! Simple cycle enumeration.
//!
//! Both strategies report each cycle once. Two cycles are the same when they have the same
//! vertex set and, if `isomorphic` is requested, one is a rotation or a reflection of the other.
//! Without `isomorphic`, the vertex set alone identifies a cycle.

use super::{HashMap, Snapshot};
use crate::graph::{Graph, Vertex};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CycleStrategy {
    /// Depth-first walk that closes a cycle on every edge back into the current path.
    #[default]
    Walk,
    /// Tries every arrangement of `k` vertices for `k` in `3..=|V|`. Exponential; meant for small
    /// graphs and for cross-checking `Walk`.
    Permutation,
}

#[derive(Debug)]
pub struct CycleDetection<'g, V> {
    snapshot: Snapshot<'g, V>,
}

impl<'g, V: Vertex> CycleDetection<'g, V> {
    pub fn new(graph: &'g Graph<V>) -> Self {
        Self {
            snapshot: Snapshot::new(graph),
        }
    }

    pub fn find(&self, strategy: CycleStrategy, isomorphic: bool) -> Vec<Vec<V>> {
        let cycles = match strategy {
            CycleStrategy::Walk => self.walk(isomorphic),
            CycleStrategy::Permutation => self.permutation(isomorphic),
        };
        tracing::debug!(strategy = ?strategy, isomorphic, cycles = cycles.len(), "cycle detection");
        cycles
            .into_iter()
            .map(|cycle| {
                cycle
                    .into_iter()
                    .map(|i| self.snapshot.vertex(i).clone())
                    .collect()
            })
            .collect()
    }

    fn walk(&self, isomorphic: bool) -> Vec<Vec<usize>> {
        let n = self.snapshot.len();
        let mut found = UniqueCycles::new(isomorphic);
        // Parent of every vertex on the current path; the root is its own parent.
        let mut on_path: Vec<Option<usize>> = vec![None; n];
        let mut counted = vec![false; n];

        for start in 0..n {
            if counted[start] {
                continue;
            }
            on_path[start] = Some(start);
            counted[start] = true;
            // (vertex, parent, next neighbor position)
            let mut frames: Vec<(usize, usize, usize)> = vec![(start, start, 0)];

            while let Some(frame) = frames.last_mut() {
                let (v, parent) = (frame.0, frame.1);
                let Some(&(u, _)) = self.snapshot.out(v).get(frame.2) else {
                    on_path[v] = None;
                    frames.pop();
                    continue;
                };
                frame.2 += 1;
                if u == parent {
                    continue;
                }
                if on_path[u].is_none() {
                    on_path[u] = Some(v);
                    counted[u] = true;
                    frames.push((u, v, 0));
                    continue;
                }

                let mut back = vec![v];
                let mut current = v;
                while current != u {
                    let Some(p) = on_path[current] else {
                        debug_assert!(false, "broken parent chain on the current path");
                        break;
                    };
                    current = p;
                    if current != u {
                        back.push(current);
                    }
                }
                if back.len() + 1 >= 3 {
                    let mut cycle = Vec::with_capacity(back.len() + 1);
                    cycle.push(u);
                    cycle.extend(back.into_iter().rev());
                    found.insert(cycle);
                }
            }
        }
        found.into_cycles()
    }

    fn permutation(&self, isomorphic: bool) -> Vec<Vec<usize>> {
        let n = self.snapshot.len();
        let mut found = UniqueCycles::new(isomorphic);

        for k in 3..=n {
            for first in 0..n {
                // Arrangements start at their smallest vertex; every other rotation is a
                // duplicate of one that does.
                let mut used = vec![false; n];
                used[first] = true;
                let mut arrangement = vec![first];
                let mut cursors = vec![first + 1];

                while let Some(cursor) = cursors.last_mut() {
                    let Some(&tail) = arrangement.last() else {
                        break;
                    };
                    let next = if arrangement.len() == k {
                        if self.snapshot.adjacent(tail, first) {
                            found.insert(arrangement.clone());
                        }
                        None
                    } else {
                        (*cursor..n).find(|&c| !used[c] && self.snapshot.adjacent(tail, c))
                    };

                    match next {
                        Some(c) => {
                            *cursor = c + 1;
                            used[c] = true;
                            arrangement.push(c);
                            cursors.push(first + 1);
                        }
                        None => {
                            cursors.pop();
                            if let Some(v) = arrangement.pop() {
                                used[v] = false;
                            }
                        }
                    }
                }
            }
        }
        found.into_cycles()
    }
}

/// Cycles in discovery order, bucketed by sorted vertex set for the duplicate check.
struct UniqueCycles {
    isomorphic: bool,
    cycles: Vec<Vec<usize>>,
    by_members: HashMap<Vec<usize>, Vec<usize>>,
}

impl UniqueCycles {
    fn new(isomorphic: bool) -> Self {
        Self {
            isomorphic,
            cycles: Vec::new(),
            by_members: HashMap::default(),
        }
    }

    fn insert(&mut self, cycle: Vec<usize>) -> bool {
        let mut members = cycle.clone();
        members.sort_unstable();
        let bucket = self.by_members.entry(members).or_default();
        let duplicate = !bucket.is_empty()
            && (!self.isomorphic
                || bucket
                    .iter()
                    .any(|&i| is_rotation_or_reflection(&self.cycles[i], &cycle)));
        if duplicate {
            return false;
        }
        bucket.push(self.cycles.len());
        self.cycles.push(cycle);
        true
    }

    fn into_cycles(self) -> Vec<Vec<usize>> {
        self.cycles
    }
}

fn is_rotation_or_reflection(a: &[usize], b: &[usize]) -> bool {
    let n = a.len();
    if n != b.len() {
        return false;
    }
    if n == 0 {
        return true;
    }
    (0..n).any(|offset| (0..n).all(|j| a[j] == b[(offset + j) % n]))
        || (0..n).any(|offset| (0..n).all(|j| a[j] == b[n - 1 - (offset + j) % n]))
}
