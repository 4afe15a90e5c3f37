//! Generators for common graph families over `0..n`.
//!
//! Every generator adds all `n` vertices, including ones left isolated. Invalid parameters fail
//! with [`Error::InvalidArgument`].

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphOptions};
use rand::Rng;

fn empty(n: usize, directed: bool) -> Graph<usize> {
    let mut graph = Graph::new(GraphOptions { directed });
    for v in 0..n {
        graph.add_vertex(v);
    }
    graph
}

/// Circulant graph where every vertex has degree `k` (in- and out-degree `k` when directed).
/// Odd `k` on an undirected graph joins opposite vertices and so needs an even `n`.
pub fn regular(n: usize, k: usize, directed: bool) -> Result<Graph<usize>> {
    if n == 0 || k == 0 || k >= n {
        return Err(Error::invalid_argument(format!(
            "regular graph needs 0 < k < n (n = {n}, k = {k})"
        )));
    }
    let mut graph = empty(n, directed);
    if directed {
        for i in 0..n {
            for j in 1..=k {
                graph.add_edge(i, (i + j) % n);
            }
        }
        return Ok(graph);
    }

    if k % 2 == 1 && n % 2 == 1 {
        return Err(Error::invalid_argument(format!(
            "undirected regular graph of odd degree {k} needs an even vertex count (n = {n})"
        )));
    }
    for i in 0..n {
        for j in 1..=k / 2 {
            graph.add_edge(i, (i + j) % n);
        }
        if k % 2 == 1 {
            graph.add_edge(i, (i + n / 2) % n);
        }
    }
    Ok(graph)
}

pub fn complete(n: usize, directed: bool) -> Result<Graph<usize>> {
    if n == 0 {
        return Err(Error::invalid_argument("complete graph needs at least one vertex"));
    }
    let mut graph = empty(n, directed);
    for i in 0..n {
        for j in 0..n {
            if i != j {
                graph.add_edge(i, j);
            }
        }
    }
    Ok(graph)
}

/// Parts `0..n1` and `n1..n1 + n2`; each cross pair is joined with probability `p`, from the
/// first part to the second when directed.
pub fn bipartite<R: Rng + ?Sized>(
    n1: usize,
    n2: usize,
    p: f64,
    directed: bool,
    rng: &mut R,
) -> Result<Graph<usize>> {
    if n1 == 0 || n2 == 0 {
        return Err(Error::invalid_argument(
            "bipartite graph needs two non-empty parts",
        ));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_argument(format!(
            "edge probability must be within [0, 1] (got {p})"
        )));
    }
    let mut graph = empty(n1 + n2, directed);
    for i in 0..n1 {
        for j in n1..n1 + n2 {
            if rng.gen_bool(p) {
                graph.add_edge(i, j);
            }
        }
    }
    Ok(graph)
}

pub fn complete_bipartite(n1: usize, n2: usize, directed: bool) -> Result<Graph<usize>> {
    if n1 == 0 || n2 == 0 {
        return Err(Error::invalid_argument(
            "complete bipartite graph needs two non-empty parts",
        ));
    }
    let mut graph = empty(n1 + n2, directed);
    for i in 0..n1 {
        for j in n1..n1 + n2 {
            graph.add_edge(i, j);
        }
    }
    Ok(graph)
}

/// A Hamiltonian cycle plus chords between consecutive even vertices.
pub fn eulerian(n: usize, directed: bool) -> Result<Graph<usize>> {
    if n < 4 || n % 2 == 1 {
        return Err(Error::invalid_argument(format!(
            "eulerian graph needs an even vertex count of at least 4 (n = {n})"
        )));
    }
    let mut graph = cycle_of(n, directed);
    for i in (0..n).step_by(2) {
        graph.add_edge(i, (i + 2) % n);
    }
    Ok(graph)
}

/// Random recursive tree: vertex `i` hangs off a uniformly chosen earlier vertex.
pub fn tree<R: Rng + ?Sized>(n: usize, directed: bool, rng: &mut R) -> Result<Graph<usize>> {
    if n == 0 {
        return Err(Error::invalid_argument("tree needs at least one vertex"));
    }
    let mut graph = empty(n, directed);
    for i in 1..n {
        graph.add_edge(rng.gen_range(0..i), i);
    }
    Ok(graph)
}

/// `trees` random trees rooted at `0..trees`; every later vertex hangs off an earlier one.
pub fn forest<R: Rng + ?Sized>(
    n: usize,
    trees: usize,
    directed: bool,
    rng: &mut R,
) -> Result<Graph<usize>> {
    if n == 0 || trees == 0 || trees > n {
        return Err(Error::invalid_argument(format!(
            "forest needs 0 < trees <= n (n = {n}, trees = {trees})"
        )));
    }
    let mut graph = empty(n, directed);
    for i in trees..n {
        graph.add_edge(rng.gen_range(0..i), i);
    }
    Ok(graph)
}

/// A single cycle through `0..n`.
pub fn cyclic(n: usize, directed: bool) -> Result<Graph<usize>> {
    if n < 3 {
        return Err(Error::invalid_argument(format!(
            "cycle needs at least 3 vertices (n = {n})"
        )));
    }
    Ok(cycle_of(n, directed))
}

fn cycle_of(n: usize, directed: bool) -> Graph<usize> {
    let mut graph = empty(n, directed);
    for i in 0..n {
        graph.add_edge(i, (i + 1) % n);
    }
    graph
}
