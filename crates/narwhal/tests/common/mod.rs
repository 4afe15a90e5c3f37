#![allow(dead_code)]

use narwhal::{Graph, GraphOptions};

/// Thirteen vertices `A`..`M`; `M` is isolated.
pub fn lettered(directed: bool) -> Graph<&'static str> {
    let mut g = Graph::new(GraphOptions { directed });
    for (u, v, w) in [
        ("A", "B", 1.0),
        ("A", "E", 2.0),
        ("B", "F", 3.0),
        ("B", "G", 3.0),
        ("B", "C", 1.0),
        ("C", "D", 1.0),
        ("C", "G", 1.0),
        ("D", "C", 2.0),
        ("E", "I", 1.0),
        ("F", "A", 2.0),
        ("F", "J", 1.0),
        ("F", "G", 1.0),
        ("G", "K", 4.0),
        ("H", "G", 1.0),
        ("I", "J", 1.0),
        ("J", "E", 2.0),
        ("J", "K", 5.0),
        ("K", "L", 1.0),
        ("K", "H", 1.0),
        ("L", "H", 1.0),
    ] {
        g.add_weighted_edge(u, v, w);
    }
    g.add_vertex("M");
    g
}

/// Eight weighted vertices used for spanning trees. The directed variant flips `D-F` and `F-H`.
pub fn spanning(directed: bool) -> Graph<&'static str> {
    let mut g = Graph::new(GraphOptions { directed });
    let (df, fh) = if directed {
        (("F", "D"), ("H", "F"))
    } else {
        (("D", "F"), ("F", "H"))
    };
    for (u, v, w) in [
        ("A", "B", 1.0),
        ("A", "E", 3.0),
        ("A", "G", 2.0),
        ("G", "E", 8.0),
        ("B", "C", 4.0),
        ("C", "D", 1.0),
        ("E", "D", 2.0),
        ("E", "F", 9.0),
        (df.0, df.1, 7.0),
        ("D", "H", 2.0),
        (fh.0, fh.1, 1.0),
    ] {
        g.add_weighted_edge(u, v, w);
    }
    g
}

pub fn unweighted(directed: bool, edges: &[(&'static str, &'static str)]) -> Graph<&'static str> {
    let mut g = Graph::new(GraphOptions { directed });
    for &(u, v) in edges {
        g.add_edge(u, v);
    }
    g
}

pub fn weighted(directed: bool, edges: &[(u32, u32, f64)]) -> Graph<u32> {
    let mut g = Graph::new(GraphOptions { directed });
    for &(u, v, w) in edges {
        g.add_weighted_edge(u, v, w);
    }
    g
}
