mod common;

use narwhal::alg::ShortestPath;
use narwhal::{Error, Graph};

#[test]
fn shortest_path_on_the_undirected_lettered_graph() {
    let g = common::lettered(false);
    let path = g.shortest_path(&"A", &"H").unwrap();
    assert_eq!(path.weight(), 4.0);
    assert_eq!(path.first(), Some(&"A"));
    assert_eq!(path.last(), Some(&"H"));
}

#[test]
fn shortest_path_on_the_directed_lettered_graph() {
    let g = common::lettered(true);
    let path = g.shortest_path(&"A", &"H").unwrap();
    assert_eq!(path.weight(), 8.0);
    assert_eq!(path.to_vec(), vec!["A", "B", "C", "G", "K", "H"]);
}

#[test]
fn hop_distance_counts_edges() {
    assert_eq!(common::lettered(false).distance(&"A", &"H").unwrap(), Some(3));
    assert_eq!(common::lettered(true).distance(&"A", &"H").unwrap(), Some(4));
    assert_eq!(common::lettered(true).distance(&"A", &"A").unwrap(), Some(0));
    assert_eq!(common::lettered(true).distance(&"A", &"M").unwrap(), None);
}

#[test]
fn shortest_paths_cover_every_vertex() {
    let g = common::lettered(true);
    let paths = g.shortest_paths(&"A").unwrap();
    assert_eq!(paths.len(), 13);

    let source = &paths["A"];
    assert!(source.is_empty());
    assert_eq!(source.weight(), 0.0);

    let unreachable = &paths["M"];
    assert!(unreachable.is_empty());
    assert_eq!(unreachable.weight(), f64::INFINITY);

    for (v, path) in &paths {
        if path.is_empty() {
            continue;
        }
        assert_eq!(path.first(), Some(&"A"));
        assert_eq!(path.last(), Some(v));
        let items = path.to_vec();
        let total: f64 = items
            .windows(2)
            .map(|pair| g.weight(&pair[0], &pair[1]).unwrap())
            .sum();
        assert_eq!(total, path.weight());
    }
}

#[test]
fn shortest_path_rejects_unknown_endpoints() {
    let g = common::lettered(true);
    assert!(matches!(
        g.shortest_path(&"A", &"Z"),
        Err(Error::VertexNotFound { .. })
    ));
    assert!(matches!(
        g.shortest_paths(&"Z"),
        Err(Error::VertexNotFound { .. })
    ));
    assert!(g.distance(&"Z", &"A").is_err());
}

#[test]
fn dijkstra_and_bellman_ford_agree_without_negative_weights() {
    for directed in [true, false] {
        let g = common::lettered(directed);
        let sp = ShortestPath::new(&g);
        assert!(!sp.has_negative_weight());
        for source in g.vertices() {
            let fast = sp.dijkstra(source).unwrap();
            let slow = sp.bellman_ford(source).unwrap();
            for (v, path) in &fast {
                assert_eq!(path.weight(), slow[v].weight(), "{source} -> {v}");
            }
        }
    }
}

#[test]
fn negative_weights_switch_to_bellman_ford() {
    let g = common::weighted(true, &[(0, 1, 4.0), (0, 2, 5.0), (2, 1, -3.0), (1, 3, 1.0)]);
    let sp = ShortestPath::new(&g);
    assert!(sp.has_negative_weight());
    assert!(matches!(sp.dijkstra(&0), Err(Error::InvalidOperation { .. })));

    let path = g.shortest_path(&0, &3).unwrap();
    assert_eq!(path.weight(), 3.0);
    assert_eq!(path.to_vec(), vec![0, 2, 1, 3]);
}

#[test]
fn negative_cycles_mark_reachable_vertices_unbounded() {
    let g = common::weighted(
        true,
        &[(0, 1, 1.0), (1, 2, -2.0), (2, 1, 1.0), (2, 3, 1.0), (4, 0, 1.0)],
    );
    let paths = g.shortest_paths(&0).unwrap();
    assert_eq!(paths[&0].weight(), 0.0);
    assert_eq!(paths[&1].weight(), f64::NEG_INFINITY);
    assert_eq!(paths[&2].weight(), f64::NEG_INFINITY);
    assert_eq!(paths[&3].weight(), f64::NEG_INFINITY);
    assert_eq!(paths[&4].weight(), f64::INFINITY);

    // Parent walks terminate even though the parent chain loops.
    assert!(paths[&3].len() <= g.vertex_count());
}

#[test]
fn all_distances_match_single_source_runs() {
    let g = common::lettered(true);
    let matrix = g.all_distances();
    for u in g.vertices() {
        let paths = g.shortest_paths(u).unwrap();
        for (v, path) in &paths {
            assert_eq!(matrix[u][v], path.weight(), "{u} -> {v}");
        }
    }
}

#[test]
fn all_distances_keep_the_lighter_parallel_entry() {
    let mut g: Graph<u8> = Graph::undirected();
    g.add_weighted_edge(1, 2, 5.0);
    g.add_weighted_edge(2, 3, 1.0);
    g.add_weighted_edge(1, 3, 1.0);
    let matrix = g.all_distances();
    assert_eq!(matrix[&1][&2], 2.0);
    assert_eq!(matrix[&2][&1], 2.0);
    assert_eq!(matrix[&1][&1], 0.0);
}

#[test]
fn unweighted_edges_weigh_nothing() {
    let g = common::unweighted(true, &[("a", "b"), ("b", "c")]);
    let path = g.shortest_path(&"a", &"c").unwrap();
    assert_eq!(path.weight(), 0.0);
    assert_eq!(path.len(), 3);
}
