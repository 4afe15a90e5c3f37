mod common;

use narwhal::alg::MinimumSpanningTree;
use narwhal::{Edge, MstAlgorithm};

fn pairs(tree: &narwhal::Path<Edge<&'static str>>) -> Vec<(&'static str, &'static str)> {
    tree.iter()
        .map(|e| (*e.source(), *e.destination()))
        .collect()
}

#[test]
fn prim_on_the_undirected_sample() {
    let g = common::spanning(false);
    let tree = g.minimum_spanning_tree(MstAlgorithm::default()).unwrap();
    assert_eq!(tree.weight(), 12.0);
    assert_eq!(
        pairs(&tree),
        vec![
            ("A", "B"),
            ("A", "G"),
            ("A", "E"),
            ("E", "D"),
            ("D", "C"),
            ("D", "H"),
            ("H", "F"),
        ]
    );
}

#[test]
fn prim_on_the_directed_sample_follows_outgoing_edges() {
    let g = common::spanning(true);
    let tree = g.minimum_spanning_tree(MstAlgorithm::Prim).unwrap();
    assert_eq!(tree.weight(), 15.0);
    assert_eq!(
        pairs(&tree),
        vec![
            ("A", "B"),
            ("A", "G"),
            ("A", "E"),
            ("E", "D"),
            ("D", "H"),
            ("H", "F"),
            ("B", "C"),
        ]
    );
}

#[test]
fn kruskal_matches_prim_on_connected_undirected_graphs() {
    let g = common::spanning(false);
    let mst = MinimumSpanningTree::new(&g);
    let kruskal = mst.kruskal().unwrap();
    let prim = mst.prim().unwrap();
    assert_eq!(kruskal.weight(), prim.weight());
    assert_eq!(kruskal.len(), g.vertex_count() - 1);

    let g = common::lettered(false);
    let mst = MinimumSpanningTree::new(&g);
    assert_eq!(mst.kruskal().unwrap().weight(), mst.prim().unwrap().weight());
}

#[test]
fn kruskal_picks_edges_in_ascending_weight() {
    let g = common::spanning(false);
    let tree = g.minimum_spanning_tree(MstAlgorithm::Kruskal).unwrap();
    let weights: Vec<f64> = tree.iter().map(Edge::weight).collect();
    let mut sorted = weights.clone();
    sorted.sort_by(f64::total_cmp);
    assert_eq!(weights, sorted);
    assert_eq!(tree.weight(), 12.0);
}

#[test]
fn disconnected_graphs_yield_a_spanning_forest() {
    let mut g = common::spanning(false);
    g.add_weighted_edge("X", "Y", 5.0);
    g.add_vertex("Z");

    for algorithm in [MstAlgorithm::Kruskal, MstAlgorithm::Prim] {
        let forest = g.minimum_spanning_tree(algorithm).unwrap();
        assert_eq!(forest.weight(), 17.0);
        assert_eq!(forest.len(), g.vertex_count() - g.component_count());
    }
}

#[test]
fn empty_graph_has_an_empty_tree() {
    let g = common::unweighted(false, &[]);
    let tree = g.minimum_spanning_tree(MstAlgorithm::Prim).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.weight(), 0.0);
}
