mod common;

use narwhal::{Error, generate};

#[test]
fn tarjan_on_the_lettered_digraph() {
    let g = common::lettered(true);
    let components = g.strongly_connected_components().unwrap();
    assert_eq!(
        components,
        vec![
            vec!["G", "H", "K", "L"],
            vec!["C", "D"],
            vec!["E", "I", "J"],
            vec!["A", "B", "F"],
            vec!["M"],
        ]
    );
}

#[test]
fn components_partition_the_vertex_set() {
    let g = common::unweighted(
        true,
        &[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d"), ("d", "e"), ("e", "d")],
    );
    let components = g.strongly_connected_components().unwrap();
    let mut all: Vec<&str> = components.iter().flatten().copied().collect();
    all.sort();
    assert_eq!(all, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(components.len(), 2);
}

#[test]
fn a_dag_has_only_singleton_components() {
    let g = generate::tree(30, true, &mut rand::thread_rng()).unwrap();
    let components = g.strongly_connected_components().unwrap();
    assert_eq!(components.len(), 30);
    assert!(components.iter().all(|c| c.len() == 1));
}

#[test]
fn a_directed_cycle_is_one_component() {
    let g = generate::cyclic(500, true).unwrap();
    let components = g.strongly_connected_components().unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].len(), 500);
}

#[test]
fn undirected_graphs_are_rejected() {
    let g = common::lettered(false);
    assert!(matches!(
        g.strongly_connected_components(),
        Err(Error::InvalidOperation { .. })
    ));
}
