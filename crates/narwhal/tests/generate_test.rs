use narwhal::{Error, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn regular_graphs_have_uniform_degree() {
    for (n, k) in [(6, 2), (6, 3), (8, 4), (10, 5)] {
        let g = generate::regular(n, k, false).unwrap();
        assert_eq!(g.vertex_count(), n);
        assert!(g.degree_list().values().all(|&(_, out)| out == k), "n={n} k={k}");
    }

    let g = generate::regular(7, 3, true).unwrap();
    assert!(g.degree_list().values().all(|&d| d == (3, 3)));
}

#[test]
fn regular_rejects_impossible_parameters() {
    assert!(matches!(
        generate::regular(5, 3, false),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(generate::regular(4, 4, false).is_err());
    assert!(generate::regular(0, 1, true).is_err());
    assert!(generate::regular(4, 0, true).is_err());
}

#[test]
fn complete_graph_edge_counts() {
    assert_eq!(generate::complete(5, false).unwrap().edge_count(), 10);
    assert_eq!(generate::complete(5, true).unwrap().edge_count(), 20);
    assert_eq!(generate::complete(1, false).unwrap().edge_count(), 0);
    assert!(generate::complete(0, false).is_err());
}

#[test]
fn bipartite_respects_the_edge_probability_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    let none = generate::bipartite(3, 4, 0.0, false, &mut rng).unwrap();
    assert_eq!(none.vertex_count(), 7);
    assert_eq!(none.edge_count(), 0);

    let all = generate::bipartite(3, 4, 1.0, true, &mut rng).unwrap();
    assert_eq!(all.edge_count(), 12);
    for edge in all.edges() {
        assert!(*edge.source() < 3 && *edge.destination() >= 3);
    }

    let some = generate::bipartite(10, 10, 0.5, false, &mut rng).unwrap();
    assert!(some.describe().is_bipartite());

    assert!(generate::bipartite(3, 4, 1.5, false, &mut rng).is_err());
    assert!(generate::bipartite(0, 4, 0.5, false, &mut rng).is_err());
}

#[test]
fn complete_bipartite_joins_every_cross_pair() {
    let g = generate::complete_bipartite(2, 3, false).unwrap();
    assert_eq!(g.edge_count(), 6);
    assert!(generate::complete_bipartite(2, 0, false).is_err());
}

#[test]
fn eulerian_requires_an_even_count_of_at_least_four() {
    assert!(generate::eulerian(4, false).is_ok());
    assert!(generate::eulerian(5, false).is_err());
    assert!(generate::eulerian(2, true).is_err());
}

#[test]
fn random_trees_and_forests_are_reproducible_from_a_seed() {
    let a = generate::tree(50, false, &mut StdRng::seed_from_u64(1)).unwrap();
    let b = generate::tree(50, false, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(a.edge_list(), b.edge_list());
    assert_eq!(a.edge_count(), 49);

    let forest = generate::forest(30, 3, true, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(forest.vertex_count(), 30);
    assert_eq!(forest.edge_count(), 27);
    assert_eq!(forest.component_count(), 3);

    assert!(generate::forest(3, 4, false, &mut StdRng::seed_from_u64(9)).is_err());
    assert!(generate::tree(0, false, &mut StdRng::seed_from_u64(9)).is_err());
}

#[test]
fn cyclic_builds_a_single_ring() {
    let g = generate::cyclic(5, true).unwrap();
    assert_eq!(g.edge_count(), 5);
    assert!(g.contains_edge(&4, &0));
    assert!(generate::cyclic(2, false).is_err());
}
