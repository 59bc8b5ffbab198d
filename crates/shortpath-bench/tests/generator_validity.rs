//! Tests that generated edge lists load cleanly and keep the backbone reachable.
#![allow(clippy::expect_used)]

use shortpath_bench::{SizeTier, generate_edge_list, node_id, to_csv};
use shortpath_core::{Graph, LoadOptions, load_graph};

#[test]
fn generation_is_deterministic() {
    let a = generate_edge_list(&SizeTier::Small.config(7));
    let b = generate_edge_list(&SizeTier::Small.config(7));
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let a = generate_edge_list(&SizeTier::Small.config(1));
    let b = generate_edge_list(&SizeTier::Small.config(2));
    assert_ne!(a, b);
}

#[test]
fn weights_are_in_range() {
    let config = SizeTier::Medium.config(42);
    for edge in generate_edge_list(&config) {
        assert!(
            (0..=config.max_weight).contains(&edge.weight),
            "weight {} out of range",
            edge.weight
        );
    }
}

#[test]
fn generated_csv_loads_into_same_graph() {
    for seed in [42, 123, 999] {
        let edges = generate_edge_list(&SizeTier::Small.config(seed));
        let csv = to_csv(&edges);
        let loaded = load_graph(csv.as_bytes(), &LoadOptions::default()).expect("loads");
        assert_eq!(loaded, Graph::from_edges(edges), "seed={seed}");
    }
}

#[test]
fn last_node_reachable_from_first() {
    for (tier, seed) in [(SizeTier::Small, 42), (SizeTier::Medium, 42)] {
        let config = tier.config(seed);
        let graph = Graph::from_edges(generate_edge_list(&config));
        let result = shortpath_core::shortest_path(
            &graph,
            &node_id(0),
            &node_id(config.num_nodes - 1),
        )
        .expect("non-negative weights");
        assert!(result.is_reachable(), "{tier:?}/seed={seed}");
        assert_eq!(result.path.first(), Some(&node_id(0)));
        assert_eq!(result.path.last(), Some(&node_id(config.num_nodes - 1)));
    }
}

#[test]
fn node_count_matches_config() {
    let config = SizeTier::Medium.config(42);
    let graph = Graph::from_edges(generate_edge_list(&config));
    assert_eq!(graph.node_count(), config.num_nodes);
}
