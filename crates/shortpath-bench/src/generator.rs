//! Weighted edge-list generator.
//!
//! Produces a graph with a backbone chain `n0 -> n1 -> ... -> n{N-1}` so the
//! last node is always reachable from the first, plus random shortcut and
//! back edges. All weights are non-negative.

use std::fmt::Write as _;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shortpath_core::Edge;

/// Configuration for the edge-list generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of distinct nodes.
    pub num_nodes: usize,
    /// Random edges added on top of the backbone chain.
    pub extra_edges: usize,
    /// Largest weight drawn, inclusive.
    pub max_weight: i64,
    /// Fraction of extra edges that point backwards (0.0-1.0), creating cycles.
    pub back_edge_ratio: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 nodes, ~400 edges
    Small,
    /// 2 000 nodes, ~10 000 edges
    Medium,
    /// 20 000 nodes, ~120 000 edges
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (num_nodes, extra_edges) = match self {
            SizeTier::Small => (100, 300),
            SizeTier::Medium => (2_000, 8_000),
            SizeTier::Large => (20_000, 100_000),
        };
        GeneratorConfig {
            seed,
            num_nodes,
            extra_edges,
            max_weight: 100,
            back_edge_ratio: 0.2,
        }
    }
}

/// Node id for index `i`, zero-padded so lexical order matches numeric order.
pub fn node_id(i: usize) -> String {
    format!("n{i:06}")
}

/// Generates an edge list from `config`.
///
/// The same config always yields the same edges in the same order.
pub fn generate_edge_list(config: &GeneratorConfig) -> Vec<Edge> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.num_nodes;
    let max_weight = config.max_weight.max(0);
    let mut edges = Vec::with_capacity(n.saturating_sub(1) + config.extra_edges);

    for i in 1..n {
        let weight = rng.gen_range(0..=max_weight);
        edges.push(Edge::new(node_id(i - 1), node_id(i), weight));
    }

    if n < 2 {
        return edges;
    }

    for _ in 0..config.extra_edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        let (from, to) = if rng.gen_bool(config.back_edge_ratio.clamp(0.0, 1.0)) {
            (a.max(b), a.min(b))
        } else {
            (a.min(b), a.max(b))
        };
        let weight = rng.gen_range(0..=max_weight);
        edges.push(Edge::new(node_id(from), node_id(to), weight));
    }

    edges
}

/// Renders edges as a `source,target,weight` CSV document with a header row.
pub fn to_csv(edges: &[Edge]) -> String {
    let mut out = String::with_capacity(edges.len() * 24 + 21);
    out.push_str("source,target,weight\n");
    for edge in edges {
        // Writing to a String cannot fail.
        writeln!(out, "{},{},{}", edge.source, edge.target, edge.weight).ok();
    }
    out
}
