//! Shared test helper functions for constructing graphs.
//!
//! Compiled only in test builds. Integration tests in
//! `crates/shortpath-core/tests/` define their own local helpers because they
//! link against the non-test library build where this module is not available.

use crate::graph::{Edge, Graph};

/// Creates an [`Edge`] from string slices.
pub fn edge(source: &str, target: &str, weight: i64) -> Edge {
    Edge::new(source, target, weight)
}

/// `A→B(1), A→C(4), B→C(2), B→D(5), C→D(1)`.
///
/// The shortest A→D route is `A -> B -> C -> D` with distance 4.
pub fn scenario_graph() -> Graph {
    Graph::from_edges([
        edge("A", "B", 1),
        edge("A", "C", 4),
        edge("B", "C", 2),
        edge("B", "D", 5),
        edge("C", "D", 1),
    ])
}
