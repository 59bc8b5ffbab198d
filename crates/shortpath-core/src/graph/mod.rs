/// Adjacency-list graph built from an edge list, plus the shortest-path engine.
///
/// # Shape
///
/// [`Graph`] maps each *source* node id to the ordered sequence of
/// `(target, weight)` pairs leaving it. A node that only ever appears as the
/// target of an edge has no key of its own; [`Graph::neighbours`] answers the
/// empty slice for it, so callers never need to special-case leaf nodes.
///
/// Parallel edges between the same pair are kept as separate entries, and the
/// input order of edges leaving a node is preserved.
///
/// # Queries
///
/// See the [`dijkstra`] submodule for [`shortest_path`].
pub mod dijkstra;

pub use dijkstra::{QueryError, ShortestPath, shortest_path};

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// One directed, weighted edge as read from an edge list.
///
/// Weights are kept signed so that a negative value in the input survives
/// loading; the engine rejects it when a search relaxes that edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Node the edge leaves.
    pub source: String,
    /// Node the edge enters.
    pub target: String,
    /// Cost of traversing the edge.
    pub weight: i64,
}

impl Edge {
    /// Convenience constructor.
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: i64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

/// One entry of a source node's adjacency sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Neighbour {
    /// Node reached by the edge.
    pub target: String,
    /// Cost of the edge.
    pub weight: i64,
}

/// An immutable directed multigraph keyed by source node id.
///
/// Construct with [`Graph::from_edges`] or [`crate::load_graph`]. Two graphs
/// built from the same edge sequence compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Neighbour>>,
    edge_count: usize,
}

impl Graph {
    /// Builds a graph by appending each edge to its source's adjacency
    /// sequence, creating the sequence on first sight of the source.
    ///
    /// Construction is O(E).
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut adjacency: HashMap<String, Vec<Neighbour>> = HashMap::new();
        let mut edge_count = 0;

        for edge in edges {
            adjacency.entry(edge.source).or_default().push(Neighbour {
                target: edge.target,
                weight: edge.weight,
            });
            edge_count += 1;
        }

        Self {
            adjacency,
            edge_count,
        }
    }

    /// Returns the edges leaving `id` in input order.
    ///
    /// Returns an empty slice if `id` is not the source of any edge.
    pub fn neighbours(&self, id: &str) -> &[Neighbour] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if `id` is the source of at least one edge.
    pub fn contains_source(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Iterates the ids that have an adjacency entry, in unspecified order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Number of distinct source nodes.
    pub fn source_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of distinct node ids mentioned by any edge, as source or target.
    pub fn node_count(&self) -> usize {
        let mut ids: HashSet<&str> = self.sources().collect();
        for neighbours in self.adjacency.values() {
            ids.extend(neighbours.iter().map(|n| n.target.as_str()));
        }
        ids.len()
    }

    /// Returns `true` if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}

impl FromIterator<Edge> for Graph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Graph::from_edges(iter)
    }
}
