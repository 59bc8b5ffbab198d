/// Single-source shortest path with early termination at the target node.
///
/// [`shortest_path`] runs Dijkstra's algorithm from `start` over a [`Graph`]
/// and stops as soon as `end` leaves the frontier. Every call owns its own
/// distance table, predecessor table, and frontier, so one graph can serve
/// any number of concurrent queries.
///
/// # Frontier
///
/// The frontier is a binary min-heap of `(distance, node)` pairs. Equal
/// distances pop in the byte order of the node id, which keeps results stable
/// across runs for the same input.
///
/// A node may be pushed several times as its distance improves. Entries that
/// were superseded are skipped on pop through a settled set: once a node has
/// been expanded its distance is final, so expanding it again could not
/// improve anything.
///
/// # Early exit
///
/// Pops come off the heap in non-decreasing distance order and every weight is
/// non-negative, so the first pop of `end` carries its final distance. Any
/// route still waiting in the frontier is at least that long already.
///
/// # Negative weights
///
/// Weights below zero break the early-exit argument above. Rather than return
/// a wrong answer, relaxing such an edge fails with
/// [`QueryError::NegativeWeight`].
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use crate::distance::Distance;
use crate::graph::Graph;


/// Distance and route from a search.
///
/// An unreachable target is a successful result: `distance` is
/// [`Distance::Infinite`] and `path` holds only the target itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    /// Total weight of the path, or [`Distance::Infinite`] when unreachable.
    pub distance: Distance,
    /// Node ids from start to end inclusive.
    pub path: Vec<String>,
}

impl ShortestPath {
    /// Returns `true` if the target was reached.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// Number of edges along the path. Zero for a self-path or an
    /// unreachable target.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Errors that abort a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The search relaxed an edge with a negative weight.
    #[error("edge {from:?} -> {to:?} has negative weight {weight}")]
    NegativeWeight {
        /// Node the edge leaves.
        from: String,
        /// Node the edge enters.
        to: String,
        /// The offending weight.
        weight: i64,
    },
    /// A path length no longer fits in a `u64`.
    #[error("path length overflows relaxing edge {from:?} -> {to:?}")]
    DistanceOverflow {
        /// Node the edge leaves.
        from: String,
        /// Node the edge enters.
        to: String,
    },
}

/// Returns the shortest path from `start` to `end`.
///
/// Neither node needs to be the source of any edge: a start with no outgoing
/// edges simply reaches nothing, and an end that is never reached yields
/// [`Distance::Infinite`] with `path == [end]`. When `start == end` the result
/// is distance zero and `path == [start]`.
///
/// Runs in O((V + E) log V).
///
/// # Errors
///
/// - [`QueryError::NegativeWeight`] if the search relaxes an edge whose weight
///   is below zero.
/// - [`QueryError::DistanceOverflow`] if a candidate distance exceeds
///   `u64::MAX`.
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Result<ShortestPath, QueryError> {
    // Absent entries read as infinite distance / no predecessor.
    let mut distances: HashMap<&str, u64> = HashMap::new();
    let mut predecessor: HashMap<&str, &str> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<(u64, &str)>> = BinaryHeap::new();

    distances.insert(start, 0);
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((current_distance, current))) = frontier.pop() {
        if current == end {
            break;
        }
        if !settled.insert(current) {
            continue;
        }

        for neighbour in graph.neighbours(current) {
            let weight =
                u64::try_from(neighbour.weight).map_err(|_| QueryError::NegativeWeight {
                    from: current.to_owned(),
                    to: neighbour.target.clone(),
                    weight: neighbour.weight,
                })?;
            let candidate =
                current_distance
                    .checked_add(weight)
                    .ok_or_else(|| QueryError::DistanceOverflow {
                        from: current.to_owned(),
                        to: neighbour.target.clone(),
                    })?;

            let target = neighbour.target.as_str();
            let improves = distances
                .get(target)
                .is_none_or(|&best| candidate < best);
            if improves {
                distances.insert(target, candidate);
                predecessor.insert(target, current);
                frontier.push(Reverse((candidate, target)));
            }
        }
    }

    let distance = Distance::from(distances.get(end).copied());
    let path = reconstruct_path(&predecessor, end);

    tracing::debug!(
        start,
        end,
        settled = settled.len(),
        %distance,
        hops = path.len().saturating_sub(1),
        "shortest path search finished"
    );

    Ok(ShortestPath { distance, path })
}

/// Walks predecessor links back from `end` and returns the route in
/// start-to-end order.
///
/// The walk stops at the first node without a predecessor, which is `start`
/// when `end` was reached and `end` itself otherwise.
fn reconstruct_path(predecessor: &HashMap<&str, &str>, end: &str) -> Vec<String> {
    let mut path = vec![end.to_owned()];
    let mut current = end;
    while let Some(&prev) = predecessor.get(current) {
        path.push(prev.to_owned());
        current = prev;
    }
    path.reverse();
    path
}
