#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod distance;
pub mod graph;
pub mod load;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use distance::Distance;
pub use graph::{Edge, Graph, Neighbour, QueryError, ShortestPath, shortest_path};
pub use load::{LoadError, LoadOptions, load_graph};

/// Returns the current version of the shortpath-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
