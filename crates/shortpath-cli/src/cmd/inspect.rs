//! Implementation of `shortpath inspect <file>`.
//!
//! Loads the edge list and prints summary statistics to stdout:
//! - distinct node ids (sources and targets)
//! - nodes with outgoing edges
//! - edges, counting parallel edges separately
//!
//! Exit codes: 0 = success, 2 = read/parse failure.
use shortpath_core::Graph;

use crate::OutputFormat;
use crate::error::CliError;

/// Statistics gathered from a loaded [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectStats {
    pub node_count: usize,
    pub source_count: usize,
    pub edge_count: usize,
}

impl InspectStats {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            node_count: graph.node_count(),
            source_count: graph.source_count(),
            edge_count: graph.edge_count(),
        }
    }
}

/// Loads `content` and prints its [`InspectStats`].
///
/// # Errors
///
/// Exit code 2 when `content` is not an edge list.
pub fn run(
    content: &str,
    source: &str,
    delimiter: u8,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let graph = super::load(content, source, delimiter)?;
    let stats = InspectStats::from_graph(&graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

fn print_human<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    writeln!(w, "nodes:    {}", stats.node_count)?;
    writeln!(w, "sources:  {}", stats.source_count)?;
    writeln!(w, "edges:    {}", stats.edge_count)
}

fn print_json<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let value = serde_json::json!({
        "node_count": stats.node_count,
        "source_count": stats.source_count,
        "edge_count": stats.edge_count,
    });
    let json = serde_json::to_string_pretty(&value).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use shortpath_core::{Edge, Graph};

    use super::*;

    fn stats() -> InspectStats {
        InspectStats::from_graph(&Graph::from_edges([
            Edge::new("A", "B", 1),
            Edge::new("A", "B", 3),
            Edge::new("B", "C", 2),
        ]))
    }

    #[test]
    fn counts_nodes_sources_and_parallel_edges() {
        assert_eq!(
            stats(),
            InspectStats {
                node_count: 3,
                source_count: 2,
                edge_count: 3,
            }
        );
    }

    #[test]
    fn human_output_lines() {
        let mut buf = Vec::new();
        print_human(&mut buf, &stats()).expect("write");
        let text = String::from_utf8(buf).expect("UTF-8");
        assert_eq!(text, "nodes:    3\nsources:  2\nedges:    3\n");
    }

    #[test]
    fn json_output_fields() {
        let mut buf = Vec::new();
        print_json(&mut buf, &stats()).expect("write");
        let v: serde_json::Value = serde_json::from_slice(&buf).expect("valid JSON");
        assert_eq!(v["node_count"], 3);
        assert_eq!(v["source_count"], 2);
        assert_eq!(v["edge_count"], 3);
    }
}
