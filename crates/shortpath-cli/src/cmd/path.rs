//! Implementation of `shortpath path <file> <from> <to>`.
//!
//! Loads the edge list, runs one shortest-path search from `from` to `to`,
//! and writes the result to stdout.
//!
//! Output (human mode):
//! - reachable: `Shortest distance from A to D: 4` then `Path: A -> B -> C -> D`
//! - unreachable: `No path found from D to A.`
//!
//! Output (JSON mode): `{"from", "to", "reachable", "distance", "path"}`,
//! with `distance` null when unreachable.
//!
//! Exit codes: 0 = result printed (reachable or not), 1 = search failed,
//! 2 = read/parse failure.
use shortpath_core::{ShortestPath, shortest_path};

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `path` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if the edge list cannot be parsed.
/// - [`CliError::QueryFailed`] (exit code 1) if the search reaches a
///   negative-weight edge or overflows.
pub fn run(
    content: &str,
    source: &str,
    from: &str,
    to: &str,
    delimiter: u8,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let graph = super::load(content, source, delimiter)?;

    let result = shortest_path(&graph, from, to).map_err(|e| CliError::QueryFailed {
        detail: e.to_string(),
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, from, to, &result),
        OutputFormat::Json => print_json(&mut out, from, to, &result),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes the distance and ` -> `-joined path, or a no-path line.
fn print_human<W: std::io::Write>(
    w: &mut W,
    from: &str,
    to: &str,
    result: &ShortestPath,
) -> std::io::Result<()> {
    if result.is_reachable() {
        writeln!(w, "Shortest distance from {from} to {to}: {}", result.distance)?;
        writeln!(w, "Path: {}", result.path.join(" -> "))
    } else {
        writeln!(w, "No path found from {from} to {to}.")
    }
}

fn print_json<W: std::io::Write>(
    w: &mut W,
    from: &str,
    to: &str,
    result: &ShortestPath,
) -> std::io::Result<()> {
    let value = serde_json::json!({
        "from": from,
        "to": to,
        "reachable": result.is_reachable(),
        "distance": result.distance,
        "path": result.path,
    });
    let json = serde_json::to_string_pretty(&value).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
