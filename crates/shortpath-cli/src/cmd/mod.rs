/// Command module for the `shortpath` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the already-read input and parsed arguments and returns
/// `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod inspect;
pub mod path;

use shortpath_core::{Graph, LoadError, LoadOptions, load_graph};

use crate::error::CliError;

/// Parses `content` as an edge list, labelling errors with `source`.
///
/// # Errors
///
/// - [`CliError::IoError`] if the loader's reader fails.
/// - [`CliError::InvalidEdgeList`] for any format error.
pub fn load(content: &str, source: &str, delimiter: u8) -> Result<Graph, CliError> {
    let options = LoadOptions { delimiter };
    load_graph(content.as_bytes(), &options).map_err(|e| load_error_to_cli(&e, source))
}

fn load_error_to_cli(e: &LoadError, source: &str) -> CliError {
    if e.is_format_error() {
        CliError::InvalidEdgeList {
            source: source.to_owned(),
            detail: e.to_string(),
        }
    } else {
        CliError::IoError {
            source: source.to_owned(),
            detail: e.to_string(),
        }
    }
}
