//! Interactive fallback for `path` arguments left off the command line.
//!
//! Each missing value is asked for with a one-line prompt written to
//! `output` (stderr in the binary, so stdout carries only the result) and
//! answered with one line from `input`. Answers are trimmed of surrounding
//! whitespace.
use std::io::{BufRead, Write};

use crate::PathOrStdin;
use crate::error::CliError;

pub const FILE_PROMPT: &str = "Enter the CSV filename (e.g., test123.csv): ";
pub const START_PROMPT: &str = "Enter the start node: ";
pub const END_PROMPT: &str = "Enter the end node: ";

/// The three inputs of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub file: PathOrStdin,
    pub from: String,
    pub to: String,
}

/// Fills in any of `file`, `from`, `to` that are `None` by prompting.
///
/// Nothing is read from `input` when all three are given.
///
/// # Errors
///
/// - [`CliError::InvalidArguments`] if prompting is needed while the edge
///   list itself comes from stdin, or the filename answer is empty or `-`.
/// - [`CliError::PromptFailed`] if `input` ends or fails before an answer.
pub fn resolve_query<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    file: Option<PathOrStdin>,
    from: Option<String>,
    to: Option<String>,
) -> Result<Query, CliError> {
    let needs_prompt = file.is_none() || from.is_none() || to.is_none();
    if needs_prompt && file == Some(PathOrStdin::Stdin) {
        return Err(CliError::InvalidArguments {
            detail: "FROM and TO must be given on the command line when FILE is `-`".to_owned(),
        });
    }

    let file = match file {
        Some(file) => file,
        None => {
            let answer = ask(input, output, FILE_PROMPT)?;
            if answer.is_empty() || answer == "-" {
                return Err(CliError::InvalidArguments {
                    detail: format!("{answer:?} is not a usable edge-list filename"),
                });
            }
            PathOrStdin::Path(answer.into())
        }
    };
    let from = match from {
        Some(from) => from,
        None => ask(input, output, START_PROMPT)?,
    };
    let to = match to {
        Some(to) => to,
        None => ask(input, output, END_PROMPT)?,
    };

    Ok(Query { file, from, to })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String, CliError> {
    let failed = |e: std::io::Error| CliError::PromptFailed {
        detail: e.to_string(),
    };

    output.write_all(prompt.as_bytes()).map_err(failed)?;
    output.flush().map_err(failed)?;

    let mut line = String::new();
    if input.read_line(&mut line).map_err(failed)? == 0 {
        return Err(CliError::PromptFailed {
            detail: "unexpected end of input".to_owned(),
        });
    }
    Ok(line.trim().to_owned())
}
