//! Command-line surface of `shortpath`, declared with clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Where an edge list comes from. The argument `-` means stdin; any other
/// value is a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Standard input.
    Stdin,
    /// A file on disk.
    Path(PathBuf),
}

impl PathOrStdin {
    /// Label used in messages: `"-"` for stdin, otherwise the path.
    pub fn label(&self) -> String {
        match self {
            PathOrStdin::Stdin => "-".to_owned(),
            PathOrStdin::Path(path) => path.display().to_string(),
        }
    }
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// How results are written to stdout.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text lines.
    Human,
    /// One pretty-printed JSON object.
    Json,
}

/// Parses a `--delimiter` value into a single field-separator byte.
///
/// Accepts one ASCII character, or `tab` / `\t` for a tab.
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    if s == "tab" || s == "\\t" {
        return Ok(b'\t');
    }
    let mut chars = s.chars();
    let Some(c) = chars.next() else {
        return Err("delimiter must not be empty".to_owned());
    };
    if chars.next().is_some() {
        return Err(format!(
            "delimiter must be a single character or \"tab\", got {s:?}"
        ));
    }
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| format!("delimiter must be an ASCII character, got {c:?}"))
}

/// All top-level subcommands exposed by the `shortpath` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Find the shortest weighted path between two nodes of an edge list.
    ///
    /// Any of FILE, FROM, or TO left off the command line is asked for on
    /// stdin.
    Path {
        /// Path to a CSV edge list with source,target,weight columns, or `-`
        /// for stdin.
        #[arg(value_name = "FILE")]
        file: Option<PathOrStdin>,
        /// Start node ID.
        #[arg(value_name = "FROM")]
        from: Option<String>,
        /// End node ID.
        #[arg(value_name = "TO")]
        to: Option<String>,
        /// Field delimiter: a single ASCII character, or `tab`.
        #[arg(long, short = 'd', default_value = ",", value_parser = parse_delimiter)]
        delimiter: u8,
    },

    /// Print node and edge counts for an edge list.
    Inspect {
        /// Path to a CSV edge list, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Field delimiter: a single ASCII character, or `tab`.
        #[arg(long, short = 'd', default_value = ",", value_parser = parse_delimiter)]
        delimiter: u8,
    },
}

/// Parsed command line. Flags on this struct are accepted before or after
/// the subcommand name.
#[derive(Parser)]
#[command(
    name = "shortpath",
    version,
    about = "Shortest weighted paths over CSV edge lists",
    long_about = "Loads a directed, weighted graph from a CSV edge list and runs\n\
                  single-source shortest-path queries with Dijkstra's algorithm."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Result format on stdout.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Log nothing below error level.
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log load counts and search statistics to stderr.
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Largest edge list accepted, in bytes (256 MiB unless set here or in
    /// `SHORTPATH_MAX_FILE_SIZE`).
    #[arg(
        long,
        global = true,
        env = "SHORTPATH_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}

#[cfg(test)]
mod tests;
