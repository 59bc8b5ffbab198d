//! Failures of the `shortpath` binary and the exit code each one maps to.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | a result was printed, reachable or not |
//! | 1 | the edge list loaded but the search was aborted |
//! | 2 | nothing was searched: unusable arguments, unreadable or malformed input |
use std::fmt;
use std::path::PathBuf;

/// Every way a `shortpath` run can fail.
///
/// `source` fields hold the input label: the path as given, or `-` for
/// stdin.
#[derive(Debug)]
pub enum CliError {
    /// `FILE` does not exist.
    FileNotFound { path: PathBuf },

    /// `FILE` exists but may not be read.
    PermissionDenied { path: PathBuf },

    /// The input is longer than `--max-file-size`. `actual` is known only for
    /// files, whose length is read from metadata.
    FileTooLarge {
        source: String,
        limit: u64,
        actual: Option<u64>,
    },

    /// The input is not UTF-8; `byte_offset` is where decoding stopped.
    InvalidUtf8 { source: String, byte_offset: usize },

    /// Reading stdin failed part way.
    StdinReadError { detail: String },

    /// Any other read failure.
    IoError { source: String, detail: String },

    /// The text is not an edge list: missing column, short row, bad weight.
    InvalidEdgeList { source: String, detail: String },

    /// The arguments given cannot produce a query.
    InvalidArguments { detail: String },

    /// A prompt got no answer.
    PromptFailed { detail: String },

    /// The search relaxed a negative edge or overflowed.
    QueryFailed { detail: String },
}

impl CliError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::QueryFailed { .. } => 1,

            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::InvalidEdgeList { .. }
            | Self::InvalidArguments { .. }
            | Self::PromptFailed { .. } => 2,
        }
    }

    /// The line printed to stderr, prefixed with `error: `.
    pub fn message(&self) -> String {
        let body = match self {
            Self::FileNotFound { path } => format!("{}: file not found", path.display()),
            Self::PermissionDenied { path } => {
                format!("{}: permission denied", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => format!("{source} is too large ({actual} bytes, limit {limit})"),
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => format!("{source} is too large (more than {limit} bytes)"),
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => format!("{source} is not valid UTF-8 (byte {byte_offset})"),
            Self::StdinReadError { detail } => format!("reading stdin: {detail}"),
            Self::IoError { source, detail } => format!("reading {source}: {detail}"),
            Self::InvalidEdgeList { source, detail } => format!("{source}: {detail}"),
            Self::InvalidArguments { detail } => detail.clone(),
            Self::PromptFailed { detail } => format!("no answer to prompt: {detail}"),
            Self::QueryFailed { detail } => format!("search aborted: {detail}"),
        };
        format!("error: {body}")
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}
