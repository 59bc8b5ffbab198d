//! Edge-list input for the binary.
//!
//! `shortpath-core` only sees text; this module turns a `FILE` argument into
//! that text. Both files and stdin pass through [`read_capped`], which never
//! buffers more than `--max-file-size` bytes. Files are additionally rejected
//! up front when their metadata already reports an oversized length.
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

/// Reads the whole edge list named by `source`.
///
/// # Errors
///
/// Exit-code-2 [`CliError`]s: missing file, permission denied, input over
/// `max_size`, read failure, or bytes that are not UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    let label = source.label();
    let content = match source {
        PathOrStdin::Path(path) => {
            let file = open_within_limit(path, max_size)?;
            read_capped(file, max_size, &label).map_err(|e| match e {
                CappedReadError::Io(e) => from_fs_error(&e, path),
                CappedReadError::Cli(e) => e,
            })?
        }
        PathOrStdin::Stdin => {
            read_capped(std::io::stdin().lock(), max_size, &label).map_err(|e| match e {
                CappedReadError::Io(e) => CliError::StdinReadError {
                    detail: e.to_string(),
                },
                CappedReadError::Cli(e) => e,
            })?
        }
    };
    tracing::debug!(source = %label, bytes = content.len(), "read edge list");
    Ok(content)
}

/// Opens `path` after checking its reported length against `max_size`.
fn open_within_limit(path: &Path, max_size: u64) -> Result<File, CliError> {
    let len = std::fs::metadata(path)
        .map_err(|e| from_fs_error(&e, path))?
        .len();
    if len > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(len),
        });
    }
    File::open(path).map_err(|e| from_fs_error(&e, path))
}

/// Failure of [`read_capped`]: either a raw read error, which the caller maps
/// according to where the bytes came from, or an already-classified error.
#[derive(Debug)]
enum CappedReadError {
    Io(std::io::Error),
    Cli(CliError),
}

/// Reads `reader` to the end as UTF-8, failing once more than `limit` bytes
/// arrive.
///
/// Up to `limit + 1` bytes are pulled so that a stream of exactly `limit`
/// bytes is accepted.
fn read_capped<R: Read>(reader: R, limit: u64, label: &str) -> Result<String, CappedReadError> {
    let mut buf = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(CappedReadError::Io)?;

    if buf.len() as u64 > limit {
        return Err(CappedReadError::Cli(CliError::FileTooLarge {
            source: label.to_owned(),
            limit,
            actual: None,
        }));
    }

    String::from_utf8(buf).map_err(|e| {
        CappedReadError::Cli(CliError::InvalidUtf8 {
            source: label.to_owned(),
            byte_offset: e.utf8_error().valid_up_to(),
        })
    })
}

fn from_fs_error(e: &std::io::Error, path: &Path) -> CliError {
    let path = path.to_path_buf();
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound { path }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied { path }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}
