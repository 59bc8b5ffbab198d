/// Edge-list loading from delimited text with a header row.
///
/// The header must name `source`, `target`, and `weight` columns; their
/// position does not matter and any other columns are ignored. Every
/// following row is one directed edge. The first bad row aborts the whole
/// load, so a caller never sees a partially built [`Graph`].
///
/// This module reads from any [`std::io::Read`]; opening files is left to the
/// caller.
use std::io;

use crate::graph::{Edge, Graph};

const SOURCE: &str = "source";
const TARGET: &str = "target";
const WEIGHT: &str = "weight";

/// Parsing options for [`load_graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter byte. Defaults to `b','`.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Errors that abort loading an edge list.
///
/// [`LoadError::Io`] means the input could not be read at all; every other
/// variant means the input was read but is not a well-formed edge list (see
/// [`LoadError::is_format_error`]).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The underlying reader failed.
    #[error("failed to read edge list: {0}")]
    Io(#[from] io::Error),

    /// The header row lacks a required column.
    #[error("header is missing required column {column:?}")]
    MissingColumn {
        /// Name of the missing column.
        column: &'static str,
    },

    /// A record has no value for a required column.
    #[error("line {line}: record has no {field:?} field")]
    MissingField {
        /// 1-based input line of the record.
        line: u64,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A weight value is not an integer.
    #[error("line {line}: weight {value:?} is not an integer")]
    InvalidWeight {
        /// 1-based input line of the record.
        line: u64,
        /// The rejected raw value.
        value: String,
    },

    /// The record could not be split into fields.
    #[error("line {line}: malformed record: {detail}")]
    MalformedRecord {
        /// 1-based input line of the record, or 0 if unknown.
        line: u64,
        /// Description from the delimited-text parser.
        detail: String,
    },
}

impl LoadError {
    /// Returns `true` for every variant except [`LoadError::Io`].
    pub fn is_format_error(&self) -> bool {
        !matches!(self, LoadError::Io(_))
    }
}

/// Column positions of the three required fields within a record.
#[derive(Debug, Clone, Copy)]
struct Columns {
    source: usize,
    target: usize,
    weight: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(LoadError::MissingColumn { column })
        };
        Ok(Self {
            source: find(SOURCE)?,
            target: find(TARGET)?,
            weight: find(WEIGHT)?,
        })
    }
}

/// Reads an edge list from `reader` and builds a [`Graph`].
///
/// Each row appends `(target, weight)` to the adjacency sequence of
/// `source`, in input order. Node ids are taken verbatim; weights may carry
/// surrounding whitespace and may be negative.
///
/// # Errors
///
/// - [`LoadError::Io`] if reading fails.
/// - [`LoadError::MissingColumn`] if the header lacks a required column.
/// - [`LoadError::MissingField`] if a row is too short to hold a required
///   field.
/// - [`LoadError::InvalidWeight`] if a weight does not parse as `i64`.
/// - [`LoadError::MalformedRecord`] for any other row-level parse failure,
///   such as invalid UTF-8.
pub fn load_graph<R: io::Read>(reader: R, options: &LoadOptions) -> Result<Graph, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| from_csv(e, 1))?.clone();
    let columns = Columns::locate(&headers)?;

    let mut edges = Vec::new();
    let mut record = csv::StringRecord::new();
    loop {
        // Line of the record about to be read, for errors raised before the
        // record has a position of its own.
        let next_line = rdr.position().line();
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(from_csv(e, next_line)),
        }
        let line = record.position().map_or(next_line, csv::Position::line);
        edges.push(parse_edge(&record, columns, line)?);
    }

    let graph = Graph::from_edges(edges);
    tracing::debug!(
        edges = graph.edge_count(),
        sources = graph.source_count(),
        "loaded edge list"
    );
    Ok(graph)
}

fn parse_edge(record: &csv::StringRecord, columns: Columns, line: u64) -> Result<Edge, LoadError> {
    let field = |idx: usize, name: &'static str| {
        record
            .get(idx)
            .ok_or(LoadError::MissingField { line, field: name })
    };

    let source = field(columns.source, SOURCE)?;
    let target = field(columns.target, TARGET)?;
    let raw_weight = field(columns.weight, WEIGHT)?;
    let weight = raw_weight
        .trim()
        .parse::<i64>()
        .map_err(|_| LoadError::InvalidWeight {
            line,
            value: raw_weight.to_owned(),
        })?;

    Ok(Edge::new(source, target, weight))
}

/// Splits a `csv` error into an I/O failure or a format failure.
fn from_csv(err: csv::Error, line: u64) -> LoadError {
    let line = err.position().map_or(line, csv::Position::line);
    let detail = err.to_string();
    if let csv::ErrorKind::Io(io_err) = err.into_kind() {
        LoadError::Io(io_err)
    } else {
        LoadError::MalformedRecord { line, detail }
    }
}
