/// Error taxonomy for the report pipeline.
///
/// Load-time errors are fatal to the report: the frontend surfaces them
/// in place of the dashboard. Everything downstream of a successful load
/// degrades to an empty widget instead of erroring — an empty derived
/// table is not a failure.
use std::path::PathBuf;

use thiserror::Error;

/// The source file could not be turned into a record table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or unreadable.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed CSV.
    #[error("malformed CSV in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file parses as CSV but does not match the expected schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// The table is missing an expected column, or a value is mistyped.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A required column header is absent.
    #[error("missing expected column {name:?}")]
    MissingColumn { name: &'static str },

    /// A cell failed to parse or validate. `line` is 1-based in the
    /// source file (the header is line 1).
    #[error("invalid value in column {column:?} on line {line}: {message}")]
    InvalidValue {
        column: String,
        line: u64,
        message: String,
    },
}
