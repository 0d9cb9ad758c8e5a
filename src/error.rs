//! Error types shared by table loading, querying, and the minutes pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, querying, or merging delimited tables.
#[derive(Error, Debug)]
pub enum TableError {
    /// The path could not be opened for reading or writing.
    #[error("cannot access {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file had no header line to read fields from.
    #[error("{path:?} has no header line")]
    MalformedInput { path: PathBuf },

    /// The named column does not exist in the table header.
    #[error("unknown column '{name}'")]
    ColumnNotFound { name: String },

    /// A row index was past the end of the table.
    #[error("row {index} out of range (table has {rows} rows)")]
    RowOutOfRange { index: usize, rows: usize },

    /// A key cell could not be parsed as an integer.
    #[error("key cell '{value}' is not numeric")]
    ValueParse { value: String },

    /// A date cell did not match the expected format.
    #[error("date '{value}' does not match format '{format}'")]
    DateParse {
        value: String,
        format: &'static str,
    },

    /// CSV-level read or write failure (including ragged rows).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Other I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TableError>;
