//! Loader error types
//!
//! Error codes:
//! - NEODB_LOAD_IO
//! - NEODB_LOAD_CSV
//! - NEODB_LOAD_JSON
//! - NEODB_LOAD_MISSING_COLUMN
//! - NEODB_LOAD_MISSING_VALUE
//! - NEODB_LOAD_INVALID_NUMBER
//! - NEODB_LOAD_INVALID_TIMESTAMP

use std::io;

use thiserror::Error;

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Failures while reading source data.
///
/// Rows are numbered from 1 for the first data row.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Required column not present in the header
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    /// Required value absent in a row
    #[error("Row {row}: missing value for '{column}'")]
    MissingValue { row: usize, column: String },

    /// Numeric field that does not parse as a float
    #[error("Row {row}: invalid number '{value}' for '{column}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    /// Timestamp not in `YYYY-Mon-DD hh:mm` form
    #[error("Row {row}: invalid timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "NEODB_LOAD_IO",
            LoadError::Csv(_) => "NEODB_LOAD_CSV",
            LoadError::Json(_) => "NEODB_LOAD_JSON",
            LoadError::MissingColumn(_) => "NEODB_LOAD_MISSING_COLUMN",
            LoadError::MissingValue { .. } => "NEODB_LOAD_MISSING_VALUE",
            LoadError::InvalidNumber { .. } => "NEODB_LOAD_INVALID_NUMBER",
            LoadError::InvalidTimestamp { .. } => "NEODB_LOAD_INVALID_TIMESTAMP",
        }
    }
}
