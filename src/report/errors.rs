//! Report error types

use std::io;

use thiserror::Error;

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Failures while writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Output file could not be created or written
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output path has an extension other than `.csv` or `.json`
    #[error("Unsupported report format for '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),
}

impl ReportError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ReportError::Io { .. } => "NEODB_REPORT_IO",
            ReportError::Csv(_) => "NEODB_REPORT_CSV",
            ReportError::Json(_) => "NEODB_REPORT_JSON",
            ReportError::UnsupportedFormat(_) => "NEODB_REPORT_UNSUPPORTED_FORMAT",
        }
    }
}
