//! Report writer for neodb
//!
//! Serializes query results to CSV or JSON. The format is chosen from the
//! output file extension.

mod errors;
mod writer;

pub use errors::{ReportError, ReportResult};
pub use writer::{
    write_csv, write_json, write_results, write_to_csv, write_to_json, ReportFormat, CSV_FIELDS,
};
