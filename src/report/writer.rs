//! CSV and JSON report writers

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use crate::link::ApproachView;
use crate::model::{
    fixed_precision_str, DIAMETER_PRECISION, DISTANCE_PRECISION, VELOCITY_PRECISION,
};

use super::errors::{ReportError, ReportResult};

/// CSV header, in column order
pub const CSV_FIELDS: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    /// Pick the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> ReportResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => Ok(ReportFormat::Csv),
            Some("json") => Ok(ReportFormat::Json),
            _ => Err(ReportError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

fn csv_row(approach: &ApproachView<'_>) -> [String; 7] {
    let body = approach.body();
    [
        approach.time_str(),
        format!("{:.*}", DISTANCE_PRECISION, approach.distance()),
        format!("{:.*}", VELOCITY_PRECISION, approach.velocity()),
        approach.designation().to_string(),
        body.and_then(|b| b.name().map(str::to_string))
            .unwrap_or_default(),
        body.map_or_else(
            || fixed_precision_str(f64::NAN, DIAMETER_PRECISION),
            |b| fixed_precision_str(b.diameter(), DIAMETER_PRECISION),
        ),
        body.map(|b| b.hazardous().to_string()).unwrap_or_default(),
    ]
}

/// Write results as CSV with a header row. Returns the number of rows.
pub fn write_csv<'db, W, I>(writer: W, results: I) -> ReportResult<usize>
where
    W: Write,
    I: IntoIterator<Item = ApproachView<'db>>,
{
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(CSV_FIELDS)?;

    let mut count = 0;
    for approach in results {
        out.write_record(csv_row(&approach))?;
        count += 1;
    }

    out.flush().map_err(csv::Error::from)?;
    Ok(count)
}

/// Write results as a pretty-printed JSON array. Returns the number of entries.
pub fn write_json<'db, W, I>(mut writer: W, results: I) -> ReportResult<usize>
where
    W: Write,
    I: IntoIterator<Item = ApproachView<'db>>,
{
    let records: Vec<Value> = results
        .into_iter()
        .map(|a| Value::Object(a.to_record()))
        .collect();

    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    Ok(records.len())
}

fn create(path: &Path) -> ReportResult<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })
}

/// Write results to a CSV file
pub fn write_to_csv<'db, I>(results: I, path: &Path) -> ReportResult<usize>
where
    I: IntoIterator<Item = ApproachView<'db>>,
{
    write_csv(create(path)?, results)
}

/// Write results to a JSON file
pub fn write_to_json<'db, I>(results: I, path: &Path) -> ReportResult<usize>
where
    I: IntoIterator<Item = ApproachView<'db>>,
{
    let mut file = create(path)?;
    let count = write_json(&mut file, results)?;
    file.flush().map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(count)
}

/// Write results to `path`, choosing the format from its extension
pub fn write_results<'db, I>(results: I, path: &Path) -> ReportResult<usize>
where
    I: IntoIterator<Item = ApproachView<'db>>,
{
    match ReportFormat::from_path(path)? {
        ReportFormat::Csv => write_to_csv(results, path),
        ReportFormat::Json => write_to_json(results, path),
    }
}
