//! NEO CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::model::BodyRecord;

use super::errors::{LoadError, LoadResult};

/// Columns of interest in the NEO CSV. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    diameter: Option<String>,
    #[serde(default)]
    pha: Option<String>,
}

impl NeoRow {
    fn into_record(self, row: usize) -> LoadResult<BodyRecord> {
        let designation = self.pdes.trim().to_string();
        if designation.is_empty() {
            return Err(LoadError::MissingValue {
                row,
                column: "pdes".to_string(),
            });
        }

        let diameter = match non_empty(self.diameter) {
            Some(raw) => raw.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                row,
                column: "diameter".to_string(),
                value: raw.clone(),
            })?,
            None => f64::NAN,
        };

        let hazardous = self
            .pha
            .as_deref()
            .is_some_and(|flag| flag.trim().eq_ignore_ascii_case("y"));

        Ok(BodyRecord::new(
            designation,
            non_empty(self.name),
            diameter,
            hazardous,
        ))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read NEO records from a CSV file.
pub fn load_neos(path: &Path) -> LoadResult<Vec<BodyRecord>> {
    let file = File::open(path).map_err(|e| LoadError::io(path.display().to_string(), e))?;
    read_neos(file)
}

/// Read NEO records from any CSV source with a header row.
pub fn read_neos<R: Read>(source: R) -> LoadResult<Vec<BodyRecord>> {
    let mut reader = csv::Reader::from_reader(source);
    let mut records = Vec::new();

    for (i, row) in reader.deserialize::<NeoRow>().enumerate() {
        records.push(row?.into_record(i + 1)?);
    }

    Ok(records)
}
