//! Close-approach JSON reader
//!
//! Expected layout:
//!
//! ```text
//! {
//!   "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", ...],
//!   "data": [["433", "659", "2415020.5", "1900-Jan-01 00:00", "0.31", ...], ...]
//! }
//! ```
//!
//! Columns are located by name through `fields`. When `fields` is absent the
//! standard column positions are assumed.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::model::{parse_approach_time, ApproachRecord};

use super::errors::{LoadError, LoadResult};

const DESIGNATION: &str = "des";
const TIME: &str = "cd";
const DISTANCE: &str = "dist";
const VELOCITY: &str = "v_rel";

/// Positions of the needed columns in the standard layout
const DEFAULT_COLUMNS: Columns = Columns {
    designation: 0,
    time: 3,
    distance: 4,
    velocity: 7,
};

#[derive(Debug, Deserialize)]
struct ApproachFile {
    #[serde(default)]
    fields: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    designation: usize,
    time: usize,
    distance: usize,
    velocity: usize,
}

impl Columns {
    fn resolve(fields: &[String]) -> LoadResult<Self> {
        if fields.is_empty() {
            return Ok(DEFAULT_COLUMNS);
        }

        let find = |name: &str| {
            fields
                .iter()
                .position(|f| f == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            designation: find(DESIGNATION)?,
            time: find(TIME)?,
            distance: find(DISTANCE)?,
            velocity: find(VELOCITY)?,
        })
    }
}

/// Text of a cell; numbers are accepted in their JSON spelling.
fn cell(row: &[Value], index: usize, column: &str, row_number: usize) -> LoadResult<String> {
    match row.get(index) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(LoadError::MissingValue {
            row: row_number,
            column: column.to_string(),
        }),
    }
}

fn number(row: &[Value], index: usize, column: &str, row_number: usize) -> LoadResult<f64> {
    let raw = cell(row, index, column, row_number)?;
    raw.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        row: row_number,
        column: column.to_string(),
        value: raw.clone(),
    })
}

fn parse_row(row: &[Value], columns: Columns, row_number: usize) -> LoadResult<ApproachRecord> {
    let designation = cell(row, columns.designation, DESIGNATION, row_number)?;

    let raw_time = cell(row, columns.time, TIME, row_number)?;
    let time = parse_approach_time(&raw_time).map_err(|_| LoadError::InvalidTimestamp {
        row: row_number,
        value: raw_time.clone(),
    })?;

    let distance = number(row, columns.distance, DISTANCE, row_number)?;
    let velocity = number(row, columns.velocity, VELOCITY, row_number)?;

    Ok(ApproachRecord::new(designation, time, distance, velocity))
}

/// Read close-approach records from a JSON file.
pub fn load_approaches(path: &Path) -> LoadResult<Vec<ApproachRecord>> {
    let file = File::open(path).map_err(|e| LoadError::io(path.display().to_string(), e))?;
    read_approaches(BufReader::new(file))
}

/// Read close-approach records from any JSON source.
pub fn read_approaches<R: Read>(source: R) -> LoadResult<Vec<ApproachRecord>> {
    let parsed: ApproachFile = serde_json::from_reader(source)?;
    let columns = Columns::resolve(&parsed.fields)?;

    parsed
        .data
        .iter()
        .enumerate()
        .map(|(i, row)| parse_row(row, columns, i + 1))
        .collect()
}
