//! Close-approach event types

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use super::body::{Body, BodyId};
use super::time::format_datetime;
use super::{fixed_precision, DISTANCE_PRECISION, VELOCITY_PRECISION};

/// Handle to an approach inside a `LinkedSet`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApproachId(usize);

impl ApproachId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the approach in storage order
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Unlinked close-approach record as produced by the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproachRecord {
    /// Designation of the approaching body (foreign key)
    pub designation: String,
    /// Time of closest approach (UTC)
    pub time: NaiveDateTime,
    /// Nominal approach distance in astronomical units
    pub distance: f64,
    /// Relative approach velocity in km/s
    pub velocity: f64,
}

impl ApproachRecord {
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
        }
    }
}

/// A linked close approach.
///
/// `body` is set by the linker when the designation resolves, and never
/// changes afterwards.
#[derive(Debug, Clone)]
pub struct Approach {
    designation: String,
    time: NaiveDateTime,
    distance: f64,
    velocity: f64,
    body: Option<BodyId>,
}

impl Approach {
    pub(crate) fn from_record(record: ApproachRecord, body: Option<BodyId>) -> Self {
        Self {
            designation: record.designation,
            time: record.time,
            distance: record.distance,
            velocity: record.velocity,
            body,
        }
    }

    /// Designation the approach was recorded against
    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn time(&self) -> &NaiveDateTime {
        &self.time
    }

    /// Approach time as `YYYY-MM-DD HH:MM`
    pub fn time_str(&self) -> String {
        format_datetime(&self.time)
    }

    /// Distance in au
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Velocity in km/s
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Handle of the linked body, `None` when the designation matched nothing
    pub fn body_id(&self) -> Option<BodyId> {
        self.body
    }

    pub fn is_linked(&self) -> bool {
        self.body.is_some()
    }

    /// Flat field map for report generation, with the linked body nested
    /// under `neo` (`null` when unlinked).
    pub fn to_record(&self, body: Option<&Body>) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("datetime_utc".to_string(), Value::String(self.time_str()));
        record.insert(
            "distance_au".to_string(),
            fixed_precision(self.distance, DISTANCE_PRECISION),
        );
        record.insert(
            "velocity_km_s".to_string(),
            fixed_precision(self.velocity, VELOCITY_PRECISION),
        );
        record.insert(
            "neo".to_string(),
            body.map_or(Value::Null, |b| Value::Object(b.to_record())),
        );
        record
    }
}
