//! Near-Earth object (body) types

use std::fmt;

use serde_json::{Map, Value};

use super::approach::ApproachId;
use super::{fixed_precision, DIAMETER_PRECISION};

/// Handle to a body inside a `LinkedSet`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(usize);

impl BodyId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the body in storage order
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Unlinked body record as produced by the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRecord {
    /// Primary designation (unique, non-empty)
    pub designation: String,
    /// IAU name, never `Some("")`
    pub name: Option<String>,
    /// Diameter in kilometres, `NaN` when unknown
    pub diameter: f64,
    /// Potentially hazardous flag
    pub hazardous: bool,
}

impl BodyRecord {
    /// Create a record, normalizing an empty name to `None`.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: f64,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()),
            diameter,
            hazardous,
        }
    }

    /// Create a record with unknown name and diameter.
    pub fn unnamed(designation: impl Into<String>, hazardous: bool) -> Self {
        Self::new(designation, None, f64::NAN, hazardous)
    }
}

/// A linked near-Earth object.
///
/// Holds handles to its close approaches; the approaches themselves are
/// owned by the `LinkedSet`.
#[derive(Debug, Clone)]
pub struct Body {
    designation: String,
    name: Option<String>,
    diameter: f64,
    hazardous: bool,
    approaches: Vec<ApproachId>,
}

impl Body {
    pub(crate) fn from_record(record: BodyRecord) -> Self {
        Self {
            designation: record.designation,
            name: record.name.filter(|n| !n.is_empty()),
            diameter: record.diameter,
            hazardous: record.hazardous,
            approaches: Vec::new(),
        }
    }

    pub(crate) fn push_approach(&mut self, id: ApproachId) {
        self.approaches.push(id);
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometres (`NaN` when unknown)
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn has_known_diameter(&self) -> bool {
        !self.diameter.is_nan()
    }

    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// Handles of the approaches recorded against this body
    pub fn approach_ids(&self) -> &[ApproachId] {
        &self.approaches
    }

    /// `"433 (Eros)"` when named, otherwise just the designation
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Flat field map for report generation.
    ///
    /// An absent name serializes as the empty string; an unknown diameter as `null`.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert(
            "designation".to_string(),
            Value::String(self.designation.clone()),
        );
        record.insert(
            "name".to_string(),
            Value::String(self.name.clone().unwrap_or_default()),
        );
        record.insert(
            "diameter_km".to_string(),
            fixed_precision(self.diameter, DIAMETER_PRECISION),
        );
        record.insert(
            "potentially_hazardous".to_string(),
            Value::Bool(self.hazardous),
        );
        record
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {}", self.fullname())?;
        if self.has_known_diameter() {
            write!(f, " has a diameter of {:.3} km", self.diameter)?;
        } else {
            write!(f, " has an unknown diameter")?;
        }
        if self.hazardous {
            write!(f, " and is potentially hazardous.")
        } else {
            write!(f, " and is not potentially hazardous.")
        }
    }
}
