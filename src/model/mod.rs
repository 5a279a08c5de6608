//! Entity model for near-Earth objects and close approaches
//!
//! Two layers:
//!
//! - Plain records (`BodyRecord`, `ApproachRecord`) as produced by the loader.
//!   Missing-value sentinels are already normalized.
//! - Linked entities (`Body`, `Approach`) as produced by the linker. Cross
//!   references are index handles into the owning `LinkedSet`.
//!
//! Linked entities are immutable once built.

mod approach;
mod body;
mod time;

pub use approach::{Approach, ApproachId, ApproachRecord};
pub use body::{Body, BodyId, BodyRecord};
pub use time::{format_datetime, parse_approach_time, APPROACH_TIME_FORMAT, OUTPUT_TIME_FORMAT};

use serde_json::{Number, Value};

/// Decimal places for diameters in serialized records
pub const DIAMETER_PRECISION: usize = 3;

/// Decimal places for approach distances in serialized records
pub const DISTANCE_PRECISION: usize = 9;

/// Decimal places for approach velocities in serialized records
pub const VELOCITY_PRECISION: usize = 3;

/// Renders a float at fixed precision as a JSON number.
///
/// Non-finite values (the `NaN` unknown-diameter sentinel) become `null`.
pub fn fixed_precision(value: f64, places: usize) -> Value {
    if !value.is_finite() {
        return Value::Null;
    }

    format!("{:.*}", places, value)
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

/// Renders a float at fixed precision as text. `NaN` renders as `nan`.
pub fn fixed_precision_str(value: f64, places: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    format!("{:.*}", places, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fixed_precision_rounds() {
        assert_eq!(fixed_precision(16.84, 3), json!(16.84));
        assert_eq!(fixed_precision(0.123456789123, 9), json!(0.123456789));
        assert_eq!(fixed_precision(5.0004, 3), json!(5.0));
    }

    #[test]
    fn test_fixed_precision_nan_is_null() {
        assert_eq!(fixed_precision(f64::NAN, 3), Value::Null);
        assert_eq!(fixed_precision(f64::INFINITY, 3), Value::Null);
    }

    #[test]
    fn test_fixed_precision_str() {
        assert_eq!(fixed_precision_str(16.84, 3), "16.840");
        assert_eq!(fixed_precision_str(f64::NAN, 3), "nan");
    }
}
