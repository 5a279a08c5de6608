//! Attribute comparison filters

use std::fmt;

use chrono::NaiveDate;

use crate::database::Filter;
use crate::link::ApproachView;

/// Comparison against a bound.
///
/// Values that are not comparable (a `NaN` diameter) never match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterOp<T> {
    /// attribute = value
    Eq(T),
    /// attribute >= value
    Gte(T),
    /// attribute > value
    Gt(T),
    /// attribute <= value
    Lte(T),
    /// attribute < value
    Lt(T),
}

impl<T: PartialOrd> FilterOp<T> {
    /// Compare an attribute value against this bound
    pub fn test(&self, actual: &T) -> bool {
        match self {
            FilterOp::Eq(bound) => actual == bound,
            FilterOp::Gte(bound) => actual >= bound,
            FilterOp::Gt(bound) => actual > bound,
            FilterOp::Lte(bound) => actual <= bound,
            FilterOp::Lt(bound) => actual < bound,
        }
    }
}

impl<T> FilterOp<T> {
    /// Returns the operator symbol for display
    pub fn symbol(&self) -> &'static str {
        match self {
            FilterOp::Eq(_) => "=",
            FilterOp::Gte(_) => ">=",
            FilterOp::Gt(_) => ">",
            FilterOp::Lte(_) => "<=",
            FilterOp::Lt(_) => "<",
        }
    }

    pub fn bound(&self) -> &T {
        match self {
            FilterOp::Eq(v) | FilterOp::Gte(v) | FilterOp::Gt(v) | FilterOp::Lte(v) | FilterOp::Lt(v) => v,
        }
    }
}

/// A single attribute filter over a linked approach.
///
/// Diameter and hazard flag are read from the linked body; an unlinked
/// approach never matches them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeFilter {
    /// Calendar date of the approach
    Date(FilterOp<NaiveDate>),
    /// Approach distance in au
    Distance(FilterOp<f64>),
    /// Approach velocity in km/s
    Velocity(FilterOp<f64>),
    /// Body diameter in km
    Diameter(FilterOp<f64>),
    /// Body hazard flag equals the value
    Hazardous(bool),
}

impl AttributeFilter {
    /// Attribute name for display
    pub fn attribute(&self) -> &'static str {
        match self {
            AttributeFilter::Date(_) => "date",
            AttributeFilter::Distance(_) => "distance",
            AttributeFilter::Velocity(_) => "velocity",
            AttributeFilter::Diameter(_) => "diameter",
            AttributeFilter::Hazardous(_) => "hazardous",
        }
    }
}

impl Filter for AttributeFilter {
    fn matches(&self, approach: &ApproachView<'_>) -> bool {
        match self {
            AttributeFilter::Date(op) => op.test(&approach.time().date()),
            AttributeFilter::Distance(op) => op.test(&approach.distance()),
            AttributeFilter::Velocity(op) => op.test(&approach.velocity()),
            AttributeFilter::Diameter(op) => approach
                .body()
                .is_some_and(|body| op.test(&body.diameter())),
            AttributeFilter::Hazardous(expected) => approach
                .body()
                .is_some_and(|body| body.hazardous() == *expected),
        }
    }
}

impl fmt::Display for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeFilter::Date(op) => write!(f, "date {} {}", op.symbol(), op.bound()),
            AttributeFilter::Distance(op) => write!(f, "distance {} {}", op.symbol(), op.bound()),
            AttributeFilter::Velocity(op) => write!(f, "velocity {} {}", op.symbol(), op.bound()),
            AttributeFilter::Diameter(op) => write!(f, "diameter {} {}", op.symbol(), op.bound()),
            AttributeFilter::Hazardous(value) => write!(f, "hazardous = {}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::link;
    use crate::model::{parse_approach_time, ApproachRecord, BodyRecord};

    #[test]
    fn test_filter_op_comparisons() {
        assert!(FilterOp::Eq(1.0).test(&1.0));
        assert!(FilterOp::Gte(1.0).test(&1.0));
        assert!(!FilterOp::Gt(1.0).test(&1.0));
        assert!(FilterOp::Lte(1.0).test(&0.5));
        assert!(!FilterOp::Lt(1.0).test(&1.0));
    }

    #[test]
    fn test_nan_never_matches() {
        for op in [
            FilterOp::Eq(1.0),
            FilterOp::Gte(1.0),
            FilterOp::Gt(1.0),
            FilterOp::Lte(1.0),
            FilterOp::Lt(1.0),
        ] {
            assert!(!op.test(&f64::NAN));
        }
    }

    #[test]
    fn test_body_attributes_on_linked_and_unlinked() {
        let set = link(
            vec![
                BodyRecord::new("99942", Some("Apophis".into()), 0.37, true),
                BodyRecord::unnamed("2020 AB", false),
            ],
            vec![
                ApproachRecord::new("99942", parse_approach_time("2029-Apr-13 21:46").unwrap(), 0.000254, 7.42),
                ApproachRecord::new("2020 AB", parse_approach_time("2020-Jan-05 12:00").unwrap(), 0.02, 3.1),
                ApproachRecord::new("ghost", parse_approach_time("2020-Jan-05 12:00").unwrap(), 0.02, 3.1),
            ],
        );
        let views: Vec<_> = set.approaches().collect();

        let hazardous = AttributeFilter::Hazardous(true);
        let safe = AttributeFilter::Hazardous(false);
        assert!(hazardous.matches(&views[0]));
        assert!(safe.matches(&views[1]));
        assert!(!hazardous.matches(&views[2]));
        assert!(!safe.matches(&views[2]));

        let small = AttributeFilter::Diameter(FilterOp::Lte(1.0));
        assert!(small.matches(&views[0]));
        assert!(!small.matches(&views[1])); // unknown diameter
        assert!(!small.matches(&views[2])); // no body
    }

    #[test]
    fn test_date_compares_calendar_day() {
        let set = link(
            vec![],
            vec![ApproachRecord::new("x", parse_approach_time("2020-Jan-05 23:59").unwrap(), 0.1, 1.0)],
        );
        let view = set.approaches().next().unwrap();
        let day = NaiveDate::from_ymd_opt(2020, 1, 5).unwrap();
        assert!(AttributeFilter::Date(FilterOp::Eq(day)).matches(&view));
        assert!(AttributeFilter::Date(FilterOp::Lte(day)).matches(&view));
        assert!(!AttributeFilter::Date(FilterOp::Gt(day)).matches(&view));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AttributeFilter::Distance(FilterOp::Gte(0.1)).to_string(),
            "distance >= 0.1"
        );
        assert_eq!(AttributeFilter::Hazardous(true).to_string(), "hazardous = true");
        let day = NaiveDate::from_ymd_opt(2020, 1, 5).unwrap();
        assert_eq!(AttributeFilter::Date(FilterOp::Eq(day)).to_string(), "date = 2020-01-05");
        assert_eq!(AttributeFilter::Hazardous(false).attribute(), "hazardous");
    }
}
