//! User criteria to filter list conversion

use chrono::NaiveDate;

use super::attribute::{AttributeFilter, FilterOp};

/// Optional user-supplied query criteria.
///
/// Every `Some` field becomes one filter; `None` fields impose nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Approaches on exactly this date
    pub date: Option<NaiveDate>,
    /// Approaches on or after this date
    pub start_date: Option<NaiveDate>,
    /// Approaches on or before this date
    pub end_date: Option<NaiveDate>,
    /// Minimum distance (au)
    pub distance_min: Option<f64>,
    /// Maximum distance (au)
    pub distance_max: Option<f64>,
    /// Minimum velocity (km/s)
    pub velocity_min: Option<f64>,
    /// Maximum velocity (km/s)
    pub velocity_max: Option<f64>,
    /// Minimum body diameter (km)
    pub diameter_min: Option<f64>,
    /// Maximum body diameter (km)
    pub diameter_max: Option<f64>,
    /// Required hazard flag
    pub hazardous: Option<bool>,
}

impl FilterCriteria {
    /// Returns true if no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Build the attribute filters for the given criteria.
///
/// Filters come out in a fixed order: date, start date, end date, distance,
/// velocity, diameter, hazardous.
pub fn create_filters(criteria: &FilterCriteria) -> Vec<AttributeFilter> {
    let mut filters = Vec::new();

    if let Some(date) = criteria.date {
        filters.push(AttributeFilter::Date(FilterOp::Eq(date)));
    }
    if let Some(start) = criteria.start_date {
        filters.push(AttributeFilter::Date(FilterOp::Gte(start)));
    }
    if let Some(end) = criteria.end_date {
        filters.push(AttributeFilter::Date(FilterOp::Lte(end)));
    }
    if let Some(min) = criteria.distance_min {
        filters.push(AttributeFilter::Distance(FilterOp::Gte(min)));
    }
    if let Some(max) = criteria.distance_max {
        filters.push(AttributeFilter::Distance(FilterOp::Lte(max)));
    }
    if let Some(min) = criteria.velocity_min {
        filters.push(AttributeFilter::Velocity(FilterOp::Gte(min)));
    }
    if let Some(max) = criteria.velocity_max {
        filters.push(AttributeFilter::Velocity(FilterOp::Lte(max)));
    }
    if let Some(min) = criteria.diameter_min {
        filters.push(AttributeFilter::Diameter(FilterOp::Gte(min)));
    }
    if let Some(max) = criteria.diameter_max {
        filters.push(AttributeFilter::Diameter(FilterOp::Lte(max)));
    }
    if let Some(hazardous) = criteria.hazardous {
        filters.push(AttributeFilter::Hazardous(hazardous));
    }

    filters
}

/// Yield at most `n` items. `None` and `Some(0)` mean no limit.
pub fn limit<I: Iterator>(iter: I, n: Option<usize>) -> std::iter::Take<I> {
    let n = match n {
        None | Some(0) => usize::MAX,
        Some(n) => n,
    };
    iter.take(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_criteria_no_filters() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert!(create_filters(&criteria).is_empty());
    }

    #[test]
    fn test_one_filter_per_criterion() {
        let criteria = FilterCriteria {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2020, 12, 31),
            distance_max: Some(0.1),
            hazardous: Some(true),
            ..FilterCriteria::default()
        };

        let filters = create_filters(&criteria);
        assert_eq!(
            filters,
            vec![
                AttributeFilter::Date(FilterOp::Gte(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())),
                AttributeFilter::Date(FilterOp::Lte(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap())),
                AttributeFilter::Distance(FilterOp::Lte(0.1)),
                AttributeFilter::Hazardous(true),
            ]
        );
    }

    #[test]
    fn test_all_criteria() {
        let criteria = FilterCriteria {
            date: NaiveDate::from_ymd_opt(2020, 1, 1),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            distance_min: Some(0.0),
            distance_max: Some(1.0),
            velocity_min: Some(0.0),
            velocity_max: Some(50.0),
            diameter_min: Some(0.0),
            diameter_max: Some(10.0),
            hazardous: Some(false),
        };
        assert_eq!(create_filters(&criteria).len(), 10);
    }

    #[test]
    fn test_limit() {
        assert_eq!(limit(1..=10, Some(3)).count(), 3);
        assert_eq!(limit(1..=10, Some(0)).count(), 10);
        assert_eq!(limit(1..=10, None).count(), 10);
        assert_eq!(limit(1..=2, Some(5)).count(), 2);
    }
}
