//! Database construction and lookups

use std::collections::HashMap;

use crate::link::{link_with_policy, AppendPolicy, ApproachView, BodyView, LinkStats, LinkedSet};
use crate::model::{ApproachRecord, BodyId, BodyRecord};

use super::query::{Filter, Query};

/// Summary of a constructed database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseStats {
    /// Bodies held
    pub bodies: usize,
    /// Approaches held, linked or not
    pub approaches: usize,
    /// Bodies reachable by name
    pub named_bodies: usize,
    /// Policy the approach lists were built under
    pub policy: AppendPolicy,
    /// Counters from linking
    pub link: LinkStats,
}

/// A linked, immutable database of NEOs and their close approaches.
#[derive(Debug, Clone)]
pub struct Database {
    /// Linked bodies and approaches
    set: LinkedSet,

    /// Primary key index (designation -> body)
    by_designation: HashMap<String, BodyId>,

    /// Name index (name -> body), named bodies only
    by_name: HashMap<String, BodyId>,

    policy: AppendPolicy,
}

impl Database {
    /// Link unlinked records and build the lookup indexes.
    pub fn new(bodies: Vec<BodyRecord>, approaches: Vec<ApproachRecord>) -> Self {
        Self::with_policy(bodies, approaches, AppendPolicy::default())
    }

    /// Same as `new`, with an explicit approach-list policy.
    pub fn with_policy(
        bodies: Vec<BodyRecord>,
        approaches: Vec<ApproachRecord>,
        policy: AppendPolicy,
    ) -> Self {
        Self::from_linked(link_with_policy(bodies, approaches, policy), policy)
    }

    /// Build the lookup indexes over an already linked set.
    fn from_linked(set: LinkedSet, policy: AppendPolicy) -> Self {
        let mut by_designation = HashMap::with_capacity(set.body_count());
        let mut by_name = HashMap::new();

        // First body wins on both keys, matching the linker
        for body in set.bodies() {
            by_designation
                .entry(body.designation().to_string())
                .or_insert(body.id());
            if let Some(name) = body.name().filter(|n| !n.is_empty()) {
                by_name.entry(name.to_string()).or_insert(body.id());
            }
        }

        Self {
            set,
            by_designation,
            by_name,
            policy,
        }
    }

    /// Find a body by its primary designation. Matching is exact.
    pub fn get_by_designation(&self, designation: &str) -> Option<BodyView<'_>> {
        self.by_designation
            .get(designation)
            .map(|&id| self.set.body(id))
    }

    /// Find a body by name. Matching is exact.
    ///
    /// `None` and the empty string never match.
    pub fn get_by_name<'a>(&self, name: impl Into<Option<&'a str>>) -> Option<BodyView<'_>> {
        let name = name.into().filter(|n| !n.is_empty())?;
        self.by_name.get(name).map(|&id| self.set.body(id))
    }

    /// Stream the approaches that satisfy every filter, in storage order.
    ///
    /// An empty filter slice matches every approach.
    pub fn query<'db, 'f, F: Filter>(&'db self, filters: &'f [F]) -> Query<'db, 'f, F> {
        Query::new(&self.set, filters)
    }

    /// All bodies in storage order
    pub fn bodies(&self) -> impl Iterator<Item = BodyView<'_>> {
        self.set.bodies()
    }

    /// All approaches in storage order
    pub fn approaches(&self) -> impl Iterator<Item = ApproachView<'_>> {
        self.set.approaches()
    }

    pub fn body_count(&self) -> usize {
        self.set.body_count()
    }

    pub fn approach_count(&self) -> usize {
        self.set.approach_count()
    }

    pub fn policy(&self) -> AppendPolicy {
        self.policy
    }

    pub fn stats(&self) -> DatabaseStats {
        DatabaseStats {
            bodies: self.set.body_count(),
            approaches: self.set.approach_count(),
            named_bodies: self.by_name.len(),
            policy: self.policy,
            link: *self.set.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_approach_time;

    fn approach(des: &str, time: &str, distance: f64) -> ApproachRecord {
        ApproachRecord::new(des, parse_approach_time(time).unwrap(), distance, 5.0)
    }

    fn sample() -> Database {
        Database::new(
            vec![
                BodyRecord::new("433", Some("Eros".into()), 16.84, false),
                BodyRecord::new("99942", Some("Apophis".into()), 0.37, true),
                BodyRecord::new("2020 AB", None, f64::NAN, false),
            ],
            vec![
                approach("433", "2020-Jan-01 00:00", 0.15),
                approach("99942", "2029-Apr-13 21:46", 0.000254),
                approach("433", "2021-Jan-01 00:00", 0.3),
            ],
        )
    }

    #[test]
    fn test_lookup_by_designation() {
        let db = sample();
        let eros = db.get_by_designation("433").unwrap();
        assert_eq!(eros.designation(), "433");
        assert_eq!(eros.name(), Some("Eros"));
        assert!(db.get_by_designation("433 ").is_none());
        assert!(db.get_by_designation("").is_none());
    }

    #[test]
    fn test_lookup_by_name() {
        let db = sample();
        assert_eq!(db.get_by_name("Apophis").unwrap().designation(), "99942");
        assert!(db.get_by_name("apophis").is_none());
        assert!(db.get_by_name("").is_none());
        assert!(db.get_by_name(None::<&str>).is_none());
    }

    #[test]
    fn test_unnamed_body_not_in_name_index() {
        let db = sample();
        assert!(db.get_by_designation("2020 AB").is_some());
        assert_eq!(db.stats().named_bodies, 2);
    }

    #[test]
    fn test_query_without_filters_yields_everything() {
        let db = sample();
        let no_filters: &[Box<dyn Filter>] = &[];
        assert_eq!(db.query(no_filters).count(), 3);
    }

    #[test]
    fn test_query_counts_scanned() {
        struct Far;
        impl Filter for Far {
            fn matches(&self, approach: &ApproachView<'_>) -> bool {
                approach.distance() > 0.2
            }
        }

        let db = sample();
        let filters = [Far];
        let mut query = db.query(&filters);
        let first = query.next().unwrap();
        assert_eq!(first.time_str(), "2021-01-01 00:00");
        assert_eq!(query.scanned(), 3);
        assert!(query.next().is_none());
        assert!(query.next().is_none());
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.bodies, 3);
        assert_eq!(stats.approaches, 3);
        assert_eq!(stats.policy, AppendPolicy::FirstOnly);
        assert_eq!(stats.link.linked, 3);
        assert_eq!(stats.link.appended, 2);
    }
}
