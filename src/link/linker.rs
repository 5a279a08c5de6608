//! Designation join between bodies and approaches

use std::collections::{HashMap, HashSet};

use crate::model::{Approach, ApproachId, ApproachRecord, Body, BodyId, BodyRecord};

use super::set::{LinkStats, LinkedSet};

/// Which linked approaches get recorded in their body's approach list.
///
/// The back-reference from approach to body is set for every match
/// regardless of policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppendPolicy {
    /// Only the first approach seen for a body is appended to its list
    #[default]
    FirstOnly,
    /// Every matched approach is appended
    All,
}

impl AppendPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppendPolicy::FirstOnly => "first_only",
            AppendPolicy::All => "all",
        }
    }
}

/// Link with the default `AppendPolicy::FirstOnly`.
pub fn link(bodies: Vec<BodyRecord>, approaches: Vec<ApproachRecord>) -> LinkedSet {
    link_with_policy(bodies, approaches, AppendPolicy::default())
}

/// Link bodies and approaches under the given append policy.
///
/// Resolution uses a designation index built once per call, so each
/// approach costs one hash lookup. When designations repeat, the earliest
/// body wins, which is what a front-to-back scan would pick.
pub fn link_with_policy(
    bodies: Vec<BodyRecord>,
    approaches: Vec<ApproachRecord>,
    policy: AppendPolicy,
) -> LinkedSet {
    let mut stats = LinkStats {
        bodies: bodies.len(),
        approaches: approaches.len(),
        ..LinkStats::default()
    };

    let mut bodies: Vec<Body> = bodies.into_iter().map(Body::from_record).collect();

    let mut index: HashMap<String, BodyId> = HashMap::with_capacity(bodies.len());
    for (i, body) in bodies.iter().enumerate() {
        if index.contains_key(body.designation()) {
            stats.duplicate_designations += 1;
            continue;
        }
        index.insert(body.designation().to_string(), BodyId::new(i));
    }

    // Bodies that already received an approach during this call
    let mut seen: HashSet<BodyId> = HashSet::new();
    let mut linked = Vec::with_capacity(approaches.len());

    for (i, record) in approaches.into_iter().enumerate() {
        let approach_id = ApproachId::new(i);
        let body_id = index.get(record.designation.as_str()).copied();

        match body_id {
            Some(body_id) => {
                stats.linked += 1;
                let append = match policy {
                    AppendPolicy::All => true,
                    AppendPolicy::FirstOnly => seen.insert(body_id),
                };
                if append {
                    bodies[body_id.index()].push_approach(approach_id);
                    stats.appended += 1;
                }
            }
            None => stats.unmatched += 1,
        }

        linked.push(Approach::from_record(record, body_id));
    }

    LinkedSet::new(bodies, linked, stats)
}
