//! Linked collections and borrowed views over them

use std::fmt;
use std::ops::Deref;

use serde_json::{Map, Value};

use crate::model::{Approach, ApproachId, Body, BodyId};

/// Counters gathered while linking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Body records received
    pub bodies: usize,
    /// Approach records received
    pub approaches: usize,
    /// Approaches whose designation resolved to a body
    pub linked: usize,
    /// Approaches whose designation matched no body
    pub unmatched: usize,
    /// Approaches recorded in a body's approach list
    pub appended: usize,
    /// Bodies shadowed by an earlier body with the same designation
    pub duplicate_designations: usize,
}

/// Output of the linker: bodies and approaches with cross references filled in.
///
/// Storage order is input order for both collections.
#[derive(Debug, Clone, Default)]
pub struct LinkedSet {
    bodies: Vec<Body>,
    approaches: Vec<Approach>,
    stats: LinkStats,
}

impl LinkedSet {
    pub(crate) fn new(bodies: Vec<Body>, approaches: Vec<Approach>, stats: LinkStats) -> Self {
        Self {
            bodies,
            approaches,
            stats,
        }
    }

    pub fn stats(&self) -> &LinkStats {
        &self.stats
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }

    /// Resolve a body handle issued by this set
    pub fn body(&self, id: BodyId) -> BodyView<'_> {
        BodyView {
            set: self,
            id,
            entity: &self.bodies[id.index()],
        }
    }

    /// Resolve an approach handle issued by this set
    pub fn approach(&self, id: ApproachId) -> ApproachView<'_> {
        ApproachView {
            set: self,
            id,
            entity: &self.approaches[id.index()],
        }
    }

    /// All bodies in storage order
    pub fn bodies(&self) -> impl Iterator<Item = BodyView<'_>> {
        (0..self.bodies.len()).map(move |i| self.body(BodyId::new(i)))
    }

    /// All approaches in storage order, linked or not
    pub fn approaches(&self) -> impl Iterator<Item = ApproachView<'_>> {
        (0..self.approaches.len()).map(move |i| self.approach(ApproachId::new(i)))
    }
}

/// A body together with the set it lives in.
///
/// Derefs to `Body`.
#[derive(Debug, Clone, Copy)]
pub struct BodyView<'a> {
    set: &'a LinkedSet,
    id: BodyId,
    entity: &'a Body,
}

impl<'a> BodyView<'a> {
    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn entity(&self) -> &'a Body {
        self.entity
    }

    /// Approaches recorded in this body's approach list
    pub fn approaches(&self) -> impl Iterator<Item = ApproachView<'a>> + 'a {
        let set = self.set;
        self.entity
            .approach_ids()
            .iter()
            .map(move |&id| set.approach(id))
    }

    pub fn approach_count(&self) -> usize {
        self.entity.approach_ids().len()
    }
}

impl Deref for BodyView<'_> {
    type Target = Body;

    fn deref(&self) -> &Body {
        self.entity
    }
}

impl PartialEq for BodyView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.set, other.set) && self.id == other.id
    }
}

impl fmt::Display for BodyView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.entity, f)
    }
}

/// An approach together with the set it lives in.
///
/// Derefs to `Approach`; `body()` follows the back-reference.
#[derive(Debug, Clone, Copy)]
pub struct ApproachView<'a> {
    set: &'a LinkedSet,
    id: ApproachId,
    entity: &'a Approach,
}

impl<'a> ApproachView<'a> {
    pub fn id(&self) -> ApproachId {
        self.id
    }

    pub fn entity(&self) -> &'a Approach {
        self.entity
    }

    /// The linked body, `None` when the designation matched nothing
    pub fn body(&self) -> Option<BodyView<'a>> {
        let set = self.set;
        self.entity.body_id().map(|id| set.body(id))
    }

    /// Flat field map with the linked body nested under `neo`
    pub fn to_record(&self) -> Map<String, Value> {
        self.entity.to_record(self.body().map(|b| b.entity()))
    }
}

impl Deref for ApproachView<'_> {
    type Target = Approach;

    fn deref(&self) -> &Approach {
        self.entity
    }
}

impl PartialEq for ApproachView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.set, other.set) && self.id == other.id
    }
}

impl fmt::Display for ApproachView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neo = match self.body() {
            Some(body) => body.fullname(),
            None => self.entity.designation().to_string(),
        };
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.entity.time_str(),
            neo,
            self.entity.distance(),
            self.entity.velocity()
        )
    }
}
