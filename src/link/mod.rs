//! Linker subsystem for neodb
//!
//! Joins close-approach records to body records by designation and produces
//! a fully cross-referenced `LinkedSet`.
//!
//! # Linking rules
//!
//! 1. The first body in input order owns a designation
//! 2. Every approach whose designation resolves gets a body reference
//! 3. Body approach lists are populated per `AppendPolicy`
//! 4. Bodies without approaches are kept, with an empty list
//! 5. Approaches without a body are kept, unlinked, in input order
//!
//! Linking never fails. Inconsistent input is absorbed and counted in
//! `LinkStats`.

mod linker;
mod set;

pub use linker::{link, link_with_policy, AppendPolicy};
pub use set::{ApproachView, BodyView, LinkStats, LinkedSet};
