//! Observability for neodb
//!
//! Structured JSON-line logging of lifecycle events. Logging is read-only
//! with respect to the database and never fails the caller.
//!
//! ```ignore
//! use neodb::observability::{log_event_with_fields, Event, ObservationScope};
//!
//! let scope = ObservationScope::with_fields("LOAD_NEOS", &[("path", "data/neos.csv")]);
//! // ... read ...
//! scope.complete(&[("records", "23967")]);
//!
//! log_event_with_fields(Event::DatabaseReady, &[("bodies", "23967")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

use crate::database::DatabaseStats;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_warning() {
        Severity::Warn
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

/// Log the outcome of database construction, warning on absorbed
/// inconsistencies.
pub fn log_database_ready(stats: &DatabaseStats) {
    let link = &stats.link;

    log_event_with_fields(
        Event::LinkComplete,
        &[
            ("appended", &link.appended.to_string()),
            ("linked", &link.linked.to_string()),
            ("policy", stats.policy.as_str()),
        ],
    );

    if link.unmatched > 0 {
        log_event_with_fields(
            Event::UnmatchedApproaches,
            &[("count", &link.unmatched.to_string())],
        );
    }

    if link.duplicate_designations > 0 {
        log_event_with_fields(
            Event::DuplicateDesignations,
            &[("count", &link.duplicate_designations.to_string())],
        );
    }

    log_event_with_fields(
        Event::DatabaseReady,
        &[
            ("approaches", &stats.approaches.to_string()),
            ("bodies", &stats.bodies.to_string()),
            ("named_bodies", &stats.named_bodies.to_string()),
        ],
    );
}
