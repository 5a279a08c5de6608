//! Observable events in neodb

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration resolved
    ConfigLoaded,

    // Loading
    /// NEO records read
    NeosLoaded,
    /// Close-approach records read
    ApproachesLoaded,

    // Linking
    /// Linking finished
    LinkComplete,
    /// Some approaches matched no body
    UnmatchedApproaches,
    /// Some bodies share a designation with an earlier body
    DuplicateDesignations,
    /// Database indexes built, ready for queries
    DatabaseReady,

    // Queries
    /// Lookup by designation or name
    LookupComplete,
    /// Filtered query drained
    QueryComplete,

    // Output
    /// Report file written
    ReportWritten,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::NeosLoaded => "NEOS_LOADED",
            Event::ApproachesLoaded => "APPROACHES_LOADED",
            Event::LinkComplete => "LINK_COMPLETE",
            Event::UnmatchedApproaches => "UNMATCHED_APPROACHES",
            Event::DuplicateDesignations => "DUPLICATE_DESIGNATIONS",
            Event::DatabaseReady => "DATABASE_READY",
            Event::LookupComplete => "LOOKUP_COMPLETE",
            Event::QueryComplete => "QUERY_COMPLETE",
            Event::ReportWritten => "REPORT_WRITTEN",
        }
    }

    /// Events that flag absorbed input inconsistencies
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Event::UnmatchedApproaches | Event::DuplicateDesignations
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
