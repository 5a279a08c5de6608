//! Approach timestamp parsing and formatting
//!
//! Source data uses the compact calendar format `2020-Jan-01 00:00`.
//! Output drops seconds, which the source never carries.

use chrono::NaiveDateTime;

/// Compact calendar-date format used by the close-approach source
pub const APPROACH_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Format used in reports and human-readable output
pub const OUTPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a compact calendar timestamp (`YYYY-Mon-DD hh:mm`).
pub fn parse_approach_time(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), APPROACH_TIME_FORMAT)
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM`.
pub fn format_datetime(time: &NaiveDateTime) -> String {
    time.format(OUTPUT_TIME_FORMAT).to_string()
}
