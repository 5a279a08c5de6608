//! In-memory NEO database
//!
//! Owns the linked collections and answers:
//!
//! - `get_by_designation(designation)` - exact primary-key lookup
//! - `get_by_name(name)` - exact name lookup, never matches `None` or `""`
//! - `query(filters)` - lazy conjunctive filter over all approaches
//!
//! # Invariants
//!
//! - Built once, immutable afterwards
//! - Every body is reachable by designation
//! - Only named bodies are reachable by name
//! - `query` yields approaches in storage order and caches nothing

mod database;
mod query;

pub use database::{Database, DatabaseStats};
pub use query::{Filter, Query};
