//! Query filters for neodb
//!
//! Builds `Filter` implementations from user criteria. Filters are pure:
//! they read one approach (and its linked body) and return a boolean.
//!
//! - `AttributeFilter` compares one attribute against a bound
//! - `FilterCriteria` + `create_filters` turn optional user criteria into a
//!   list of attribute filters
//! - `predicate` wraps an ad-hoc closure
//! - `limit` caps a result stream

mod attribute;
mod criteria;
mod predicate;

pub use attribute::{AttributeFilter, FilterOp};
pub use criteria::{create_filters, limit, FilterCriteria};
pub use predicate::{predicate, FnFilter};
