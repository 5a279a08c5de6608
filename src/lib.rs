//! neodb - a deterministic, in-memory database of near-Earth objects
//!
//! Loads NEO and close-approach records, links every approach to its body
//! by designation, and answers lookups and filtered queries.
//!
//! ```ignore
//! use neodb::database::Database;
//! use neodb::extract::{load_approaches, load_neos};
//! use neodb::filters::{create_filters, FilterCriteria};
//!
//! let db = Database::new(load_neos(neo_path)?, load_approaches(cad_path)?);
//! let eros = db.get_by_name("Eros");
//!
//! let filters = create_filters(&FilterCriteria {
//!     hazardous: Some(true),
//!     ..FilterCriteria::default()
//! });
//! for approach in db.query(&filters).take(10) {
//!     println!("{}", approach);
//! }
//! ```

pub mod cli;
pub mod database;
pub mod extract;
pub mod filters;
pub mod link;
pub mod model;
pub mod observability;
pub mod report;
