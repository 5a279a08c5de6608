//! Record loader for neodb
//!
//! Reads the two source files into plain, unlinked records:
//!
//! - NEO CSV (`pdes`, `name`, `diameter`, `pha` columns) -> `BodyRecord`
//! - Close-approach JSON (`fields` + `data` rows) -> `ApproachRecord`
//!
//! Missing-value sentinels are normalized here so the core never sees them:
//! empty diameter -> `NaN`, empty name -> `None`, `pha` `Y`/`y` -> `true`.

mod approaches;
mod errors;
mod neos;

pub use approaches::{load_approaches, read_approaches};
pub use errors::{LoadError, LoadResult};
pub use neos::{load_neos, read_neos};
