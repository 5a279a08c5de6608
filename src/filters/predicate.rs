//! Closure-backed filters

use crate::database::Filter;
use crate::link::ApproachView;

/// A `Filter` backed by a closure. Build with `predicate`.
#[derive(Clone, Copy)]
pub struct FnFilter<F>(F);

/// Wrap a closure as a `Filter`.
///
/// ```ignore
/// let close = predicate(|a: &ApproachView<'_>| a.distance() < 0.05);
/// let results: Vec<_> = db.query(&[close]).collect();
/// ```
pub fn predicate<F>(f: F) -> FnFilter<F>
where
    F: Fn(&ApproachView<'_>) -> bool,
{
    FnFilter(f)
}

impl<F> Filter for FnFilter<F>
where
    F: Fn(&ApproachView<'_>) -> bool,
{
    fn matches(&self, approach: &ApproachView<'_>) -> bool {
        (self.0)(approach)
    }
}
