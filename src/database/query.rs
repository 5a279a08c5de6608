//! Streaming conjunctive query over linked approaches

use std::iter::FusedIterator;
use std::ops::Range;

use crate::link::{ApproachView, LinkedSet};
use crate::model::ApproachId;

/// A pure predicate over one linked approach.
pub trait Filter {
    /// Returns true if the approach satisfies this filter
    fn matches(&self, approach: &ApproachView<'_>) -> bool;
}

impl<T: Filter + ?Sized> Filter for Box<T> {
    fn matches(&self, approach: &ApproachView<'_>) -> bool {
        (**self).matches(approach)
    }
}

impl<T: Filter + ?Sized> Filter for &T {
    fn matches(&self, approach: &ApproachView<'_>) -> bool {
        (**self).matches(approach)
    }
}

/// Lazy result of `Database::query`.
///
/// Single pass and forward only. Each `next()` scans forward until an
/// approach satisfies every filter; dropping the iterator stops the scan.
pub struct Query<'db, 'f, F> {
    set: &'db LinkedSet,
    cursor: Range<usize>,
    filters: &'f [F],
    scanned: usize,
}

impl<'db, 'f, F: Filter> Query<'db, 'f, F> {
    pub(crate) fn new(set: &'db LinkedSet, filters: &'f [F]) -> Self {
        Self {
            set,
            cursor: 0..set.approach_count(),
            filters,
            scanned: 0,
        }
    }

    /// Number of approaches examined so far
    pub fn scanned(&self) -> usize {
        self.scanned
    }
}

impl<'db, F: Filter> Iterator for Query<'db, '_, F> {
    type Item = ApproachView<'db>;

    fn next(&mut self) -> Option<Self::Item> {
        for i in self.cursor.by_ref() {
            self.scanned += 1;
            let view = self.set.approach(ApproachId::new(i));
            // All filters must match (AND semantics)
            if self.filters.iter().all(|f| f.matches(&view)) {
                return Some(view);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.cursor.size_hint().1)
    }
}

impl<F: Filter> FusedIterator for Query<'_, '_, F> {}
