//! Sorting of values that are only partially ordered, like floats.
//!
//! The infallible sorts treat a missing order like any other broken comparison and return an
//! unspecified permutation. These entry points stop instead and report the comparison that had no
//! answer. They run on [`crate::work_stack`], so the result order is the one the other sorts give
//! for a total order.

use std::cmp::Ordering;

use log::debug;

use crate::error::{Result, SortError};
use crate::work_stack::try_quicksort;

/// Sorts `v` by `PartialOrd`, preserving the order of equal elements.
///
/// Fails with [`SortError::Incomparable`] as soon as two elements have no order, e.g. if `v`
/// holds a NaN and at least one other element. `v` is consumed either way.
pub fn try_sort<T>(v: Vec<T>) -> Result<Vec<T>>
where
    T: PartialOrd,
{
    try_sort_by(v, |a, b| a.partial_cmp(b))
}

/// Sorts `v` with a comparator that may find no order between two elements.
pub fn try_sort_by<T, F>(v: Vec<T>, mut compare: F) -> Result<Vec<T>>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    let mut comparisons = 0;

    try_quicksort(v, &mut |a: &T, b: &T| {
        comparisons += 1;

        match compare(a, b) {
            Some(ordering) => Ok(ordering == Ordering::Less),
            None => Err(SortError::Incomparable {
                comparison: comparisons,
            }),
        }
    })
    .map_err(|err| {
        debug!("aborted sort: {err}");
        err
    })
}
