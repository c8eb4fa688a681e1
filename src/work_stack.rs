//! First-pivot quicksort driven by an explicit work stack.
//!
//! Produces the same output as [`crate::recursive`] and makes the same comparisons in the same
//! order, but keeps pending partitions in a heap allocated stack. The call stack stays flat no
//! matter how unbalanced the partitions get, the heap holds at most one pending task per element.

use std::cmp::Ordering;
use std::convert::Infallible;

use log::trace;

use crate::partition::try_partition_first;

const SORT_NAME: &str = "pivot_sort_work_stack";

sort_impl!(SORT_NAME);

/// Sorts `v` in ascending order, preserving the order of equal elements.
#[inline]
pub fn sort<T>(v: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b))
}

/// Sorts `v` with a comparator function, preserving the order of equal elements.
///
/// Only `Ordering::Less` moves an element in front of the pivot. If `compare` does not implement
/// a total order the result is an unspecified permutation of `v`.
#[inline]
pub fn sort_by<T, F>(v: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less)
}

/// Sorts `v` by the key `f` extracts, preserving the order of equal elements.
#[inline]
pub fn sort_by_key<T, K, F>(v: Vec<T>, mut f: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    quicksort(v, &mut |a: &T, b: &T| f(a).lt(&f(b)))
}

fn quicksort<T, F>(v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let res = try_quicksort(v, &mut |a: &T, b: &T| Ok::<_, Infallible>(is_less(a, b)));

    match res {
        Ok(sorted) => sorted,
        Err(never) => match never {},
    }
}

enum Task<T> {
    Sort(Vec<T>),
    Emit(T),
}

/// Sorts `v`, aborting at the first comparison that returns an error.
pub(crate) fn try_quicksort<T, E, F>(v: Vec<T>, is_less: &mut F) -> Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let len = v.len();
    if len <= 1 {
        return Ok(v);
    }

    trace!("{SORT_NAME}: sorting {len} elements");

    let mut sorted = Vec::with_capacity(len);
    let mut tasks = vec![Task::Sort(v)];
    let mut peak_tasks = tasks.len();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Emit(pivot) => sorted.push(pivot),
            Task::Sort(v) if v.len() <= 1 => sorted.extend(v),
            Task::Sort(v) => {
                let Some((pivot, left, right)) = try_partition_first(v, is_less)? else {
                    continue;
                };

                // Popped in reverse, left is sorted and emitted before the pivot and right.
                if !right.is_empty() {
                    tasks.push(Task::Sort(right));
                }
                tasks.push(Task::Emit(pivot));
                if !left.is_empty() {
                    tasks.push(Task::Sort(left));
                }

                peak_tasks = peak_tasks.max(tasks.len());
            }
        }
    }

    trace!("{SORT_NAME}: sorted {len} elements, peak of {peak_tasks} pending tasks");

    Ok(sorted)
}
