//! Recursive first-pivot quicksort.
//!
//! Each call takes the first element as pivot, moves every element strictly less than the pivot
//! into a new left `Vec`, everything else into a new right `Vec`, and returns
//! `sort(left) ++ [pivot] ++ sort(right)`.
//!
//! The pivot rule is fixed, so sorted, reverse sorted and all-equal inputs take *O*(*n*^2)
//! comparisons and recurse *n* levels deep. Large inputs of that shape can overflow the call
//! stack, [`crate::work_stack`] runs the same algorithm without recursion.

use std::cmp::Ordering;

use crate::partition::partition_first;

// Keeps the recursion depth of sorted test inputs well inside the default test thread stack.
sort_impl!("pivot_sort_recursive", max_len = 2_048);

/// Sorts `v` in ascending order, preserving the order of equal elements.
///
/// `v` is consumed, the result is a new `Vec`.
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
///
/// The key is recomputed on every comparison.
#[inline]
pub fn sort_by_key<T, K, F>(v: Vec<T>, mut f: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    quicksort(v, &mut |a: &T, b: &T| f(a).lt(&f(b)))
}

/// Returns a sorted copy of `v`, leaving `v` untouched.
pub fn sort_slice<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sort(v.to_vec())
}

/// Returns a copy of `v` sorted with a comparator function, leaving `v` untouched.
pub fn sort_slice_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by(v.to_vec(), compare)
}

fn quicksort<T, F>(v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return v;
    }

    let len = v.len();
    // Unreachable, only empty inputs have no pivot and those returned above.
    let Some((pivot, left, right)) = partition_first(v, is_less) else {
        return Vec::new();
    };

    let mut sorted = quicksort(left, is_less);
    sorted.reserve_exact(len - sorted.len());
    sorted.push(pivot);
    sorted.extend(quicksort(right, is_less));

    sorted
}
