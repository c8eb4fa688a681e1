//! Stable quicksort that always picks the first element as its pivot.
//!
//! Every sort in this crate takes the input `Vec` by value and returns a new sorted `Vec`, so the
//! caller's sequence is consumed by the call. Use [`recursive::sort_slice`] to keep the original.

macro_rules! sort_impl {
    ($name:expr, max_len = $max_len:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: Vec<T>) -> Vec<T>
            where
                T: Ord,
            {
                sort(v)
            }

            #[inline]
            fn sort_by<T, F>(v: Vec<T>, compare: F) -> Vec<T>
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(v, compare)
            }

            fn max_len() -> usize {
                $max_len
            }
        }
    };
    ($name:expr) => {
        sort_impl!($name, max_len = usize::MAX);
    };
}

mod error;

pub mod partial;
pub mod partition;
pub mod recursive;
pub mod work_stack;

pub use error::{Result, SortError};
