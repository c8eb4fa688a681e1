use std::cmp::Ordering;

/// A sort implementation under test.
///
/// Implementations take ownership of the input and hand back a new sorted `Vec`, the input
/// allocation is not required to survive.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: Vec<T>) -> Vec<T>
    where
        T: Ord;

    fn sort_by<T, F>(v: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Largest input length the implementation should be tested with.
    ///
    /// Implementations that recurse once per partition level can exhaust the stack of a test
    /// thread on sorted inputs, they lower this.
    fn max_len() -> usize {
        usize::MAX
    }
}

pub mod patterns;
