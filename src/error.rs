//! Error types for the fallible sort entry points.

use thiserror::Error;

/// Result type alias for the fallible sorts.
pub type Result<T> = std::result::Result<T, SortError>;

/// Errors that abort a fallible sort.
///
/// The infallible sorts never produce these, with a broken comparison they return the input in
/// unspecified order instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The comparison function found two elements without an order, e.g. a float NaN.
    #[error("comparison #{comparison} found no ordering between the elements")]
    Incomparable {
        /// 1-based index of the failing comparison.
        comparison: usize,
    },
}
