//! Error types for sorting operations.

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type alias for sorting operations.
pub type Result<T> = std::result::Result<T, SortError>;

/// Error type for sorting operations.
#[derive(Error, Debug)]
pub enum SortError {
    /// A caller-supplied parameter is outside its valid range.
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: &'static str,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// A backing array, position sequence or output array could not be reserved.
    #[error("Failed to allocate {what} ({requested} elements): {source}")]
    AllocationFailure {
        /// What was being allocated
        what: &'static str,
        /// Number of elements requested
        requested: usize,
        /// Underlying reservation error
        #[source]
        source: TryReserveError,
    },

    /// The worker pool could not be built, or a worker did not complete.
    #[error("Parallel sort failed: {0}")]
    ConcurrencyFailure(String),

    /// A sort order flag that is neither ascending nor descending.
    #[error("Unrecognised sort order '{0}' (expected 'a' or 'd')")]
    InvalidSortOrder(String),
}

/// Reserves exactly `len` elements in a new vector, mapping failure to
/// [`SortError::AllocationFailure`].
pub(crate) fn try_vec<T>(len: usize, what: &'static str) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|source| SortError::AllocationFailure {
            what,
            requested: len,
            source,
        })?;

    Ok(v)
}
