//! # hexsort
//!
//! hexsort is a native Rust implementation of a position-tracking, base-16 radix sort for
//! unsigned integers.
//!
//! Rather than moving keys between buckets, hexsort only records the *positions* of keys in the
//! input. The input is partitioned by its most significant requested nibble, each bucket is
//! partitioned again by the next nibble down, and so on until every bucket is resolved. Keys
//! are copied exactly once, into a newly allocated output, when the final position order is
//! known. The input is never modified.
//!
//! ## Usage
//!
//! In the simplest case, call `my_vec.radix_sorted()` to get a sorted copy:
//!
//! ```
//! use hexsort::RadixSort;
//!
//! let values: Vec<u64> = vec![55, 22, 73, 4, 89, 0, 100, 3];
//! let sorted = values.radix_sorted().unwrap();
//!
//! assert_eq!(sorted, vec![0, 3, 4, 22, 55, 73, 89, 100]);
//! ```
//!
//! For more control, use the builder:
//!
//! ```
//! use hexsort::RadixSort;
//!
//! let values: Vec<u32> = vec![0x5, 0x3, 0x3, 0x9, 0x1];
//! let sorted = values
//!     .radix_sort_builder()
//!     .with_max_digit(1)
//!     .descending()
//!     .with_parallel(false)
//!     .sort()
//!     .unwrap();
//!
//! assert_eq!(sorted, vec![9, 5, 3, 3, 1]);
//! ```
//!
//! Or call the drivers directly with [`sort`] and [`sort_parallel`].
//!
//! The partitioning step is exposed on its own in [`bucket`], for callers that only need the
//! position sequences.
//!
//! ## Digit depth
//!
//! Digit depth 1 is the least significant nibble of a key and depth 16 is the most significant
//! nibble of a 64-bit key. Sorting considers depths `max_digit` down to 1; any bits above
//! `max_digit` are ignored, so equal lower digits keep their original order. When unsure, use
//! `with_auto_digits()` or [`required_digits`].
//!
//! ## Ordering
//!
//! Ascending output is stable. Descending output is the exact reverse of ascending output, so
//! equal keys appear in reverse of their original order.
//!
//! ## Features
//!
//!  * `multi-threaded` (default): enables [`sort_parallel`] and parallel execution in the
//!    builder, backed by `rayon`. Without it every sort runs on the calling thread.
//!
//! ## Logging
//!
//! hexsort logs through the `log` facade: `debug` for each sort call, `trace` for every
//! partition pass and `warn` for coerced sort orders. Install any `log` compatible logger to
//! see them.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, (<http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license (<http://opensource.org/licenses/MIT>)
//!
//! at your option.
//!
//! ### Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.

#[cfg(test)]
mod tests;

pub mod bucket;
mod display;
mod error;
mod radix_key;
mod radix_sort;
mod radix_sort_builder;
mod sort_order;
mod sorter;
mod sorts;
mod utils;

pub use display::{head_tail, HEAD_TAIL_LEN};
pub use error::{Result, SortError};
pub use radix_key::{RadixKey, MAX_DIGITS};
pub use radix_sort::RadixSort;
pub use radix_sort_builder::RadixSortBuilder;
pub use sort_order::SortOrder;
pub use sorter::Sorter;
pub use utils::required_digits;

/// Sorts `keys` on a single thread, considering digits `max_digit` down to 1.
///
/// Returns a new vector; `keys` is left untouched. Fails with
/// [`SortError::InvalidParameter`] when `max_digit` is outside `1..=16` or
/// the input cannot be indexed with 32-bit positions, and with
/// [`SortError::AllocationFailure`] when any buffer cannot be reserved.
///
/// ```
/// use hexsort::{sort, SortOrder};
///
/// assert_eq!(sort(&[5u64, 3, 3, 9, 1], 1, SortOrder::Ascending).unwrap(), vec![1, 3, 3, 5, 9]);
/// assert!(sort(&[1u64], 0, SortOrder::Ascending).is_err());
/// ```
pub fn sort<T>(keys: &[T], max_digit: u8, order: SortOrder) -> Result<Vec<T>>
where
    T: RadixKey,
{
    Sorter::new(max_digit, order, false, None).sort(keys)
}

/// Sorts `keys` with one rayon task per non-empty top-level bucket.
///
/// Produces exactly the same output as [`sort`]. Additionally fails with
/// [`SortError::ConcurrencyFailure`] when a worker does not complete.
///
/// ```
/// use hexsort::{sort_parallel, SortOrder};
///
/// assert_eq!(
///     sort_parallel(&[5u64, 3, 3, 9, 1], 1, SortOrder::Descending).unwrap(),
///     vec![9, 5, 3, 3, 1]
/// );
/// ```
#[cfg(feature = "multi-threaded")]
pub fn sort_parallel<T>(keys: &[T], max_digit: u8, order: SortOrder) -> Result<Vec<T>>
where
    T: RadixKey,
{
    Sorter::new(max_digit, order, true, None).sort(keys)
}
