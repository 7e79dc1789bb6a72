//! `recursive_merge` turns a partitioned [`BucketSet`] into a flat, ordered
//! sequence of original positions.
//!
//! Buckets are visited in ascending nibble order. Each bucket holding more
//! than one position is split again at the next finer digit and merged
//! recursively, until the positions are fully resolved at digit 1. A bucket
//! holding a single position needs no further work and is appended
//! directly.
//!
//! Every child set is owned by the frame that split it and dropped as soon as
//! its positions have been appended, so at most one set per digit is alive at
//! any time along the current path.
//!
//! ## Characteristics
//!
//!  * out-of-place (positions only)
//!  * single-threaded
//!  * stable
//!  * msb-first

use crate::bucket::{Bucket, BucketSet};
use crate::error::Result;
use crate::RadixKey;

/// Appends the fully resolved positions of every bucket in `set` to `out`.
///
/// `out` grows by exactly `set.len()` entries. Callers should reserve that
/// capacity up front so that appending never reallocates.
pub fn merge_positions<T>(keys: &[T], set: BucketSet, out: &mut Vec<u32>) -> Result<()>
where
    T: RadixKey,
{
    let depth = set.depth();

    #[cfg(debug_assertions)]
    let expected = out.len() + set.len();

    for bucket in set.into_buckets() {
        resolve_bucket(keys, bucket, depth, out)?;
    }

    #[cfg(debug_assertions)]
    debug_assert_eq!(out.len(), expected);

    Ok(())
}

/// Appends the positions of one bucket, partitioned at `depth`, in sorted
/// order.
#[inline]
pub fn resolve_bucket<T>(keys: &[T], bucket: Bucket, depth: u8, out: &mut Vec<u32>) -> Result<()>
where
    T: RadixKey,
{
    match bucket.len() {
        0 => {}
        1 => out.push(bucket.positions()[0]),
        _ if depth > 1 => {
            let child = BucketSet::split(keys, bucket, depth - 1)?;
            merge_positions(keys, child, out)?;
        }
        // No finer digit remains, so these keys are equal and already in
        // their original order.
        _ => out.extend_from_slice(bucket.positions()),
    }

    Ok(())
}
