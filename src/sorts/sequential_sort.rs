//! `sequential_sort` is the single-threaded driver. It partitions the whole
//! input once at the top digit, merges the resulting buckets into one
//! position sequence and only then copies key values into a new output.
//!
//! Descending output is produced by walking the ascending position sequence
//! backwards, so it is always the exact reverse of the ascending output.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * stable (ascending)
//!  * msb-first

use crate::bucket::BucketSet;
use crate::error::{try_vec, Result};
use crate::sorts::recursive_merge::merge_positions;
use crate::utils::*;
use crate::{RadixKey, SortOrder};
use log::trace;

pub fn sequential_sort<T>(keys: &[T], max_digit: u8, order: SortOrder) -> Result<Vec<T>>
where
    T: RadixKey,
{
    validate_max_digit(max_digit)?;
    validate_len(keys.len())?;

    let positions = sort_positions(keys, max_digit)?;

    materialize(keys, &positions, order)
}

/// Builds the ascending position sequence for `keys` considering digits
/// `1..=max_digit`.
pub fn sort_positions<T>(keys: &[T], max_digit: u8) -> Result<Vec<u32>>
where
    T: RadixKey,
{
    if is_sorted_within(keys, max_digit) {
        trace!("({}) ALREADY_SORTED: {} keys", max_digit, keys.len());
        return identity_positions(keys.len());
    }

    let mut positions = try_vec(keys.len(), "position sequence")?;
    let top = BucketSet::partition(keys, None, max_digit)?;
    merge_positions(keys, top, &mut positions)?;

    debug_assert_eq!(positions.len(), keys.len());

    Ok(positions)
}

/// The position sequence of input that is already in order.
pub fn identity_positions(len: usize) -> Result<Vec<u32>> {
    let mut positions = try_vec(len, "position sequence")?;
    positions.extend(0..len as u32);

    Ok(positions)
}

/// Copies keys into a new vector in position order, or in reverse position
/// order for descending output.
pub fn materialize<T>(keys: &[T], positions: &[u32], order: SortOrder) -> Result<Vec<T>>
where
    T: RadixKey,
{
    let mut output = try_vec(positions.len(), "output sequence")?;

    match order {
        SortOrder::Ascending => output.extend(positions.iter().map(|p| keys[*p as usize])),
        SortOrder::Descending => output.extend(positions.iter().rev().map(|p| keys[*p as usize])),
    }

    Ok(output)
}
