//! `parallel_sort` is the multi-threaded driver. The input is partitioned
//! once at the top digit on the calling thread. Every non-empty top-level
//! bucket then becomes an independent rayon task which resolves that
//! bucket's positions into its own private sequence, at most 16 tasks in
//! total.
//!
//! Once every task has joined, the output is split into disjoint chunks sized
//! by the per-bucket sequences and each chunk is filled with key values in
//! parallel. Ascending output takes buckets 0..15 in order. Descending output
//! takes buckets 15..0 and walks each bucket's sequence backwards, which is
//! the exact reverse of the ascending output.
//!
//! Workers only read the shared key slice and write into their own buffers,
//! so nothing beyond the join needs synchronization.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * multi-threaded
//!  * stable (ascending)
//!  * msb-first

use crate::bucket::{Bucket, BucketSet};
use crate::error::{try_vec, Result, SortError};
use crate::sorts::recursive_merge::resolve_bucket;
use crate::sorts::sequential_sort::{identity_positions, materialize};
use crate::utils::*;
use crate::{RadixKey, SortOrder};
use arbitrary_chunks::ArbitraryChunks;
use log::trace;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Sorts `keys` on the given pool, or on the global rayon pool when `pool`
/// is `None`.
pub fn parallel_sort<T>(
    keys: &[T],
    max_digit: u8,
    order: SortOrder,
    pool: Option<&ThreadPool>,
) -> Result<Vec<T>>
where
    T: RadixKey,
{
    validate_max_digit(max_digit)?;
    validate_len(keys.len())?;

    if is_sorted_within(keys, max_digit) {
        trace!("({}) ALREADY_SORTED: {} keys", max_digit, keys.len());
        return materialize(keys, &identity_positions(keys.len())?, order);
    }

    let top = BucketSet::partition(keys, None, max_digit)?;
    let run = move || fan_out(keys, top, order);

    let joined = match pool {
        Some(pool) => catch_unwind(AssertUnwindSafe(|| pool.install(run))),
        None => catch_unwind(AssertUnwindSafe(run)),
    };

    joined.map_err(|panic| SortError::ConcurrencyFailure(panic_message(panic)))?
}

fn fan_out<T>(keys: &[T], top: BucketSet, order: SortOrder) -> Result<Vec<T>>
where
    T: RadixKey,
{
    let depth = top.depth();
    let buckets: Vec<Bucket> = top
        .into_buckets()
        .into_iter()
        .filter(|b| !b.is_empty())
        .collect();

    trace!(
        "({}) FAN_OUT: {} workers on {} threads",
        depth,
        buckets.len(),
        rayon::current_num_threads()
    );

    let mut sequences: Vec<Vec<u32>> = buckets
        .into_par_iter()
        .map(|bucket| bucket_worker(keys, bucket, depth))
        .collect::<Result<Vec<Vec<u32>>>>()?;

    if order.is_descending() {
        sequences.reverse();
    }

    let lens: Vec<usize> = sequences.iter().map(Vec::len).collect();
    let mut output = try_vec(keys.len(), "output sequence")?;
    output.resize(keys.len(), T::default());

    let chunks: Vec<&mut [T]> = output.arbitrary_chunks_mut(&lens).collect();

    chunks
        .into_par_iter()
        .zip(sequences.par_iter())
        .for_each(|(chunk, positions)| match order {
            SortOrder::Ascending => emit(keys, chunk, positions.iter()),
            SortOrder::Descending => emit(keys, chunk, positions.iter().rev()),
        });

    Ok(output)
}

/// Resolves one top-level bucket into its own ascending position sequence.
fn bucket_worker<T>(keys: &[T], bucket: Bucket, depth: u8) -> Result<Vec<u32>>
where
    T: RadixKey,
{
    if bucket.len() == 1 || depth == 1 {
        return Ok(bucket.into_positions());
    }

    let mut positions = try_vec(bucket.len(), "bucket position sequence")?;
    resolve_bucket(keys, bucket, depth, &mut positions)?;

    Ok(positions)
}

#[inline]
fn emit<'a, T, I>(keys: &[T], chunk: &mut [T], positions: I)
where
    T: RadixKey,
    I: Iterator<Item = &'a u32>,
{
    for (slot, p) in chunk.iter_mut().zip(positions) {
        *slot = keys[*p as usize];
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("worker panicked: {}", s)
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("worker panicked: {}", s)
    } else {
        "worker panicked".to_string()
    }
}
