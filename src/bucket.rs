//! Buckets of original-sequence positions and the nibble partitioner that
//! fills them.
//!
//! A [`BucketSet`] holds 16 [`Bucket`]s, one per nibble value, built from one
//! pass over a set of candidate positions. Each bucket only holds positions
//! into the key slice, never key values. Buckets are allocated to exactly the
//! size a counting pass reports, so an empty bucket holds no allocation at all
//! while the recursion descends.

use crate::error::{try_vec, Result};
use crate::utils::*;
use crate::RadixKey;
use log::trace;

/// Positions of all keys sharing a nibble value at one digit depth, in their
/// original relative order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bucket {
    positions: Vec<u32>,
}

impl Bucket {
    #[inline]
    fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            positions: try_vec(capacity, "bucket")?,
        })
    }

    #[inline]
    fn push(&mut self, position: u32) {
        debug_assert!(self.positions.len() < self.positions.capacity());
        self.positions.push(position);
    }

    /// Number of positions held.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Reserved capacity. Zero for a bucket that received no positions.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.positions.capacity()
    }

    /// Indices into the key slice, in their original relative order.
    #[inline]
    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    /// Releases the positions without copying them.
    #[inline]
    pub fn into_positions(self) -> Vec<u32> {
        self.positions
    }
}

/// The 16 buckets produced by partitioning one candidate set at one depth.
#[derive(Debug)]
pub struct BucketSet {
    depth: u8,
    buckets: [Bucket; RADIX],
}

impl BucketSet {
    /// Partitions `candidates` (or every index of `keys` when `None`) by the
    /// nibble at `depth`.
    ///
    /// Bucket `b` receives, in their original relative order, every candidate
    /// whose key has `b` as its `depth`-th nibble. If any bucket cannot be
    /// allocated, the buckets already allocated are dropped and the error is
    /// returned.
    ///
    /// ```
    /// use hexsort::bucket::BucketSet;
    ///
    /// let keys: Vec<u32> = vec![0x21, 0x13, 0x01, 0x33];
    /// let set = BucketSet::partition(&keys, None, 1).unwrap();
    ///
    /// assert_eq!(set.buckets()[1].positions(), &[0, 2]);
    /// assert_eq!(set.buckets()[3].positions(), &[1, 3]);
    /// assert_eq!(set.counts().iter().sum::<usize>(), keys.len());
    /// assert_eq!(set.buckets()[0].capacity(), 0);
    /// ```
    pub fn partition<T>(keys: &[T], candidates: Option<&[u32]>, depth: u8) -> Result<Self>
    where
        T: RadixKey,
    {
        let counts = get_counts(keys, candidates, depth);

        Self::fill(keys, candidates, depth, &counts)
    }

    fn fill<T>(
        keys: &[T],
        candidates: Option<&[u32]>,
        depth: u8,
        counts: &[usize; RADIX],
    ) -> Result<Self>
    where
        T: RadixKey,
    {
        trace!(
            "({}) PARTITION: {} candidates into {} buckets",
            depth,
            counts.iter().sum::<usize>(),
            counts.iter().filter(|c| **c > 0).count()
        );

        let mut buckets: [Bucket; RADIX] = Default::default();
        for (bucket, count) in buckets.iter_mut().zip(counts) {
            if *count > 0 {
                *bucket = Bucket::with_capacity(*count)?;
            }
        }

        match candidates {
            Some(positions) => {
                for &p in positions {
                    buckets[keys[p as usize].get_digit(depth)].push(p);
                }
            }
            None => {
                for (i, key) in keys.iter().enumerate() {
                    buckets[key.get_digit(depth)].push(i as u32);
                }
            }
        }

        Ok(Self { depth, buckets })
    }

    /// Partitions the positions held by `parent` at `depth`, consuming it.
    ///
    /// When every position lands in the same nibble the parent's allocation
    /// is moved into that bucket instead of copying it.
    pub fn split<T>(keys: &[T], parent: Bucket, depth: u8) -> Result<Self>
    where
        T: RadixKey,
    {
        let counts = get_counts(keys, Some(parent.positions()), depth);

        if is_homogenous_bucket(&counts) {
            let mut buckets: [Bucket; RADIX] = Default::default();

            if let Some(b) = counts.iter().position(|c| *c > 0) {
                trace!("({}) HOMOGENOUS: {} candidates in bucket {}", depth, parent.len(), b);
                buckets[b] = parent;
            }

            return Ok(Self { depth, buckets });
        }

        Self::fill(keys, Some(parent.positions()), depth, &counts)
    }

    /// The digit depth this set was partitioned at.
    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Total number of positions across all buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    /// Whether every bucket is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }

    /// Number of positions per nibble value, indexed 0..=15.
    #[inline]
    pub fn counts(&self) -> [usize; RADIX] {
        std::array::from_fn(|i| self.buckets[i].len())
    }

    /// The buckets, indexed by nibble value.
    #[inline]
    pub fn buckets(&self) -> &[Bucket; RADIX] {
        &self.buckets
    }

    /// Consumes the set, yielding its buckets in nibble order.
    #[inline]
    pub fn into_buckets(self) -> [Bucket; RADIX] {
        self.buckets
    }
}
