use crate::error::{Result, SortError};
use crate::radix_key::MAX_DIGITS;
use crate::RadixKey;

pub const RADIX: usize = 16;

/// Counts how many candidates fall into each nibble bucket at `depth`.
///
/// `None` counts every index of `keys`.
#[inline]
pub fn get_counts<T>(keys: &[T], candidates: Option<&[u32]>, depth: u8) -> [usize; RADIX]
where
    T: RadixKey,
{
    match candidates {
        Some(positions) => count_digits(positions.iter().map(|p| &keys[*p as usize]), depth),
        None => count_digits(keys.iter(), depth),
    }
}

#[inline]
fn count_digits<'a, T, I>(mut iter: I, depth: u8) -> [usize; RADIX]
where
    T: RadixKey + 'a,
    I: Iterator<Item = &'a T>,
{
    // Two interleaved tables so that runs of equal digits do not serialize
    // on the same counter.
    let mut counts_1 = [0usize; RADIX];
    let mut counts_2 = [0usize; RADIX];

    while let Some(a) = iter.next() {
        counts_1[a.get_digit(depth)] += 1;

        if let Some(b) = iter.next() {
            counts_2[b.get_digit(depth)] += 1;
        }
    }

    for i in 0..RADIX {
        counts_1[i] += counts_2[i];
    }

    counts_1
}

#[inline]
pub fn is_homogenous_bucket(counts: &[usize; RADIX]) -> bool {
    counts.iter().filter(|c| **c > 0).count() <= 1
}

/// Mask selecting the nibbles at depths `1..=max_digit`.
#[inline]
pub const fn digit_mask(max_digit: u8) -> u64 {
    if max_digit >= MAX_DIGITS {
        u64::MAX
    } else {
        (1u64 << (max_digit as u32 * 4)) - 1
    }
}

/// Whether the keys are already in non-decreasing order when only the digits
/// up to `max_digit` are considered. For such input the stable position
/// sequence is the identity.
pub fn is_sorted_within<T>(keys: &[T], max_digit: u8) -> bool
where
    T: RadixKey,
{
    let mask = digit_mask(max_digit);

    keys.windows(2)
        .all(|w| (w[0].to_u64() & mask) <= (w[1].to_u64() & mask))
}

/// Smallest digit depth that covers every key, at least 1.
///
/// ```
/// use hexsort::required_digits;
///
/// assert_eq!(required_digits(&[0u64, 0xF]), 1);
/// assert_eq!(required_digits(&[0x10u64, 3]), 2);
/// assert_eq!(required_digits::<u32>(&[]), 1);
/// ```
pub fn required_digits<T>(keys: &[T]) -> u8
where
    T: RadixKey,
{
    let max = keys.iter().map(|k| k.to_u64()).max().unwrap_or(0);
    let bits = u64::BITS - max.leading_zeros();

    bits.div_ceil(4).max(1) as u8
}

pub fn validate_max_digit(max_digit: u8) -> Result<()> {
    if max_digit == 0 || max_digit > MAX_DIGITS {
        return Err(SortError::InvalidParameter {
            parameter: "max_digit",
            reason: format!("must be between 1 and {}, got {}", MAX_DIGITS, max_digit),
        });
    }

    Ok(())
}

/// Positions are stored as `u32`, so inputs must be indexable in 32 bits.
pub fn validate_len(len: usize) -> Result<()> {
    if len > u32::MAX as usize {
        return Err(SortError::InvalidParameter {
            parameter: "keys",
            reason: format!(
                "length {} exceeds the maximum of {} positions",
                len,
                u32::MAX
            ),
        });
    }

    Ok(())
}
