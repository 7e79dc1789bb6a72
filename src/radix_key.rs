use std::fmt::Debug;

/// Highest digit depth any key can be sorted on: 16 nibbles of a 64-bit word.
pub const MAX_DIGITS: u8 = 16;

/// A fixed-width unsigned integer that can be split into base-16 digits.
///
/// Digit depth 1 is the least significant nibble. Keys are widened to 64 bits
/// before extraction, so asking a narrow key for a digit above its width
/// yields 0 rather than overflowing the shift.
pub trait RadixKey: Copy + Default + Debug + Send + Sync {
    /// Number of nibbles in the type.
    const DIGITS: u8;

    fn to_u64(&self) -> u64;

    #[inline]
    fn get_digit(&self, depth: u8) -> usize {
        debug_assert!((1..=MAX_DIGITS).contains(&depth));
        ((self.to_u64() >> ((depth as u32 - 1) * 4)) & 0xF) as usize
    }
}

impl RadixKey for u8 {
    const DIGITS: u8 = 2;

    #[inline]
    fn to_u64(&self) -> u64 {
        *self as u64
    }
}

impl RadixKey for u16 {
    const DIGITS: u8 = 4;

    #[inline]
    fn to_u64(&self) -> u64 {
        *self as u64
    }
}

impl RadixKey for u32 {
    const DIGITS: u8 = 8;

    #[inline]
    fn to_u64(&self) -> u64 {
        *self as u64
    }
}

impl RadixKey for u64 {
    const DIGITS: u8 = 16;

    #[inline]
    fn to_u64(&self) -> u64 {
        *self
    }
}

#[cfg(target_pointer_width = "16")]
impl RadixKey for usize {
    const DIGITS: u8 = 4;

    #[inline]
    fn to_u64(&self) -> u64 {
        *self as u64
    }
}

#[cfg(target_pointer_width = "32")]
impl RadixKey for usize {
    const DIGITS: u8 = 8;

    #[inline]
    fn to_u64(&self) -> u64 {
        *self as u64
    }
}

#[cfg(target_pointer_width = "64")]
impl RadixKey for usize {
    const DIGITS: u8 = 16;

    #[inline]
    fn to_u64(&self) -> u64 {
        *self as u64
    }
}

#[cfg(test)]
mod tests {
    use crate::RadixKey;

    #[test]
    pub fn test_get_digit_least_significant_first() {
        let v = 0xFEDC_BA98_7654_3210u64;

        for depth in 1..=16u8 {
            assert_eq!(v.get_digit(depth), (depth - 1) as usize);
        }
    }

    #[test]
    pub fn test_narrow_keys_have_zero_high_digits() {
        assert_eq!(0xABu8.get_digit(1), 0xB);
        assert_eq!(0xABu8.get_digit(2), 0xA);
        assert_eq!(0xABu8.get_digit(3), 0);
        assert_eq!(0xFFFFu16.get_digit(16), 0);
        assert_eq!(u32::MAX.get_digit(9), 0);
    }
}
