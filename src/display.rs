//! Human-readable summaries of key sequences.

use crate::RadixKey;
use log::warn;

/// Number of elements shown from each end by [`head_tail`].
pub const HEAD_TAIL_LEN: usize = 4;

/// Renders the first and last four keys as `value(0xhex)`, separated by `::`.
///
/// Returns `None`, after logging a warning, when there are fewer than eight
/// keys.
///
/// ```
/// use hexsort::head_tail;
///
/// let keys: Vec<u64> = (1..=10).collect();
/// assert_eq!(
///     head_tail(&keys).unwrap(),
///     "1(0x1)  2(0x2)  3(0x3)  4(0x4)  ::  7(0x7)  8(0x8)  9(0x9)  10(0xa)"
/// );
/// assert!(head_tail(&keys[..7]).is_none());
/// ```
pub fn head_tail<T>(keys: &[T]) -> Option<String>
where
    T: RadixKey,
{
    if keys.len() < HEAD_TAIL_LEN * 2 {
        warn!(
            "Sequence of {} keys is too short to show head and tail, need at least {}",
            keys.len(),
            HEAD_TAIL_LEN * 2
        );
        return None;
    }

    let render = |ks: &[T]| {
        ks.iter()
            .map(|k| format!("{}({:#x})", k.to_u64(), k.to_u64()))
            .collect::<Vec<_>>()
            .join("  ")
    };

    Some(format!(
        "{}  ::  {}",
        render(&keys[..HEAD_TAIL_LEN]),
        render(&keys[keys.len() - HEAD_TAIL_LEN..])
    ))
}
