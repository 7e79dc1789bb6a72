use crate::{RadixKey, SortOrder};
use block_pseudorand::block_rand;
use std::fmt::Debug;
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

pub trait NumericTest<T>:
    RadixKey
    + Sized
    + Copy
    + Debug
    + PartialEq
    + Ord
    + Send
    + Sync
    + Shl<Output = T>
    + Shr<Output = T>
    + ShrAssign
    + ShlAssign
{
}

impl<T> NumericTest<T> for T where
    T: RadixKey
        + Sized
        + Copy
        + Debug
        + PartialEq
        + Ord
        + Send
        + Sync
        + Shl<Output = T>
        + Shr<Output = T>
        + ShrAssign
        + ShlAssign
{
}

pub fn gen_inputs<T>(n: usize, shift: T) -> Vec<T>
where
    T: NumericTest<T>,
{
    let mut inputs: Vec<T> = block_rand(n);

    inputs[0..(n / 2)].iter_mut().for_each(|v| *v >>= shift);
    inputs[(n / 2)..n].iter_mut().for_each(|v| *v <<= shift);

    inputs
}

pub fn gen_input_set<T>(shift: T) -> Vec<Vec<T>>
where
    T: NumericTest<T>,
{
    let n = 200_000;
    let half = n / 2;
    let inputs = gen_inputs(n, shift);

    // Middle values are used for the case where shift is provided
    let mut out = vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[(half - 5)..(half + 5)].to_vec(),
        inputs[(half - 50)..(half + 50)].to_vec(),
        inputs[(half - 2_500)..(half + 2_500)].to_vec(),
        inputs[(half - 25_000)..(half + 25_000)].to_vec(),
        inputs,
    ];

    out.reverse();

    out
}

/// Checks an out-of-place sort against the standard library's stable sort,
/// in both directions.
pub fn validate_sort<T, F>(inputs: Vec<T>, sort_fn: F)
where
    T: NumericTest<T>,
    F: Fn(&[T], SortOrder) -> Vec<T>,
{
    let mut expected = inputs.clone();
    expected.sort();

    let ascending = sort_fn(&inputs, SortOrder::Ascending);
    assert_eq!(ascending, expected);

    let descending = sort_fn(&inputs, SortOrder::Descending);
    expected.reverse();
    assert_eq!(descending, expected);
}

pub fn sort_comparison_suite<T, F>(shift: T, sort_fn: F)
where
    F: Fn(&[T], SortOrder) -> Vec<T>,
    T: NumericTest<T>,
{
    let input_set = gen_input_set(shift);

    for s in input_set {
        validate_sort(s, &sort_fn);
    }
}

pub fn validate_u32_patterns<F>(sort_fn: F)
where
    F: Fn(&[u32], SortOrder) -> Vec<u32>,
{
    let input_sets: Vec<Vec<u32>> = vec![
        vec![u32::MAX; 128],
        block_rand(128),
        block_rand(20_000),
        block_rand(4),
    ];

    let masks: [u32; 12] = [
        0xFFFF_FF00,
        0xFFFF_00FF,
        0xFF00_FFFF,
        0x00FF_FFFF,
        0x0000_FFFF,
        0xFFFF_0000,
        0b10000000000000000000000000000000,
        0b00000000000000000000000000000001,
        0b11111111111111111111111111111110,
        0b01111111111111111111111111111111,
        0b10101010101010101010101010101010,
        0b01010101010101010101010101010101,
    ];

    for inputs in input_sets.iter() {
        validate_sort(inputs.clone(), &sort_fn);

        // Empty levels
        for mask in masks {
            validate_sort(
                inputs.iter().map(|v| *v & mask).collect::<Vec<u32>>(),
                &sort_fn,
            );
        }
    }
}
