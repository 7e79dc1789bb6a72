use crate::{head_tail, sort, RadixSort, SortError, SortOrder};
use nanorand::{Rng, WyRand};

#[test]
pub fn test_small_example() {
    let inputs: Vec<u64> = vec![5, 3, 3, 9, 1];

    assert_eq!(
        sort(&inputs, 1, SortOrder::Ascending).unwrap(),
        vec![1, 3, 3, 5, 9]
    );
    assert_eq!(
        sort(&inputs, 1, SortOrder::Descending).unwrap(),
        vec![9, 5, 3, 3, 1]
    );
    assert_eq!(inputs, vec![5, 3, 3, 9, 1]);
}

#[test]
pub fn test_empty() {
    let inputs: Vec<u64> = vec![];

    assert_eq!(sort(&inputs, 16, SortOrder::Ascending).unwrap(), Vec::<u64>::new());
    assert_eq!(sort(&inputs, 16, SortOrder::Descending).unwrap(), Vec::<u64>::new());
}

#[test]
pub fn test_zero_max_digit() {
    let inputs: Vec<u64> = vec![5, 3, 3, 9, 1];

    assert!(matches!(
        sort(&inputs, 0, SortOrder::Ascending),
        Err(SortError::InvalidParameter {
            parameter: "max_digit",
            ..
        })
    ));
    assert!(matches!(
        sort(&inputs, 17, SortOrder::Descending),
        Err(SortError::InvalidParameter { .. })
    ));
}

#[test]
pub fn test_collisions_resolve_at_finer_digit() {
    // Every key shares nibble 3, only nibbles 1 and 2 differ.
    let inputs: Vec<u64> = (0..1_000u64).map(|i| 0x700 | ((i * 37) % 256)).collect();
    let mut expected = inputs.clone();
    expected.sort();

    assert_eq!(sort(&inputs, 3, SortOrder::Ascending).unwrap(), expected);

    expected.reverse();
    assert_eq!(sort(&inputs, 3, SortOrder::Descending).unwrap(), expected);
}

#[test]
pub fn test_ties_keep_original_order() {
    // Only the lowest nibble is considered, so the upper nibble tags each
    // key with its origin.
    let inputs: Vec<u64> = vec![0x25, 0x13, 0x15, 0x33, 0x05];

    assert_eq!(
        sort(&inputs, 1, SortOrder::Ascending).unwrap(),
        vec![0x13, 0x33, 0x25, 0x15, 0x05]
    );
    assert_eq!(
        sort(&inputs, 1, SortOrder::Descending).unwrap(),
        vec![0x05, 0x15, 0x25, 0x33, 0x13]
    );
}

#[test]
pub fn test_resort_is_identity() {
    let mut rng = WyRand::new_seed(0x5EED);
    let inputs: Vec<u32> = (0..10_000).map(|_| rng.generate::<u32>()).collect();

    let once = inputs.radix_sorted().unwrap();
    let twice = once.radix_sorted().unwrap();

    assert_eq!(once, twice);
}

#[test]
pub fn test_random_range() {
    let mut rng = WyRand::new_seed(42);
    let inputs: Vec<u64> = (0..100)
        .map(|_| rng.generate_range(1_000u64..=65_535))
        .collect();

    let mut expected = inputs.clone();
    expected.sort();

    let sorted = sort(&inputs, 4, SortOrder::from_flag('a')).unwrap();
    assert_eq!(sorted, expected);
    assert!(head_tail(&sorted).is_some());
}

#[cfg(feature = "multi-threaded")]
#[test]
pub fn test_parallel_matches_sequential() {
    use crate::sort_parallel;

    let mut rng = WyRand::new_seed(7);
    let inputs: Vec<u64> = (0..50_000)
        .map(|_| rng.generate_range(0u64..=0xF_FFFF))
        .collect();

    for order in [SortOrder::Ascending, SortOrder::Descending] {
        for max_digit in [1, 3, 5, 16] {
            assert_eq!(
                sort_parallel(&inputs, max_digit, order).unwrap(),
                sort(&inputs, max_digit, order).unwrap()
            );
        }
    }
}
