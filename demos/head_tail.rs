//! Sorts a batch of random keys and prints the head and tail of the input and
//! the output.
//!
//! ```text
//! cargo run --example head_tail -- [count] [a|d]
//! ```

use env_logger::Env;
use hexsort::{head_tail, required_digits, sort, SortOrder};
use log::info;
use nanorand::{Rng, WyRand};
use std::error::Error;

const DEFAULT_COUNT: usize = 100;
const MIN_KEY: u64 = 1_000;
const MAX_KEY: u64 = 65_535;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let count = match args.next() {
        Some(c) => c.parse::<usize>()?,
        None => DEFAULT_COUNT,
    };
    let order = args
        .next()
        .and_then(|flag| flag.chars().next())
        .map(SortOrder::from_flag)
        .unwrap_or_default();

    let mut rng = WyRand::new();
    let keys: Vec<u64> = (0..count)
        .map(|_| rng.generate_range(MIN_KEY..=MAX_KEY))
        .collect();
    let max_digit = required_digits(&keys);

    info!("Sorting {} keys on {} digits, {}", count, max_digit, order);

    if let Some(line) = head_tail(&keys) {
        println!("before: {}", line);
    }

    let sorted = sort(&keys, max_digit, order)?;

    if let Some(line) = head_tail(&sorted) {
        println!("after:  {}", line);
    }

    Ok(())
}
