#[cfg(test)]
pub mod test_utils;

mod sort_utils;

pub use sort_utils::*;
