#[cfg(feature = "multi-threaded")]
mod parallel_sort;
mod recursive_merge;
mod sequential_sort;

#[cfg(feature = "multi-threaded")]
pub use parallel_sort::*;
pub use recursive_merge::*;
pub use sequential_sort::*;
