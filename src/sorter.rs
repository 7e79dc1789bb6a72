use crate::error::{Result, SortError};
use crate::sorts::*;
use crate::{RadixKey, SortOrder};
use log::debug;
use std::time::Instant;

/// A fully configured sort, ready to run against any key slice.
#[derive(Debug, Clone)]
pub struct Sorter {
    max_digit: u8,
    order: SortOrder,
    multi_threaded: bool,
    threads: Option<usize>,
}

impl Sorter {
    pub fn new(
        max_digit: u8,
        order: SortOrder,
        multi_threaded: bool,
        threads: Option<usize>,
    ) -> Self {
        Self {
            max_digit,
            order,
            multi_threaded,
            threads,
        }
    }

    pub fn sort<T>(&self, keys: &[T]) -> Result<Vec<T>>
    where
        T: RadixKey,
    {
        if self.threads == Some(0) {
            return Err(SortError::InvalidParameter {
                parameter: "threads",
                reason: "must be at least 1".to_string(),
            });
        }

        debug!(
            "Sorting {} keys: max_digit={}, order={}, multi_threaded={}",
            keys.len(),
            self.max_digit,
            self.order,
            self.multi_threaded
        );

        let start = Instant::now();
        let output = if self.multi_threaded {
            self.multi_threaded_sort(keys)?
        } else {
            sequential_sort(keys, self.max_digit, self.order)?
        };

        debug!("Sorted {} keys in {:?}", output.len(), start.elapsed());

        Ok(output)
    }

    #[cfg(feature = "multi-threaded")]
    fn multi_threaded_sort<T>(&self, keys: &[T]) -> Result<Vec<T>>
    where
        T: RadixKey,
    {
        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("hexsort-{}", i))
                    .build()
                    .map_err(|e| SortError::ConcurrencyFailure(e.to_string()))?;

                debug!("Built a dedicated pool of {} threads", threads);

                parallel_sort(keys, self.max_digit, self.order, Some(&pool))
            }
            None => parallel_sort(keys, self.max_digit, self.order, None),
        }
    }

    #[cfg(not(feature = "multi-threaded"))]
    fn multi_threaded_sort<T>(&self, keys: &[T]) -> Result<Vec<T>>
    where
        T: RadixKey,
    {
        debug!("Built without the multi-threaded feature, sorting sequentially");

        sequential_sort(keys, self.max_digit, self.order)
    }
}
