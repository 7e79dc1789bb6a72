use crate::error::Result;
use crate::sorter::Sorter;
use crate::utils::required_digits;
use crate::{RadixKey, SortOrder};

pub struct RadixSortBuilder<'a, T> {
    data: &'a [T],
    max_digit: u8,
    auto_digits: bool,
    order: SortOrder,
    multi_threaded: bool,
    threads: Option<usize>,
}

impl<'a, T> RadixSortBuilder<'a, T>
where
    T: RadixKey,
{
    pub(crate) fn new(data: &'a [T]) -> Self {
        Self {
            data,
            max_digit: T::DIGITS,
            auto_digits: false,
            order: SortOrder::Ascending,
            multi_threaded: cfg!(feature = "multi-threaded"),
            threads: None,
        }
    }

    /// Sort on digits `1..=max_digit` only. Keys with non-zero digits above
    /// `max_digit` are ordered by their lower digits alone.
    pub fn with_max_digit(mut self, max_digit: u8) -> Self {
        self.max_digit = max_digit;
        self.auto_digits = false;

        self
    }

    /// Derive the digit depth from the largest key at sort time.
    pub fn with_auto_digits(mut self) -> Self {
        self.auto_digits = true;

        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;

        self
    }

    pub fn ascending(self) -> Self {
        self.with_order(SortOrder::Ascending)
    }

    pub fn descending(self) -> Self {
        self.with_order(SortOrder::Descending)
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.multi_threaded = parallel;

        self
    }

    /// Run on a dedicated pool of `threads` workers instead of the global
    /// rayon pool. Implies parallel execution.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self.multi_threaded = true;

        self
    }

    pub fn sort(self) -> Result<Vec<T>> {
        let max_digit = if self.auto_digits {
            required_digits(self.data)
        } else {
            self.max_digit
        };

        let sorter = Sorter::new(max_digit, self.order, self.multi_threaded, self.threads);
        sorter.sort(self.data)
    }
}
