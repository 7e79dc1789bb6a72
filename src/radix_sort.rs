use crate::error::Result;
use crate::radix_sort_builder::RadixSortBuilder;
use crate::RadixKey;

pub trait RadixSort<T> {
    /// radix_sorted returns a new, ascending copy of your `Vec<T>` or `[T]`,
    /// sorted on every digit of `T` with the default execution mode.
    ///
    /// ```
    /// use hexsort::RadixSort;
    ///
    /// let values = [3u32, 1, 2];
    /// let sorted = values.radix_sorted().unwrap();
    ///
    /// assert_eq!(sorted, [1, 2, 3]);
    /// assert_eq!(values, [3, 1, 2]);
    /// ```
    fn radix_sorted(&self) -> Result<Vec<T>>;

    fn radix_sort_builder(&'_ self) -> RadixSortBuilder<'_, T>;
}

impl<T> RadixSort<T> for Vec<T>
where
    T: RadixKey,
{
    fn radix_sorted(&self) -> Result<Vec<T>> {
        self.radix_sort_builder().sort()
    }

    fn radix_sort_builder(&'_ self) -> RadixSortBuilder<'_, T> {
        RadixSortBuilder::new(self)
    }
}

impl<T> RadixSort<T> for [T]
where
    T: RadixKey,
{
    fn radix_sorted(&self) -> Result<Vec<T>> {
        self.radix_sort_builder().sort()
    }

    fn radix_sort_builder(&'_ self) -> RadixSortBuilder<'_, T> {
        RadixSortBuilder::new(self)
    }
}
