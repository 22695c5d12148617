use std::cmp::Ordering;

use crate::{
    adapters::{SkipLast, TakeLast},
    error::Result,
    orderer::{DirectedOrderer, FuncOrderer, KeyOrderer, OrdOrderer, SortDirection},
    sorter,
    source::{OnePass, Replay, Restartable},
};

/// Operators that count their source before reading it a second time.
///
/// Every method here runs the counting pass immediately, so a source
/// that cannot be rewound is rejected before anything is produced.
pub trait RestartableExt: Restartable + Sized {
    /// Sorts the elements in ascending order using their natural ordering.
    /// # Errors
    /// Fails if the source cannot be restarted or changes between its two passes.
    fn sort(self) -> Result<Vec<Self::Item>>
    where
        Self::Item: Ord,
    {
        self.sort_directed(SortDirection::default())
    }

    /// Sorts the elements using their natural ordering in the given direction.
    /// Equal elements keep their relative order in both directions.
    /// # Errors
    /// Fails if the source cannot be restarted or changes between its two passes.
    fn sort_directed(self, direction: SortDirection) -> Result<Vec<Self::Item>>
    where
        Self::Item: Ord,
    {
        let orderer = DirectedOrderer::new(OrdOrderer::new(), direction);
        sorter::sort_source(self, &orderer)
    }

    /// Sorts the elements using a custom comparator function.
    /// # Errors
    /// Fails if the source cannot be restarted or changes between its two passes.
    fn sort_by<F>(self, comparator: F) -> Result<Vec<Self::Item>>
    where
        F: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        sorter::sort_source(self, &FuncOrderer::new(comparator))
    }

    /// Sorts the elements by a key extracted from each of them.
    /// # Errors
    /// Fails if the source cannot be restarted or changes between its two passes.
    fn sort_by_key<F, K>(self, key_extractor: F) -> Result<Vec<Self::Item>>
    where
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        sorter::sort_source(self, &KeyOrderer::new(key_extractor))
    }

    /// Yields the last `amount` elements, or all of them if there are fewer.
    ///
    /// If the replay does not match the count, the sequence ends early and
    /// [`TakeLast::source_changed`] reports the mismatch.
    /// # Errors
    /// Fails if the source cannot be restarted.
    fn take_last(self, amount: usize) -> Result<TakeLast<Self>> {
        TakeLast::new(self, amount)
    }

    /// Yields everything except the last `amount` elements.
    ///
    /// A replay that does not match the count is reported by
    /// [`SkipLast::source_changed`].
    /// # Errors
    /// Fails if the source cannot be restarted.
    fn skip_last(self, amount: usize) -> Result<SkipLast<Self>> {
        SkipLast::new(self, amount)
    }
}

impl<R> RestartableExt for R where R: Restartable {}

/// Conversions from plain iterators into [`Restartable`] sources.
pub trait IntoRestartable: Iterator + Sized {
    /// Wraps a cloneable iterator so it can be rewound any number of times.
    fn replay(self) -> Replay<Self>
    where
        Self: Clone,
    {
        Replay::new(self)
    }

    /// Wraps a single pass iterator. Operators that need to rewind it
    /// fail with [`crate::SequenceError::NotRestartable`] unless it is empty.
    /// They give up after reading the first element, so this holds for
    /// endless iterators too.
    fn one_pass(self) -> OnePass<Self> {
        OnePass::new(self)
    }
}

impl<I> IntoRestartable for I where I: Iterator {}
