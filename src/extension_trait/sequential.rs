use crate::adapters::{
    RemoveSubset, SkipUntil, SkipUntilIndexed, Subset, TakeUntil, TakeUntilIndexed, Window,
    Without, WithoutIndexed,
};

/// Single pass operators available on every iterator.
///
/// All of these read their source front to back exactly once.
/// The adapter returning methods are lazy: nothing is pulled from
/// the source until the returned iterator is advanced.
pub trait SequenceExt: Iterator + Sized {
    /// Yields every element for which the predicate returns false,
    /// keeping their relative order.
    fn without<F>(self, predicate: F) -> Without<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Without::new(self, predicate)
    }

    /// Like [`SequenceExt::without`], with the predicate also receiving
    /// the zero based position of each element in the source.
    fn without_indexed<F>(self, predicate: F) -> WithoutIndexed<Self, F>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        WithoutIndexed::new(self, predicate)
    }

    /// Yields elements until the first one matching the predicate,
    /// which is not yielded itself.
    fn take_until<F>(self, predicate: F) -> TakeUntil<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        TakeUntil::new(self, predicate)
    }

    fn take_until_indexed<F>(self, predicate: F) -> TakeUntilIndexed<Self, F>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        TakeUntilIndexed::new(self, predicate)
    }

    /// Discards elements until the first one matching the predicate,
    /// then yields that element and all that follow.
    /// The predicate is not called again after the first match.
    fn skip_until<F>(self, predicate: F) -> SkipUntil<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        SkipUntil::new(self, predicate)
    }

    fn skip_until_indexed<F>(self, predicate: F) -> SkipUntilIndexed<Self, F>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        SkipUntilIndexed::new(self, predicate)
    }

    /// Yields the elements at positions `[start, start + length)`.
    /// See [`Window::new`] for how negative arguments are treated.
    fn subset(self, start: isize, length: isize) -> Subset<Self> {
        Subset::new(self, Window::new(start, length))
    }

    /// Yields every element outside of the positions `[start, start + length)`.
    /// Together with [`SequenceExt::subset`] this partitions the source.
    fn remove_subset(self, start: isize, length: isize) -> RemoveSubset<Self> {
        RemoveSubset::new(self, Window::new(start, length))
    }

    /// Calls the action once per element, in order.
    fn apply<F>(self, mut action: F)
    where
        F: FnMut(Self::Item),
    {
        for item in self {
            action(item);
        }
    }

    /// Calls the action once per element together with its zero based position.
    fn apply_indexed<F>(self, mut action: F)
    where
        F: FnMut(Self::Item, usize),
    {
        for (index, item) in self.enumerate() {
            action(item, index);
        }
    }

    /// Calls a fallible action once per element, stopping at the first error.
    /// # Errors
    /// Returns the first error produced by the action, unchanged.
    fn try_apply<F, E>(self, mut action: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        for item in self {
            action(item)?;
        }
        Ok(())
    }

    /// Like [`SequenceExt::try_apply`], with the action also receiving
    /// the zero based position of each element.
    /// # Errors
    /// Returns the first error produced by the action, unchanged.
    fn try_apply_indexed<F, E>(self, mut action: F) -> Result<(), E>
    where
        F: FnMut(Self::Item, usize) -> Result<(), E>,
    {
        for (index, item) in self.enumerate() {
            action(item, index)?;
        }
        Ok(())
    }
}

impl<I> SequenceExt for I where I: Iterator {}

#[cfg(test)]
mod test {
    use super::SequenceExt;

    #[test]
    fn test_chaining() {
        let result: Vec<_> = (0..20)
            .without(|x| x % 2 == 1)
            .skip_until(|x| *x > 4)
            .take_until(|x| *x > 14)
            .subset(1, 3)
            .collect();
        assert_eq!(vec![8, 10, 12], result);
    }

    #[test]
    fn test_apply() {
        let mut seen = Vec::new();
        ["a", "b", "c"].iter().apply(|s| seen.push(*s));
        assert_eq!(vec!["a", "b", "c"], seen);
    }

    #[test]
    fn test_apply_indexed() {
        let mut seen = Vec::new();
        [10, 20, 30].into_iter().apply_indexed(|x, i| seen.push((i, x)));
        assert_eq!(vec![(0, 10), (1, 20), (2, 30)], seen);
    }

    #[test]
    fn test_try_apply_stops_at_error() {
        let mut seen = Vec::new();
        let result = (1..10).try_apply(|x| {
            if x == 4 {
                return Err(format!("rejected {x}"));
            }
            seen.push(x);
            Ok(())
        });
        assert_eq!(Err("rejected 4".to_owned()), result);
        assert_eq!(vec![1, 2, 3], seen);
    }

    #[test]
    fn test_try_apply_indexed() {
        let mut sum = 0;
        let result: Result<(), ()> = [5, 5, 5].into_iter().try_apply_indexed(|x, i| {
            sum += x * i;
            Ok(())
        });
        assert!(result.is_ok());
        assert_eq!(15, sum);
    }

    #[test]
    fn test_empty_sequence() {
        let empty = || std::iter::empty::<i32>();
        assert_eq!(None, empty().without(|_| true).next());
        assert_eq!(None, empty().without_indexed(|_, _| false).next());
        assert_eq!(None, empty().take_until(|_| false).next());
        assert_eq!(None, empty().take_until_indexed(|_, _| false).next());
        assert_eq!(None, empty().skip_until(|_| true).next());
        assert_eq!(None, empty().skip_until_indexed(|_, _| true).next());
        assert_eq!(None, empty().subset(0, 3).next());
        assert_eq!(None, empty().remove_subset(0, 3).next());
        empty().apply(|_| panic!("no elements"));
        empty().apply_indexed(|_, _| panic!("no elements"));
    }
}
