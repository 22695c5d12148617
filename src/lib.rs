//! Lazy sequence operators for all iterators.
//!
//! The operators come as two extension traits:
//!
//! * [`SequenceExt`] is implemented for every iterator and holds the operators
//!   that read their source once: `without`, `take_until`, `skip_until`,
//!   `subset`, `remove_subset` and the `apply` family.
//! * [`RestartableExt`] is implemented for [`Restartable`] sources and holds the
//!   operators that need to count their source before reading it again:
//!   `sort`, `take_last` and `skip_last`.
//!
//! Any cloneable iterator can be turned into a restartable source with
//! [`IntoRestartable::replay`].
//!
//! ```
//! use sequence_ops::{IntoRestartable, RestartableExt, SequenceExt};
//!
//! let odd: Vec<_> = (1..=5).without(|x| x % 2 == 0).collect();
//! assert_eq!(vec![1, 3, 5], odd);
//!
//! let last: Vec<_> = (1..=5).replay().take_last(2)?.collect();
//! assert_eq!(vec![4, 5], last);
//! # Ok::<(), sequence_ops::SequenceError>(())
//! ```

mod adapters;
mod error;
mod extension_trait;
mod logging;
mod orderer;
mod sorter;
mod source;

pub use adapters::{
    RemoveSubset, SkipLast, SkipUntil, SkipUntilIndexed, Subset, TakeLast, TakeUntil,
    TakeUntilIndexed, Window, Without, WithoutIndexed,
};
pub use error::{Result, SequenceError};
pub use extension_trait::*;
pub use orderer::SortDirection;
pub use source::{OnePass, Replay, Restartable};

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use crate::{
        adapters::test_util::Tracked, IntoRestartable, RestartableExt, SequenceExt, SortDirection,
    };

    #[test]
    fn integration() {
        let source = [1, 2, 3, 4, 5];
        let collect = |iter: &mut dyn Iterator<Item = i32>| iter.collect::<Vec<_>>();

        let iter = || source.into_iter();

        assert_eq!(vec![1, 3, 5], collect(&mut iter().without(|x| x % 2 == 0)));
        assert_eq!(vec![4, 5], collect(&mut iter().replay().take_last(2).unwrap()));
        assert_eq!(vec![1, 2, 3], collect(&mut iter().replay().skip_last(2).unwrap()));
        assert_eq!(vec![1, 2], collect(&mut iter().take_until(|x| *x == 3)));
        assert_eq!(vec![3, 4, 5], collect(&mut iter().skip_until(|x| *x == 3)));

        let unsorted = [5, 3, 1, 4, 2].into_iter().replay();
        assert_eq!(vec![1, 2, 3, 4, 5], unsorted.clone().sort().unwrap());
        assert_eq!(
            vec![5, 4, 3, 2, 1],
            unsorted.sort_directed(SortDirection::Descending).unwrap()
        );

        let positions = 0..7;
        assert_eq!(vec![2, 3, 4], positions.clone().subset(2, 3).collect::<Vec<_>>());
        assert_eq!(vec![0, 1, 5, 6], positions.remove_subset(2, 3).collect::<Vec<_>>());
    }

    #[test]
    fn empty_restartable_source() {
        let empty = || std::iter::empty::<i32>().replay();
        assert!(empty().sort().unwrap().is_empty());
        assert!(empty().sort_by(|l, r| r.cmp(l)).unwrap().is_empty());
        assert_eq!(None, empty().take_last(1).unwrap().next());
        assert_eq!(None, empty().skip_last(1).unwrap().next());
    }

    #[test]
    fn source_released_on_early_stop() {
        let source = Tracked::new(1000);
        let dropped = source.dropped.clone();
        let pulled = source.pulled.clone();

        let mut subset = source.skip_until(|x| *x == 10).subset(0, 100);
        assert_eq!(Some(10), subset.next());
        assert_eq!(Some(11), subset.next());
        drop(subset);

        assert!(dropped.get());
        assert_eq!(12, pulled.get());
    }

    #[test]
    fn source_released_on_panicking_predicate() {
        let source = Tracked::new(10);
        let dropped = source.dropped.clone();

        let result = catch_unwind(AssertUnwindSafe(move || {
            source
                .without(|x| {
                    if *x == 3 {
                        panic!("predicate failed on {x}");
                    }
                    false
                })
                .count()
        }));

        assert!(result.is_err());
        assert!(dropped.get());
    }

    #[cfg(not(miri))]
    // the only reason this is disabled on miri is that it would run too slowly
    mod random {
        use std::sync::{Arc, Mutex};

        use rand::{rngs::ThreadRng, Rng};

        use crate::{IntoRestartable, RestartableExt, SequenceExt, SortDirection, Window};

        fn generate_sequence(rng: &mut ThreadRng, len: usize) -> Vec<u8> {
            (0..len).map(|_| rng.gen_range(0..16)).collect()
        }

        fn check_without(items: &[u8], pivot: u8) {
            let kept: Vec<_> = items.iter().copied().without(|x| *x < pivot).collect();
            let removed: Vec<_> = items.iter().copied().filter(|x| *x < pivot).collect();
            let expected: Vec<_> = items.iter().copied().filter(|x| *x >= pivot).collect();
            assert_eq!(expected, kept);

            let mut merged: Vec<_> = kept.into_iter().chain(removed).collect();
            let mut reference = items.to_vec();
            merged.sort();
            reference.sort();
            assert_eq!(reference, merged);
        }

        fn check_sort(items: &[u8]) {
            let source = items.iter().copied().replay();
            let ascending = source.clone().sort().unwrap();
            let mut descending = source.sort_directed(SortDirection::Descending).unwrap();

            let mut reference = items.to_vec();
            reference.sort();
            assert_eq!(reference, ascending);

            descending.reverse();
            assert_eq!(ascending, descending);

            let twice = ascending.iter().copied().replay().sort().unwrap();
            assert_eq!(ascending, twice);
        }

        fn check_tail(items: &[u8], amount: usize) {
            let source = items.iter().copied().replay();
            let last: Vec<_> = source.clone().take_last(amount).unwrap().collect();
            let rest: Vec<_> = source.skip_last(amount).unwrap().collect();

            assert_eq!(amount.min(items.len()), last.len());
            let rebuilt: Vec<_> = rest.into_iter().chain(last).collect();
            assert_eq!(items, rebuilt.as_slice());
        }

        fn check_until(items: &[u8], pivot: u8) {
            let head: Vec<_> = items.iter().take_until(|x| **x == pivot).collect();
            let tail: Vec<_> = items.iter().skip_until(|x| **x == pivot).collect();
            assert!(tail.first().map_or(true, |first| **first == pivot));

            let rebuilt: Vec<_> = head.into_iter().chain(tail).copied().collect();
            assert_eq!(items, rebuilt.as_slice());
        }

        fn check_window(len: usize, start: isize, length: isize) {
            let window = Window::new(start, length);
            let inside: Vec<_> = (0..len).subset(start, length).collect();
            let outside: Vec<_> = (0..len).remove_subset(start, length).collect();

            assert!(inside.iter().all(|i| window.contains(*i)));
            assert!(outside.iter().all(|i| !window.contains(*i)));
            assert!(inside.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(outside.windows(2).all(|pair| pair[0] < pair[1]));
            assert_eq!(len, inside.len() + outside.len());
        }

        fn check_apply_indexed(items: &[u8]) {
            let mut seen = Vec::with_capacity(items.len());
            items
                .iter()
                .copied()
                .apply_indexed(|item, index| seen.push((index, item)));
            let expected: Vec<_> = items.iter().copied().enumerate().collect();
            assert_eq!(expected, seen);
        }

        fn run_property_test(rng: &mut ThreadRng, len: usize) {
            let items = generate_sequence(rng, len);
            let pivot = rng.gen_range(0..16);
            let amount = rng.gen_range(0..=len + 2);
            let start = rng.gen_range(-8..=len as isize + 2);
            let length = rng.gen_range(-4..=len as isize + 2);

            check_without(&items, pivot);
            check_sort(&items);
            check_tail(&items, amount);
            check_until(&items, pivot);
            check_window(len, start, length);
            check_apply_indexed(&items);
        }

        #[test]
        fn test_properties_random() {
            let params = (0..40).flat_map(|len| (0..25).map(move |_| len));
            let params = Arc::new(Mutex::new(params));

            let threads: Vec<_> = (0..num_cpus::get())
                .map(|_| {
                    let params = params.clone();
                    std::thread::spawn(move || {
                        let mut rng = rand::thread_rng();
                        loop {
                            let next = params.lock().unwrap().next();
                            if let Some(len) = next {
                                run_property_test(&mut rng, len);
                            } else {
                                break;
                            }
                        }
                    })
                })
                .collect();

            threads.into_iter().for_each(|t| t.join().unwrap());
        }
    }
}
