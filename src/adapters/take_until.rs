use std::iter::FusedIterator;

use super::Phase;

/// Yields elements of the source up to, but not including,
/// the first one that matches a predicate.
#[derive(Clone, Debug)]
pub struct TakeUntil<I, F> {
    source: I,
    predicate: F,
    phase: Phase,
}

impl<I, F> TakeUntil<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    pub(crate) fn new(source: I, predicate: F) -> Self {
        Self {
            source,
            predicate,
            phase: Phase::Streaming,
        }
    }
}

impl<I, F> Iterator for TakeUntil<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.phase == Phase::Exhausted {
            return None;
        }
        let item = self.source.next().filter(|item| !(self.predicate)(item));
        if item.is_none() {
            self.phase = Phase::Exhausted;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Exhausted => (0, Some(0)),
            _ => (0, self.source.size_hint().1),
        }
    }
}

impl<I, F> FusedIterator for TakeUntil<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
}

/// Like [`TakeUntil`], with the predicate also receiving
/// the position of the examined element.
#[derive(Clone, Debug)]
pub struct TakeUntilIndexed<I, F> {
    source: I,
    predicate: F,
    index: usize,
    phase: Phase,
}

impl<I, F> TakeUntilIndexed<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    pub(crate) fn new(source: I, predicate: F) -> Self {
        Self {
            source,
            predicate,
            index: 0,
            phase: Phase::Streaming,
        }
    }
}

impl<I, F> Iterator for TakeUntilIndexed<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.phase == Phase::Exhausted {
            return None;
        }
        let index = self.index;
        let item = self
            .source
            .next()
            .filter(|item| !(self.predicate)(item, index));
        if item.is_none() {
            self.phase = Phase::Exhausted;
        } else {
            self.index += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Exhausted => (0, Some(0)),
            _ => (0, self.source.size_hint().1),
        }
    }
}

impl<I, F> FusedIterator for TakeUntilIndexed<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> bool,
{
}
