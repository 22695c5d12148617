use std::iter::FusedIterator;

use super::Phase;

/// Discards elements of the source until one matches a predicate,
/// then yields that element and everything after it.
#[derive(Clone, Debug)]
pub struct SkipUntil<I, F> {
    source: I,
    predicate: F,
    phase: Phase,
}

impl<I, F> SkipUntil<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    pub(crate) fn new(source: I, predicate: F) -> Self {
        Self {
            source,
            predicate,
            phase: Phase::Pending,
        }
    }
}

impl<I, F> Iterator for SkipUntil<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match self.phase {
            Phase::Pending => {
                let predicate = &mut self.predicate;
                let found = self.source.find(|item| predicate(item));
                self.phase = Phase::Streaming;
                found
            }
            Phase::Streaming => self.source.next(),
            Phase::Exhausted => return None,
        };
        if next.is_none() {
            self.phase = Phase::Exhausted;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Pending => (0, self.source.size_hint().1),
            Phase::Streaming => self.source.size_hint(),
            Phase::Exhausted => (0, Some(0)),
        }
    }
}

impl<I, F> FusedIterator for SkipUntil<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
}

/// Like [`SkipUntil`], with the predicate also receiving
/// the position of the examined element.
#[derive(Clone, Debug)]
pub struct SkipUntilIndexed<I, F> {
    source: I,
    predicate: F,
    phase: Phase,
}

impl<I, F> SkipUntilIndexed<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    pub(crate) fn new(source: I, predicate: F) -> Self {
        Self {
            source,
            predicate,
            phase: Phase::Pending,
        }
    }
}

impl<I, F> Iterator for SkipUntilIndexed<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match self.phase {
            Phase::Pending => {
                let mut found = None;
                for (index, item) in self.source.by_ref().enumerate() {
                    if (self.predicate)(&item, index) {
                        found = Some(item);
                        break;
                    }
                }
                self.phase = Phase::Streaming;
                found
            }
            Phase::Streaming => self.source.next(),
            Phase::Exhausted => return None,
        };
        if next.is_none() {
            self.phase = Phase::Exhausted;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Pending => (0, self.source.size_hint().1),
            Phase::Streaming => self.source.size_hint(),
            Phase::Exhausted => (0, Some(0)),
        }
    }
}

impl<I, F> FusedIterator for SkipUntilIndexed<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> bool,
{
}
