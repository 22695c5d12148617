use std::iter::FusedIterator;

/// Yields the elements of the source that do not match a predicate.
#[derive(Clone, Debug)]
pub struct Without<I, F> {
    source: I,
    predicate: F,
}

impl<I, F> Without<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    pub(crate) fn new(source: I, predicate: F) -> Self {
        Self { source, predicate }
    }
}

impl<I, F> Iterator for Without<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.source.find(|item| !predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, F> FusedIterator for Without<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> bool,
{
}

/// Yields the elements of the source that do not match a predicate
/// which also receives the position of the element in the source.
#[derive(Clone, Debug)]
pub struct WithoutIndexed<I, F> {
    source: I,
    predicate: F,
    index: usize,
}

impl<I, F> WithoutIndexed<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    pub(crate) fn new(source: I, predicate: F) -> Self {
        Self {
            source,
            predicate,
            index: 0,
        }
    }
}

impl<I, F> Iterator for WithoutIndexed<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.source.by_ref() {
            // the index counts excluded elements too
            let index = self.index;
            self.index += 1;
            if !(self.predicate)(&item, index) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, F> FusedIterator for WithoutIndexed<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item, usize) -> bool,
{
}
