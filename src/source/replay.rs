use crate::error::Result;

use super::Restartable;

/// A restartable source backed by a cloneable iterator.
///
/// A pristine copy of the iterator is kept around and cloned
/// again whenever the source is restarted.
#[derive(Clone, Debug)]
pub struct Replay<I> {
    origin: I,
    current: I,
}

impl<I> Replay<I>
where
    I: Iterator + Clone,
{
    /// Creates a new replayable source starting at the current
    /// position of the provided iterator.
    pub fn new(source: I) -> Self {
        Self {
            current: source.clone(),
            origin: source,
        }
    }
}

impl<I> Iterator for Replay<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.current.size_hint()
    }
}

impl<I> Restartable for Replay<I>
where
    I: Iterator + Clone,
{
    fn restart(&mut self) -> Result<()> {
        self.current = self.origin.clone();
        Ok(())
    }
}
