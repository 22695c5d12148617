use crate::error::{Result, SequenceError};

use super::Restartable;

/// Adapts a single traversal iterator to the [`Restartable`] interface.
///
/// Rewinding is only possible as long as nothing has been read
/// from the source yet, which covers empty sources as well.
/// Anything else fails fast instead of silently replaying a
/// truncated sequence.
#[derive(Debug)]
pub struct OnePass<I> {
    source: I,
    consumed: usize,
}

impl<I> OnePass<I> {
    pub fn new(source: I) -> Self {
        Self {
            source,
            consumed: 0,
        }
    }

    /// the number of elements handed out so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl<I> Iterator for OnePass<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.source.next();
        if next.is_some() {
            self.consumed += 1;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I> Restartable for OnePass<I>
where
    I: Iterator,
{
    fn can_restart(&self) -> bool {
        self.consumed == 0
    }

    fn restart(&mut self) -> Result<()> {
        if self.consumed == 0 {
            Ok(())
        } else {
            crate::logging::debug!(
                "refusing to restart a single pass source after {} element(s)",
                self.consumed
            );
            Err(SequenceError::NotRestartable {
                consumed: self.consumed,
            })
        }
    }
}
