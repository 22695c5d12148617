use std::iter::FusedIterator;

use crate::{
    error::{Result, SequenceError},
    source::{count_and_restart, count_remaining, Restartable},
};

/// The replay pass of a counted source.
///
/// Keeps track of how many elements the replay produced so that a
/// source which changed after it was counted can be detected once the
/// adapter is done with it.
#[derive(Clone, Debug)]
struct Tally<R> {
    source: R,
    expected: usize,
    read: usize,
    verified: bool,
    changed: Option<SequenceError>,
}

impl<R> Tally<R>
where
    R: Restartable,
{
    fn new(mut source: R) -> Result<Self> {
        let expected = count_and_restart(&mut source)?;
        Ok(Self {
            source,
            expected,
            read: 0,
            verified: false,
            changed: None,
        })
    }

    fn pull(&mut self) -> Option<R::Item> {
        let next = self.source.next();
        if next.is_some() {
            self.read += 1;
        } else {
            self.verify();
        }
        next
    }

    /// reads whatever the adapter did not need and compares the
    /// total against the counting pass.
    fn verify(&mut self) {
        if self.verified {
            return;
        }
        self.verified = true;
        let found = self.read + count_remaining(&mut self.source);
        if found != self.expected {
            crate::logging::debug!(
                "source changed between passes: counted {} element(s), replay produced {}",
                self.expected,
                found
            );
            self.changed = Some(SequenceError::SourceChanged {
                expected: self.expected,
                found,
            });
        }
    }
}

/// Yields the last `amount` elements of a restartable source, in order.
///
/// The source is counted and rewound when the adapter is created;
/// the leading elements are skipped on the first call to `next`.
///
/// Once the last element has been handed out, the rest of the source is
/// read to confirm that the replay matched the count. A mismatch ends the
/// sequence and is reported by [`TakeLast::source_changed`].
#[derive(Clone, Debug)]
pub struct TakeLast<R> {
    tally: Tally<R>,
    skip: usize,
    remaining: usize,
}

impl<R> TakeLast<R>
where
    R: Restartable,
{
    pub(crate) fn new(source: R, amount: usize) -> Result<Self> {
        let tally = Tally::new(source)?;
        let remaining = amount.min(tally.expected);
        Ok(Self {
            skip: tally.expected - remaining,
            tally,
            remaining,
        })
    }

    /// the mismatch between the counting and the replay pass, if one was detected.
    /// Only meaningful once the adapter has returned `None`
    /// or has yielded its last element.
    pub fn source_changed(&self) -> Option<&SequenceError> {
        self.tally.changed.as_ref()
    }
}

impl<R> Iterator for TakeLast<R>
where
    R: Restartable,
{
    type Item = R::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            self.tally.verify();
            return None;
        }
        while self.skip > 0 {
            self.skip -= 1;
            if self.tally.pull().is_none() {
                self.skip = 0;
                self.remaining = 0;
                return None;
            }
        }

        match self.tally.pull() {
            Some(item) => {
                self.remaining -= 1;
                if self.remaining == 0 {
                    self.tally.verify();
                }
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R> ExactSizeIterator for TakeLast<R> where R: Restartable {}
impl<R> FusedIterator for TakeLast<R> where R: Restartable {}

/// Yields all but the last `amount` elements of a restartable source, in order.
///
/// Like [`TakeLast`], the leftover elements are read once the last one
/// has been yielded, and a replay that does not match the count is
/// reported by [`SkipLast::source_changed`].
#[derive(Clone, Debug)]
pub struct SkipLast<R> {
    tally: Tally<R>,
    remaining: usize,
}

impl<R> SkipLast<R>
where
    R: Restartable,
{
    pub(crate) fn new(source: R, amount: usize) -> Result<Self> {
        let tally = Tally::new(source)?;
        Ok(Self {
            remaining: tally.expected.saturating_sub(amount),
            tally,
        })
    }

    /// the mismatch between the counting and the replay pass, if one was detected.
    pub fn source_changed(&self) -> Option<&SequenceError> {
        self.tally.changed.as_ref()
    }
}

impl<R> Iterator for SkipLast<R>
where
    R: Restartable,
{
    type Item = R::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            self.tally.verify();
            return None;
        }
        match self.tally.pull() {
            Some(item) => {
                self.remaining -= 1;
                if self.remaining == 0 {
                    self.tally.verify();
                }
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R> ExactSizeIterator for SkipLast<R> where R: Restartable {}
impl<R> FusedIterator for SkipLast<R> where R: Restartable {}
