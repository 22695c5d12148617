use std::iter::FusedIterator;

use super::Phase;

/// A contiguous range of positions `[start, start + len)` within a sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Window {
    start: usize,
    len: usize,
}

impl Window {
    /// Normalises a signed start index and length into a window.
    ///
    /// A negative start is not an offset from the end of the sequence.
    /// Instead the window is taken to end at `start + length` and is clamped
    /// to begin at position zero, so `(-2, 5)` covers `[0, 3)`.
    /// Windows that would end at or before position zero, as well as
    /// non-positive lengths, are empty.
    pub fn new(start: isize, length: isize) -> Self {
        let end = start.saturating_add(length);
        if end <= 0 {
            Self::default()
        } else if start < 0 {
            Self {
                start: 0,
                len: end.unsigned_abs(),
            }
        } else if length <= 0 {
            Self {
                start: start.unsigned_abs(),
                len: 0,
            }
        } else {
            Self {
                start: start.unsigned_abs(),
                len: length.unsigned_abs(),
            }
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// the first position after the window
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && position < self.end()
    }
}

/// Yields the elements of the source whose positions fall inside a [`Window`].
#[derive(Clone, Debug)]
pub struct Subset<I> {
    source: I,
    window: Window,
    position: usize,
    phase: Phase,
}

impl<I> Subset<I>
where
    I: Iterator,
{
    pub(crate) fn new(source: I, window: Window) -> Self {
        let phase = if window.is_empty() {
            Phase::Exhausted
        } else {
            Phase::Pending
        };
        Self {
            source,
            window,
            position: 0,
            phase,
        }
    }

    fn remaining(&self) -> usize {
        self.window.end() - self.position.max(self.window.start())
    }
}

impl<I> Iterator for Subset<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.phase == Phase::Pending {
            let start = self.window.start();
            if start > 0 && self.source.nth(start - 1).is_none() {
                self.phase = Phase::Exhausted;
                return None;
            }
            self.position = start;
            self.phase = Phase::Streaming;
        }
        if self.phase == Phase::Exhausted || self.position >= self.window.end() {
            self.phase = Phase::Exhausted;
            return None;
        }

        let next = self.source.next();
        if next.is_some() {
            self.position += 1;
        } else {
            self.phase = Phase::Exhausted;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        let skip = match self.phase {
            Phase::Pending => self.window.start(),
            Phase::Streaming => 0,
            Phase::Exhausted => return (0, Some(0)),
        };
        let remaining = self.remaining();
        let lower = lower.saturating_sub(skip).min(remaining);
        let upper = upper.map_or(remaining, |upper| upper.saturating_sub(skip).min(remaining));
        (lower, Some(upper))
    }
}

impl<I> FusedIterator for Subset<I> where I: Iterator {}

/// Yields the elements of the source whose positions fall outside a [`Window`].
#[derive(Clone, Debug)]
pub struct RemoveSubset<I> {
    source: I,
    window: Window,
    position: usize,
    phase: Phase,
}

impl<I> RemoveSubset<I>
where
    I: Iterator,
{
    pub(crate) fn new(source: I, window: Window) -> Self {
        let phase = if window.is_empty() {
            Phase::Streaming
        } else {
            Phase::Pending
        };
        Self {
            source,
            window,
            position: 0,
            phase,
        }
    }

    /// the number of elements that remain if `available` more are read from the source
    fn kept_of(&self, available: usize) -> usize {
        match self.phase {
            Phase::Pending => {
                let leading = self.window.start() - self.position;
                let removed = available.saturating_sub(leading).min(self.window.len());
                available - removed
            }
            Phase::Streaming => available,
            Phase::Exhausted => 0,
        }
    }
}

impl<I> Iterator for RemoveSubset<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.phase == Phase::Pending {
            if self.position < self.window.start() {
                let next = self.source.next();
                if next.is_some() {
                    self.position += 1;
                } else {
                    self.phase = Phase::Exhausted;
                }
                return next;
            }
            // drop the window itself, which is never empty while pending
            self.phase = Phase::Streaming;
            if self.source.nth(self.window.len() - 1).is_none() {
                self.phase = Phase::Exhausted;
                return None;
            }
            self.position = self.window.end();
        }
        if self.phase == Phase::Exhausted {
            return None;
        }

        let next = self.source.next();
        if next.is_none() {
            self.phase = Phase::Exhausted;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (self.kept_of(lower), upper.map(|upper| self.kept_of(upper)))
    }
}

impl<I> FusedIterator for RemoveSubset<I> where I: Iterator {}
