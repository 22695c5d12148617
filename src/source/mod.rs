use crate::error::{Result, SequenceError};

pub mod one_pass;
pub mod replay;

pub use one_pass::OnePass;
pub use replay::Replay;

/// A source that can be rewound to its first element.
///
/// Operators that need to know the length of their input before they
/// produce anything (sorting, `take_last`, `skip_last`) count the source
/// in a first pass, rewind it and then read it again.
pub trait Restartable: Iterator {
    /// rewinds the source so that the next call to `next`
    /// yields the first element again.
    /// # Errors
    /// Fails with [`crate::SequenceError::NotRestartable`] if the source
    /// cannot revisit elements it has already handed out.
    fn restart(&mut self) -> Result<()>;

    /// whether a call to `restart` would currently succeed.
    /// Counting stops as soon as this turns false, so a source that can never
    /// be rewound is rejected after one element instead of after all of them.
    fn can_restart(&self) -> bool {
        true
    }
}

/// exhausts the source, returning the number of elements it yielded.
pub(crate) fn count_remaining<R: Iterator>(source: &mut R) -> usize {
    let mut count = 0;
    while source.next().is_some() {
        count += 1;
    }
    count
}

/// counts the source and rewinds it, ready for the replay pass.
pub(crate) fn count_and_restart<R: Restartable>(source: &mut R) -> Result<usize> {
    let mut count = 0;
    while source.next().is_some() {
        count += 1;
        if !source.can_restart() {
            crate::logging::debug!(
                "counting pass stopped: source cannot be rewound after {} element(s)",
                count
            );
            return Err(SequenceError::NotRestartable { consumed: count });
        }
    }
    crate::logging::debug!("counting pass finished with {} element(s)", count);
    source.restart()?;
    Ok(count)
}
