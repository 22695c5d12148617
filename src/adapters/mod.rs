//! The lazy iterator types returned by the sequence operators.
//!
//! Every adapter owns its source and pulls from it only when it is itself
//! asked for the next element. Dropping an adapter drops the source with it,
//! whether it was exhausted, abandoned halfway or unwound by a panicking callback.

mod skip_until;
mod tail;
mod take_until;
mod window;
mod without;

pub use skip_until::{SkipUntil, SkipUntilIndexed};
pub use tail::{SkipLast, TakeLast};
pub use take_until::{TakeUntil, TakeUntilIndexed};
pub use window::{RemoveSubset, Subset, Window};
pub use without::{Without, WithoutIndexed};

/// The lifecycle shared by the stateful adapters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    /// nothing has been yielded yet, some prefix of the source may still need handling
    Pending,
    /// elements are passed through as they are pulled
    Streaming,
    /// the adapter is done and will never touch the source again
    Exhausted,
}
