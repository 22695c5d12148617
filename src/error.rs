use thiserror::Error;

/// Result type for operators that need to rewind their source.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// The ways a count-then-replay operator can refuse its source.
///
/// Faults raised by user supplied predicates, comparators or actions are
/// never wrapped in this type; they reach the caller unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A restart was requested on a single pass source after it had
    /// already handed out elements.
    #[error("source not restartable: {consumed} element(s) were already consumed")]
    NotRestartable { consumed: usize },

    /// The replay pass produced a different number of elements
    /// than the counting pass before it.
    #[error("source changed between passes: counted {expected} element(s), replay produced {found}")]
    SourceChanged { expected: usize, found: usize },
}
