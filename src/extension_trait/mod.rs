/// operators that need to see the source only once
mod sequential;
/// operators that count their source before replaying it
mod restartable;

pub use restartable::{IntoRestartable, RestartableExt};
pub use sequential::SequenceExt;
