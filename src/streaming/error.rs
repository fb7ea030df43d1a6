use thiserror::Error;

use crate::domain::DomainError;
use crate::io::IoError;

/// Failure captured while a parser run is in progress
///
/// These never propagate out of `run()`; they are recorded once in a
/// [`StateProcessor`](super::StateProcessor) and read back by the caller.
#[derive(Error, Debug)]
pub enum RunFailure {
    #[error("IO failure: {0}")]
    Io(#[from] IoError),

    #[error("Line {line}: {source}")]
    MalformedNumber {
        line: usize,
        #[source]
        source: DomainError,
    },
}

impl RunFailure {
    /// Offending token for malformed-number failures
    pub fn token(&self) -> Option<&str> {
        match self {
            RunFailure::MalformedNumber { source, .. } => Some(source.token()),
            RunFailure::Io(_) => None,
        }
    }

    /// Kind of the underlying IO error for IO failures
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            RunFailure::Io(e) => e.kind(),
            RunFailure::MalformedNumber { .. } => None,
        }
    }
}
