use std::io;
use thiserror::Error;
use tokio_util::codec::LinesCodecError;

/// IO-level errors while acquiring or reading a line source
#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Line exceeds maximum length of {0} bytes")]
    LineTooLong(usize),
}

impl IoError {
    /// Kind of the underlying `std::io::Error`, if any
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            IoError::Io(e) => Some(e.kind()),
            IoError::LineTooLong(_) => None,
        }
    }

    pub(crate) fn from_codec(error: LinesCodecError, max_length: usize) -> Self {
        match error {
            LinesCodecError::Io(e) => IoError::Io(e),
            LinesCodecError::MaxLineLengthExceeded => IoError::LineTooLong(max_length),
        }
    }
}
