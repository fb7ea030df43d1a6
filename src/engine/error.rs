use thiserror::Error;

/// Engine-level errors raised while setting up a parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl EngineError {
    pub(crate) fn invalid(reason: &str) -> Self {
        EngineError::InvalidArgument(reason.to_string())
    }
}
