use std::num::ParseIntError;
use thiserror::Error;

/// Domain-level errors for token parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed number: {token:?}")]
    MalformedNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl DomainError {
    /// The token that failed to parse
    pub fn token(&self) -> &str {
        match self {
            DomainError::MalformedNumber { token, .. } => token,
        }
    }
}
