pub mod error;
pub mod token;

// Re-export commonly used types
pub use error::DomainError;
pub use token::{MINUS_SIGNS, counts_toward_sum, normalize_sign, parse_token, tokenize};
