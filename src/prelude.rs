//! Prelude module for convenient imports
//!
//! Import everything you need with: `use linesum::prelude::*;`

// Domain types
pub use crate::domain::{DomainError, counts_toward_sum, normalize_sign, parse_token, tokenize};

// Storage types
pub use crate::storage::ThreadSafeSum;

// IO types
pub use crate::io::{IoError, LineSource, LineStream};

// Streaming types
pub use crate::streaming::{CancellationState, RunFailure, StateProcessor};

// Engine types
pub use crate::engine::{EngineError, Parser, ParserBuilder, ParserState, FileTotal, sum_paths};

// App types
pub use crate::app::{AppError, Args, CliApp};
