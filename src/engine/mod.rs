pub mod batch;
pub mod error;
pub mod parser;

// Re-export commonly used types
pub use batch::{FileTotal, sum_paths};
pub use error::EngineError;
pub use parser::{Parser, ParserBuilder, ParserState, default_workers};
