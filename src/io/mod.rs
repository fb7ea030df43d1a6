pub mod error;
pub mod lines;

// Re-export commonly used types
pub use error::IoError;
pub use lines::{DEFAULT_MAX_LINE_LENGTH, LineSource, LineStream};
