pub mod cli;
pub mod error;

// Re-export commonly used types
pub use cli::{Args, CliApp, USAGE};
pub use error::AppError;
