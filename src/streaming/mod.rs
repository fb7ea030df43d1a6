pub mod error;
pub mod state;
pub mod workers;

// Re-export commonly used types
pub use error::RunFailure;
pub use state::{CancellationState, StateProcessor};
pub use workers::{DispatchSummary, WorkerResult, dispatch, process_line};
