use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use super::error::RunFailure;

/// Cooperative cancellation contract between a parser and its workers
///
/// Workers report the first problem they hit and poll `is_active` before
/// each unit of work; once it returns false they stop taking new work.
pub trait StateProcessor: Send + Sync {
    /// Record a failure that stops processing
    fn report_failure(&self, failure: RunFailure);

    /// Whether processing should continue
    fn is_active(&self) -> bool;
}

/// First-failure-wins cancellation flag with the captured failure
///
/// `active` starts true and only ever goes false. The failure slot is
/// written at most once; later reports are dropped.
#[derive(Debug)]
pub struct CancellationState {
    active: AtomicBool,
    failure: OnceLock<RunFailure>,
}

impl CancellationState {
    pub fn new() -> Self {
        Self {
            active: AtomicBool::new(true),
            failure: OnceLock::new(),
        }
    }

    /// The recorded failure, if any
    pub fn failure(&self) -> Option<&RunFailure> {
        self.failure.get()
    }

    /// `Err` with the recorded failure if the run did not succeed
    pub fn check(&self) -> Result<(), &RunFailure> {
        match self.failure() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    /// Consume the state and take ownership of the recorded failure
    pub fn into_failure(self) -> Option<RunFailure> {
        self.failure.into_inner()
    }
}

impl Default for CancellationState {
    fn default() -> Self {
        Self::new()
    }
}

impl StateProcessor for CancellationState {
    fn report_failure(&self, failure: RunFailure) {
        // Deactivate before publishing so nobody sees a failure while active
        self.active.store(false, Ordering::Release);

        match self.failure.set(failure) {
            Ok(()) => {
                if let Some(recorded) = self.failure.get() {
                    warn!(error = %recorded, "Processing failed, cancelling run");
                }
            }
            Err(discarded) => {
                debug!(error = %discarded, "Discarding failure reported after cancellation");
            }
        }
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}
