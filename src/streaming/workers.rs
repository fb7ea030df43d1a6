use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::error::RunFailure;
use super::state::StateProcessor;
use crate::domain::{counts_toward_sum, parse_token, tokenize};
use crate::io::IoError;
use crate::storage::ThreadSafeSum;

/// Lines buffered per worker before the dispatcher waits
const WORKER_QUEUE_CAPACITY: usize = 256;

/// Parse one line and add its positive even values to `sum`
///
/// Polls `state` before every token. Every token is validated, including
/// those that are not summed. On the first malformed token the failure is
/// reported and the rest of the line is skipped; values already added stay
/// added. Returns the number of tokens parsed.
pub fn process_line<P>(line_no: usize, line: &str, sum: &ThreadSafeSum, state: &P) -> usize
where
    P: StateProcessor + ?Sized,
{
    let mut parsed = 0;

    for token in tokenize(line) {
        if !state.is_active() {
            break;
        }

        match parse_token(token) {
            Ok(value) => {
                if counts_toward_sum(value) {
                    sum.add(value);
                }
                parsed += 1;
            }
            Err(source) => {
                state.report_failure(RunFailure::MalformedNumber {
                    line: line_no,
                    source,
                });
                break;
            }
        }
    }

    parsed
}

/// Per-worker outcome of a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerResult {
    pub worker_id: usize,
    pub lines_processed: usize,
}

/// Outcome of dispatching a line stream across workers
#[derive(Debug, Default)]
pub struct DispatchSummary {
    pub lines_dispatched: usize,
    pub worker_results: Vec<WorkerResult>,
}

impl DispatchSummary {
    /// Lines actually parsed by all workers combined
    pub fn lines_processed(&self) -> usize {
        self.worker_results.iter().map(|r| r.lines_processed).sum()
    }
}

/// Feed `lines` to `workers` parallel tasks, one line at a time
///
/// Line `n` goes to worker `n % workers`. The dispatcher checks `state`
/// before reading each line and stops at the first cancellation; a read
/// error from the stream is reported like any other failure. Lines already
/// queued to a worker are skipped once that worker sees the cancellation.
pub async fn dispatch<S, P>(
    mut lines: S,
    sum: Arc<ThreadSafeSum>,
    state: Arc<P>,
    workers: usize,
) -> DispatchSummary
where
    S: Stream<Item = Result<String, IoError>> + Unpin,
    P: StateProcessor + ?Sized + 'static,
{
    let workers = workers.max(1);

    let (senders, handles): (Vec<_>, Vec<_>) = (0..workers)
        .map(|worker_id| {
            let (tx, rx) = mpsc::channel::<(usize, String)>(WORKER_QUEUE_CAPACITY);
            let handle = tokio::spawn(run_worker(
                worker_id,
                rx,
                Arc::clone(&sum),
                Arc::clone(&state),
            ));
            (tx, handle)
        })
        .unzip();

    let mut lines_dispatched = 0;

    loop {
        if !state.is_active() {
            debug!(lines_dispatched, "Cancellation observed, stopping dispatch");
            break;
        }

        let Some(item) = lines.next().await else {
            break;
        };

        match item {
            Ok(line) => {
                let line_no = lines_dispatched + 1;
                let sender = &senders[lines_dispatched % workers];
                if sender.send((line_no, line)).await.is_err() {
                    // Worker already stopped on cancellation
                    break;
                }
                lines_dispatched += 1;
            }
            Err(e) => {
                state.report_failure(RunFailure::from(e));
                break;
            }
        }
    }

    // Closing the queues lets workers drain and exit
    drop(senders);

    let mut worker_results = Vec::with_capacity(workers);
    for (worker_id, handle) in handles.into_iter().enumerate() {
        let result = handle.await.unwrap_or_else(|e| {
            warn!(worker_id, error = %e, "Worker task failed");
            WorkerResult {
                worker_id,
                lines_processed: 0,
            }
        });
        worker_results.push(result);
    }

    DispatchSummary {
        lines_dispatched,
        worker_results,
    }
}

async fn run_worker<P>(
    worker_id: usize,
    mut queue: mpsc::Receiver<(usize, String)>,
    sum: Arc<ThreadSafeSum>,
    state: Arc<P>,
) -> WorkerResult
where
    P: StateProcessor + ?Sized,
{
    let mut lines_processed = 0;

    while let Some((line_no, line)) = queue.recv().await {
        if !state.is_active() {
            break;
        }
        process_line(line_no, &line, &sum, &*state);
        lines_processed += 1;
    }

    debug!(worker_id, lines_processed, "Worker finished");

    WorkerResult {
        worker_id,
        lines_processed,
    }
}
