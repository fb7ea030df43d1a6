use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info};

use super::error::EngineError;
use super::parser::{Parser, ParserState};
use crate::storage::ThreadSafeSum;
use crate::streaming::StateProcessor;

/// Outcome of one file in a [`sum_paths`] run
#[derive(Debug)]
pub struct FileTotal {
    pub path: PathBuf,
    pub sum: Arc<ThreadSafeSum>,
    pub state: ParserState,
}

/// Sum several files concurrently, one parser per file
///
/// Each file adds to its own child of `total`, so per-file totals stay
/// readable while `total` collects everything. All parsers report to the
/// same state processor: the first failure in any file stops the others.
/// Every path is validated before any file is opened.
pub async fn sum_paths<I, Q, P>(
    paths: I,
    total: &Arc<ThreadSafeSum>,
    state_processor: Arc<P>,
    workers: Option<usize>,
) -> Result<Vec<FileTotal>, EngineError>
where
    I: IntoIterator<Item = Q>,
    Q: Into<PathBuf>,
    P: StateProcessor + ?Sized + 'static,
{
    let mut runs = Vec::new();

    for path in paths {
        let path = path.into();
        let sum = Arc::new(ThreadSafeSum::with_parent(total));

        let mut builder = Parser::builder()
            .path(path.clone())
            .accumulator(sum)
            .state_processor(Arc::clone(&state_processor));
        if let Some(num) = workers {
            builder = builder.workers(num);
        }

        runs.push((path, builder.build()?));
    }

    if runs.is_empty() {
        return Err(EngineError::invalid("at least one file is required"));
    }

    info!(files = runs.len(), "Summing files");
    join_all(runs.iter_mut().map(|(_, parser)| parser.run())).await;

    let totals: Vec<FileTotal> = runs
        .into_iter()
        .map(|(path, parser)| FileTotal {
            sum: Arc::clone(parser.sum()),
            state: parser.state(),
            path,
        })
        .collect();

    for file in &totals {
        debug!(
            path = %file.path.display(),
            state = ?file.state,
            sum = file.sum.value(),
            "File finished"
        );
    }

    Ok(totals)
}
