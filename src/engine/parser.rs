use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::AsyncRead;
use tracing::{debug, info, warn};

use super::error::EngineError;
use crate::io::LineSource;
use crate::storage::ThreadSafeSum;
use crate::streaming::{CancellationState, RunFailure, StateProcessor, dispatch};

/// Lifecycle of a parser: `Ready -> Running -> {Completed, Failed}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    Ready,
    Running,
    Completed,
    Failed,
}

/// Worker count used when none is configured
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Sums the positive even integers found in a line source
///
/// Lines are read in order and handed to a pool of workers. Every token is
/// validated and each positive even value is added to the shared
/// [`ThreadSafeSum`]; the first failure is
/// reported to the [`StateProcessor`] and stops the run. `run` itself never
/// returns an error: inspect the state processor afterwards.
pub struct Parser<P: ?Sized = CancellationState> {
    source: Option<LineSource>,
    sum: Arc<ThreadSafeSum>,
    state_processor: Arc<P>,
    workers: usize,
    state: ParserState,
}

impl<P> Parser<P>
where
    P: StateProcessor + ?Sized + 'static,
{
    /// Create a parser over lines held in memory
    pub fn from_lines<I, S>(lines: I, sum: Arc<ThreadSafeSum>, state_processor: Arc<P>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_source(LineSource::lines(lines), sum, state_processor)
    }

    /// Create a parser over a file
    ///
    /// The path must be non-empty. Whether the file exists is only
    /// discovered by `run`, which reports a missing file as an IO failure.
    ///
    /// # Example
    /// ```rust,ignore
    /// let sum = Arc::new(ThreadSafeSum::new());
    /// let state = Arc::new(CancellationState::new());
    ///
    /// let mut parser = Parser::from_path("numbers.txt", sum.clone(), state.clone())?;
    /// parser.run().await;
    ///
    /// match state.check() {
    ///     Ok(()) => println!("{}", sum.value()),
    ///     Err(failure) => eprintln!("{failure}"),
    /// }
    /// ```
    pub fn from_path(
        path: impl Into<PathBuf>,
        sum: Arc<ThreadSafeSum>,
        state_processor: Arc<P>,
    ) -> Result<Self, EngineError> {
        ParserBuilder::new()
            .path(path)
            .accumulator(sum)
            .state_processor(state_processor)
            .build()
    }

    /// Create a parser over any async reader
    pub fn from_reader<R>(reader: R, sum: Arc<ThreadSafeSum>, state_processor: Arc<P>) -> Self
    where
        R: AsyncRead + Send + 'static,
    {
        Self::with_source(LineSource::reader(reader), sum, state_processor)
    }

    /// Start building a parser with explicit configuration
    pub fn builder() -> ParserBuilder<P> {
        ParserBuilder::new()
    }

    fn with_source(source: LineSource, sum: Arc<ThreadSafeSum>, state_processor: Arc<P>) -> Self {
        Self {
            source: Some(source),
            sum,
            state_processor,
            workers: default_workers(),
            state: ParserState::Ready,
        }
    }

    /// Set number of parallel workers (at least 1)
    pub fn with_workers(mut self, num: usize) -> Self {
        self.workers = num.max(1);
        self
    }

    /// Consume the line source and accumulate every token
    ///
    /// Runs at most once; later calls log a warning and return immediately.
    pub async fn run(&mut self) {
        let Some(source) = self.source.take() else {
            warn!(state = ?self.state, "Parser has already consumed its source");
            return;
        };

        self.state = ParserState::Running;
        info!(workers = self.workers, source = ?source, "Starting parse run");

        if !self.state_processor.is_active() {
            debug!("State processor inactive before start, skipping source");
        } else {
            match source.open().await {
                Ok(lines) => {
                    let summary = dispatch(
                        lines,
                        Arc::clone(&self.sum),
                        Arc::clone(&self.state_processor),
                        self.workers,
                    )
                    .await;
                    debug!(
                        lines_dispatched = summary.lines_dispatched,
                        lines_processed = summary.lines_processed(),
                        "Dispatch finished"
                    );
                }
                Err(e) => self.state_processor.report_failure(RunFailure::from(e)),
            }
        }

        self.state = if self.state_processor.is_active() {
            ParserState::Completed
        } else {
            ParserState::Failed
        };
        info!(state = ?self.state, total = self.sum.value(), "Parse run finished");
    }

    /// Current lifecycle state
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Shared sum this parser adds to
    pub fn sum(&self) -> &Arc<ThreadSafeSum> {
        &self.sum
    }

    /// Shared state processor this parser reports to
    pub fn state_processor(&self) -> &Arc<P> {
        &self.state_processor
    }

    /// Configured worker count
    pub fn workers(&self) -> usize {
        self.workers
    }
}

/// Validating builder for [`Parser`]
///
/// Every required part left unset, an empty path or more than one source
/// makes `build` fail with [`EngineError::InvalidArgument`].
pub struct ParserBuilder<P: ?Sized = CancellationState> {
    source: Option<LineSource>,
    extra_sources: usize,
    sum: Option<Arc<ThreadSafeSum>>,
    state_processor: Option<Arc<P>>,
    workers: Option<usize>,
}

impl<P> ParserBuilder<P>
where
    P: StateProcessor + ?Sized + 'static,
{
    pub fn new() -> Self {
        Self {
            source: None,
            extra_sources: 0,
            sum: None,
            state_processor: None,
            workers: None,
        }
    }

    /// Read lines from memory
    pub fn lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source(LineSource::lines(lines))
    }

    /// Read lines from a file
    pub fn path(self, path: impl Into<PathBuf>) -> Self {
        self.source(LineSource::path(path))
    }

    /// Read lines from an async reader
    pub fn reader<R>(self, reader: R) -> Self
    where
        R: AsyncRead + Send + 'static,
    {
        self.source(LineSource::reader(reader))
    }

    /// Use an already constructed source
    pub fn source(mut self, source: LineSource) -> Self {
        if self.source.is_some() {
            self.extra_sources += 1;
        }
        self.source = Some(source);
        self
    }

    /// Sum to add parsed values to
    pub fn accumulator(mut self, sum: Arc<ThreadSafeSum>) -> Self {
        self.sum = Some(sum);
        self
    }

    /// State processor to report failures to
    pub fn state_processor(mut self, state_processor: Arc<P>) -> Self {
        self.state_processor = Some(state_processor);
        self
    }

    /// Number of parallel workers, at least 1 (defaults to available parallelism)
    pub fn workers(mut self, num: usize) -> Self {
        self.workers = Some(num.max(1));
        self
    }

    /// Validate the configuration and create the parser
    pub fn build(self) -> Result<Parser<P>, EngineError> {
        if self.extra_sources > 0 {
            return Err(EngineError::invalid("only one line source may be given"));
        }

        let source = self
            .source
            .ok_or_else(|| EngineError::invalid("a line source is required"))?;

        if let LineSource::Path(path) = &source
            && path.as_os_str().is_empty()
        {
            return Err(EngineError::invalid("file path must not be empty"));
        }

        let sum = self
            .sum
            .ok_or_else(|| EngineError::invalid("an accumulator is required"))?;

        let state_processor = self
            .state_processor
            .ok_or_else(|| EngineError::invalid("a state processor is required"))?;

        let workers = self.workers.unwrap_or_else(default_workers);

        Ok(Parser {
            source: Some(source),
            sum,
            state_processor,
            workers,
            state: ParserState::Ready,
        })
    }
}

impl<P> Default for ParserBuilder<P>
where
    P: StateProcessor + ?Sized + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
