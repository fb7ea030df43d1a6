use std::future::Future;
use std::path::PathBuf;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use super::error::AppError;

/// Usage line printed with argument errors
pub const USAGE: &str = "Usage: linesum <file>... [--workers N]";

/// Command-line arguments of the `linesum` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub inputs: Vec<PathBuf>,
    pub workers: Option<usize>,
}

impl Args {
    /// Parse arguments, including the program name in first position
    pub fn parse<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut inputs = Vec::new();
        let mut workers = None;
        let mut args = args.into_iter().skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--workers" | "-w" => {
                    let value = args.next().ok_or_else(|| usage("--workers needs a value"))?;
                    let num = value
                        .parse::<usize>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or_else(|| usage(&format!("invalid worker count {value:?}")))?;
                    workers = Some(num);
                }
                flag if flag.starts_with("--") => {
                    return Err(usage(&format!("unknown option {flag}")));
                }
                _ => inputs.push(PathBuf::from(arg)),
            }
        }

        if inputs.is_empty() {
            return Err(usage("missing input file"));
        }
        Ok(Self { inputs, workers })
    }
}

fn usage(reason: &str) -> AppError {
    AppError::InvalidArguments(format!("{reason}\n{USAGE}"))
}

/// Reusable CLI application runner that handles:
/// - Logging setup (stderr, filtered by `RUST_LOG`)
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM)
pub struct CliApp {
    name: String,
    default_log_level: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default_log_level: "warn".to_string(),
        }
    }

    /// Log filter used when `RUST_LOG` is unset or invalid
    pub fn with_default_log_level(mut self, level: &str) -> Self {
        self.default_log_level = level.to_string();
        self
    }

    /// Install the stderr `tracing` subscriber
    ///
    /// Does nothing if a global subscriber is already set.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI application with proper signal handling and resource cleanup
    ///
    /// Creates a buffered stdout writer and passes it to the main function.
    /// The main function is responsible for flushing what it writes.
    ///
    /// This function never returns - it calls std::process::exit with the appropriate code
    pub async fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(tokio::io::BufWriter<tokio::io::Stdout>) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        self.init_tracing();

        let writer = tokio::io::BufWriter::new(tokio::io::stdout());
        let signal_fut = self.wait_for_signal();

        // Race main application logic against signal reception
        tokio::select! {
            result = main_fn(writer) => {
                match result {
                    Ok(()) => std::process::exit(0),
                    Err(e) => {
                        eprintln!("{}: {}", self.name, e);
                        std::process::exit(1);
                    }
                }
            }
            signal_code = signal_fut => {
                std::process::exit(signal_code);
            }
        }
    }

    /// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
    /// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
    async fn wait_for_signal(&self) -> i32 {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            let (Ok(mut sigterm), Ok(mut sigint), Ok(mut sighup)) = (
                signal(SignalKind::terminate()),
                signal(SignalKind::interrupt()),
                signal(SignalKind::hangup()),
            ) else {
                warn!("Failed to install signal handlers");
                return std::future::pending().await;
            };

            tokio::select! {
                _ = sigterm.recv() => {
                    eprintln!("Received SIGTERM");
                    143 // 128 + 15
                }
                _ = sigint.recv() => {
                    eprintln!("Received SIGINT");
                    130 // 128 + 2
                }
                _ = sighup.recv() => {
                    eprintln!("Received SIGHUP");
                    129 // 128 + 1
                }
            }
        }

        #[cfg(not(unix))]
        {
            if tokio::signal::ctrl_c().await.is_err() {
                warn!("Failed to install Ctrl+C handler");
                return std::future::pending().await;
            }
            eprintln!("Received Ctrl+C");
            130
        }
    }
}
