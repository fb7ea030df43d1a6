use std::io;
use thiserror::Error;

use crate::engine::EngineError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Run failed: {0}")]
    RunFailed(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
