//! Error types for the runner

use std::path::PathBuf;

use scheduler::ParseProcessError;
use thiserror::Error;

/// Result type for runner operations
pub type Result<T> = std::result::Result<T, RunnerError>;

/// A record of the input file that could not be parsed.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct InputError {
    pub line: usize,
    pub reason: ParseProcessError,
}

/// Error type for runner operations
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("cannot read input file {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed input file {}", path.display())]
    Parse {
        path: PathBuf,
        source: InputError,
    },

    #[error("cannot write trace to {}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
