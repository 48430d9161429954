use std::fs;
use std::path::Path;

use scheduler::Process;
use tracing::debug;

use crate::error::{InputError, Result, RunnerError};

/// Reads the batch of processes from `path`.
pub fn load(path: &Path) -> Result<Vec<Process>> {
    let text = fs::read_to_string(path).map_err(|source| RunnerError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let processes = parse(&text).map_err(|source| RunnerError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), processes = processes.len(), "input loaded");

    Ok(processes)
}

/// Parses one process per line. Blank lines are skipped.
pub fn parse(text: &str) -> std::result::Result<Vec<Process>, InputError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            line.parse().map_err(|reason| InputError {
                line: index + 1,
                reason,
            })
        })
        .collect()
}
