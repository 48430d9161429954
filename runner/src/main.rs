//! Multi-level CPU scheduler simulator
//!
//! Reads a batch of processes, runs them through the four ready
//! queues, writes the trace to a file and prints the final order
//! of every queue.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use processor::{Config, Processor, Trace};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod input;

use error::RunnerError;

#[derive(Parser, Debug)]
#[command(name = "cpu-scheduler")]
#[command(about = "Simulate a multi-level CPU scheduler", long_about = None)]
struct Cli {
    /// Process list, one `id,arrival,priority,burst,ram,cpu` record per line
    input: PathBuf,

    /// Trace output file
    #[arg(short, long, default_value = "output.txt", env = "CPU_SCHEDULER_OUTPUT")]
    output: PathBuf,

    /// Quantum of the priority 2 round robin queue
    #[arg(long, default_value = "8")]
    medium_quantum: NonZeroUsize,

    /// Quantum of the priority 3 round robin queue
    #[arg(long, default_value = "16")]
    low_quantum: NonZeroUsize,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            medium_quantum: self.medium_quantum,
            low_quantum: self.low_quantum,
            ..Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let processes = input::load(&cli.input).context("loading processes")?;
    let report = Processor::new(cli.config()).run(processes);

    save(&cli.output, &report.trace).context("saving trace")?;
    info!(path = %cli.output.display(), lines = report.trace.len(), "trace written");

    for line in report.summary() {
        println!("{line}");
    }

    Ok(())
}

fn save(path: &Path, trace: &Trace) -> error::Result<()> {
    fs::write(path, trace.to_string()).map_err(|source| RunnerError::Write {
        path: path.to_path_buf(),
        source,
    })
}

// Do not delete this line
#[cfg(test)]
mod tests;
