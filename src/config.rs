//! Runtime configuration resolved from CLI arguments and the environment.
//!
//! Worker count and gather timeout come from the environment rather than
//! flags: the pool size is a property of where the tool runs, not of the
//! query being asked.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::{Cli, OutputFormat};

/// Worker pool size; unset, empty, or 0 means one worker per logical CPU.
pub const WORKERS_ENV: &str = "TAGRANK_WORKERS";

/// Gather timeout override, in seconds.
pub const GATHER_TIMEOUT_ENV: &str = "TAGRANK_GATHER_TIMEOUT";

const DEFAULT_GATHER_TIMEOUT_SECS: u64 = 300;

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct RankConfig {
    pub input: PathBuf,
    pub top: usize,
    pub output_format: OutputFormat,
    pub show_stats: bool,
    pub workers: usize,
    pub gather_timeout: Duration,
}

impl RankConfig {
    /// Build the configuration from parsed CLI arguments plus the
    /// environment.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            input: cli.file.clone(),
            top: cli.top,
            output_format: cli.output_format,
            show_stats: cli.stats,
            workers: workers_from(std::env::var(WORKERS_ENV).ok().as_deref()),
            gather_timeout: gather_timeout_from(
                std::env::var(GATHER_TIMEOUT_ENV).ok().as_deref(),
            ),
        }
    }
}

fn workers_from(value: Option<&str>) -> usize {
    match value.map(str::trim).and_then(|v| v.parse::<usize>().ok()) {
        Some(n) if n > 0 => n,
        _ => num_cpus::get(),
    }
}

fn gather_timeout_from(value: Option<&str>) -> Duration {
    let secs = match value.map(str::trim).and_then(|v| v.parse::<u64>().ok()) {
        Some(n) if n > 0 => n,
        _ => DEFAULT_GATHER_TIMEOUT_SECS,
    };
    Duration::from_secs(secs)
}
