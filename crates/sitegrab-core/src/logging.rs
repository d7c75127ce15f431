//! Tracing setup.
//!
//! Stdout carries the interactive prompt and result lines, so records go to a
//! file in the XDG state dir, or to stderr when that file is unavailable.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,sitegrab_core=debug,sitegrab_cli=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/sitegrab/sitegrab.log`, with its directory created.
fn log_file_path() -> Result<PathBuf> {
    let log_dir = xdg::BaseDirectories::with_prefix("sitegrab")?
        .get_state_home()
        .join("sitegrab");
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log dir: {}", log_dir.display()))?;
    Ok(log_dir.join("sitegrab.log"))
}

/// Appends records to the state-dir log file and returns its path.
///
/// Errors leave no subscriber installed, so the caller can use [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!("sitegrab logging initialized at {}", path.display());
    Ok(path)
}

/// Records to stderr only.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
