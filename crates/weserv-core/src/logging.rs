//! Logging init for the `weserv` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary. Events go to `$XDG_STATE_HOME/weserv/weserv.log` so that stdout
//! stays reserved for the generated URL.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,weserv=debug,weserv_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Opens (appending) the log file, creating the state directory on first use.
fn open_log_file() -> Result<(File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("weserv")?;
    let path = xdg_dirs
        .place_state_file("weserv.log")
        .context("create weserv state dir")?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok((file, path))
}

/// Install a subscriber writing to the state-dir log file.
/// Returns Err if the file cannot be opened; callers fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let (file, path) = open_log_file()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::debug!("logging to {}", path.display());
    Ok(())
}

/// Install a stderr subscriber. A no-op if one is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
