//! Diagnostic logging setup.
//!
//! The login screen owns stdout/stderr, so logs go to a file under
//! `<SESAM_HOME>/logs`. The `SESAM_LOG` environment variable selects the
//! filter (same syntax as `RUST_LOG`); default is `info`.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Log filename inside the logs directory.
const LOG_FILE: &str = "sesam.log";

/// Installs the global tracing subscriber writing to the log file.
///
/// Returns the appender worker guard; keep it alive for the process lifetime
/// or buffered log lines are dropped on exit.
///
/// # Errors
/// Returns an error if the logs directory cannot be created or a subscriber
/// is already installed.
pub fn init() -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("SESAM_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))?;

    Ok(guard)
}
