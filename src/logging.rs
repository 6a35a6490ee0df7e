//! Tracing subscriber setup.
//!
//! The panel owns the terminal, so it only logs when a log directory is
//! given. Print mode falls back to stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{Error, Result};

const LOG_FILE: &str = "secretgen.log";
const FILTER_ENV: &str = "SECRETGEN_LOG";

/// Install the global subscriber. The returned guard must outlive all
/// logging so buffered lines are flushed.
pub fn init(log_dir: Option<&Path>, level: &str, stderr: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(dir)?;
        let appender = tracing_appender::rolling::never(dir, LOG_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .try_init()
            .map_err(|e| Error::Logging(e.to_string()))?;
        return Ok(Some(guard));
    }

    if stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| Error::Logging(e.to_string()))?;
    }
    Ok(None)
}
