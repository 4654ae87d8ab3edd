//! File logging for rickdex
//!
//! The TUI owns the terminal and headless mode owns stdout, so every log
//! line goes to a rolling file under the platform data directory:
//! `~/.local/share/rickdex/logs/rickdex.YYYY-MM-DD.log` on Linux.
//!
//! `RICKDEX_LOG` takes `EnvFilter` directives, e.g. `RICKDEX_LOG=debug` or
//! `RICKDEX_LOG=rickdex_api=trace,info`.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding filter directives
pub const LOG_ENV_VAR: &str = "RICKDEX_LOG";

/// Used when `RICKDEX_LOG` is unset or unparsable
const DEFAULT_DIRECTIVES: &str = "rickdex=info,warn";

/// Daily files kept before the oldest is removed
const MAX_LOG_FILES: usize = 7;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Install the global subscriber. Returns the directory logs are written to.
pub fn init() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    let log_dir = log_directory(&base);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("rickdex")
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(&log_dir)
        .map_err(|e| Error::logging(format!("Cannot open log file in {:?}: {}", log_dir, e)))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string())),
        )
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    tracing::info!("Logging to {}", log_dir.display());
    Ok(log_dir)
}

/// `{base}/rickdex/logs`
fn log_directory(base: &Path) -> PathBuf {
    base.join("rickdex").join("logs")
}

/// Filter from `RICKDEX_LOG`, falling back to [`DEFAULT_DIRECTIVES`]
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}
