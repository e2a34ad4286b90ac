//! Logging configuration using tracing
//!
//! The TUI owns the terminal, so logs go to a daily-rolling file instead
//! of stderr.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_PREFIX: &str = "flatdeck.log";

/// Initialize the logging subsystem
///
/// Logs are written to `<data-local-dir>/flatdeck/logs/`.
/// Log level is controlled by the `FLATDECK_LOG` environment variable:
///
/// ```bash
/// FLATDECK_LOG=debug cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    // Default to info, allow override via FLATDECK_LOG
    let env_filter = EnvFilter::try_from_env("FLATDECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("flatdeck=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "flatdeck logging initialized"
    );

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("flatdeck").join("logs")
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_PREFIX)
}
