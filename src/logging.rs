//! Logging infrastructure for the expense tracker
//!
//! Standard output belongs to the interactive menu, so logs go to a
//! daily-rolling file under the data directory's `logs/` folder.

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};

/// File name prefix of the log file
pub const LOG_FILE_NAME: &str = "expense-tracker.log";

/// Initialize the logging system
///
/// The level comes from `RUST_LOG` when set, otherwise from `level`.
pub fn init(paths: &ExpensePaths, level: &str) -> ExpenseResult<LoggingGuard> {
    let log_dir = paths.log_dir();
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| ExpenseError::Io(format!("Failed to create log directory: {}", e)))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| ExpenseError::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::info!(log_dir = %log_dir.display(), level, "Logging initialized");

    Ok(LoggingGuard { _guard: guard })
}

/// Keeps the background log writer alive; pending lines are flushed on drop
pub struct LoggingGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}
