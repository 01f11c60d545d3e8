use crate::constants::env::{DEFAULT_LOG_DIRECTIVE, LOG_FILE_NAME};
use crate::error::PinError;
use crate::theme::paths::get_log_dir_path;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Builds the filter used by the file layer: `RUST_LOG` plus the crate default.
fn log_filter() -> Result<EnvFilter, PinError> {
    let directive = DEFAULT_LOG_DIRECTIVE
        .parse()
        .map_err(|e| PinError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sends spinner diagnostics to a daily rolling log file.
///
/// Logging to the terminal would tear the animated line, so diagnostics only
/// ever go to a file:
/// - Uses `log_dir` or the platform default log directory
/// - Creates the log directory if it doesn't exist
/// - Honors `RUST_LOG` on top of `pin_spinner=info`
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_file_logging(
    log_dir: Option<&str>,
    log_file_name: Option<&str>,
) -> Result<(String, WorkerGuard), PinError> {
    let log_dir = log_dir
        .map(str::to_string)
        .unwrap_or_else(get_log_dir_path);
    let log_file_name = log_file_name.unwrap_or(LOG_FILE_NAME);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            PinError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, log_file_name);

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(log_filter()?),
        )
        .try_init()
        .map_err(|e| PinError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    tracing::info!("Logs are being written to: {log_file_path}");
    Ok((log_file_path, guard))
}
