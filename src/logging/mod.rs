//! Tracing subscriber setup.
//!
//! Logs go to a file, never to stdout, which carries the host's output.
//! Follow them with `tail -f` in a separate terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Build a dispatch that appends to `log_path`.
///
/// Respects `RUST_LOG`, defaults to "info". Creates the log directory if it
/// doesn't exist. The dispatch can be installed globally with [`init`] or
/// handed to a single `ReviewsController`.
pub fn file_dispatch(log_path: &Path) -> Result<Dispatch, LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    dispatch_with_filter(log_path, filter)
}

/// Install a file-backed subscriber as the global default.
///
/// # Errors
/// * `LoggingError::SubscriberAlreadySet` if a global subscriber exists
/// * directory or path errors from [`file_dispatch`]
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let dispatch = file_dispatch(log_path)?;
    tracing::dispatcher::set_global_default(dispatch)
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

fn dispatch_with_filter(log_path: &Path, filter: EnvFilter) -> Result<Dispatch, LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    // A bare file name logs into the working directory
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .finish();

    Ok(Dispatch::new(subscriber))
}
