//! Error types for review-feed.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`] in the host binary.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the host binary
//!   - [`RowError`] - Geometry requested for a row index failed
//!     - [`LayoutError`] - Measurement called with an unusable width
//!     - [`RowIndexOutOfRange`] - Rendering layer asked for a row that does not exist
//!   - [`LoadFailure`] - Recorded outcome of a failed load
//!   - `ConfigError` / `LoggingError` - Startup failures of the host
//! - [`SourceError`] - Data source could not deliver records
//!
//! # Recovery Strategy
//!
//! `LayoutError` and `RowIndexOutOfRange` are contract violations between the
//! rendering layer and the core: they mean the two have desynchronized and are
//! not meant to be recovered. A `SourceError` is the only recoverable failure:
//! the controller records it as [`LoadFailure`] in its load phase and the
//! caller may retry with a new load.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level error of the host binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file or environment override was unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log file subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// A row could not be laid out.
    #[error("Row layout failed: {0}")]
    Row(#[from] RowError),

    /// Load finished in the failed phase.
    #[error("Load failed: {0}")]
    Load(LoadFailure),
}

/// Failure to produce geometry for a row index.
///
/// Both variants are contract violations by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RowError {
    /// The width was unusable.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The index was outside the list.
    #[error(transparent)]
    Index(#[from] RowIndexOutOfRange),
}

/// Errors raised by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// The available width was zero, negative or not a finite number.
    ///
    /// The engine does not clamp caller-supplied widths; a correctly
    /// implemented rendering layer never passes such a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use review_feed::model::error::LayoutError;
    ///
    /// let err = LayoutError::InvalidConstraint { width: -1.0 };
    /// assert!(err.to_string().contains("-1"));
    /// ```
    #[error("Invalid width constraint: {width} (must be a finite number > 0)")]
    InvalidConstraint {
        /// The rejected width.
        width: f64,
    },
}

/// A row index outside `[0, row_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Row index {index} out of range (row count {len})")]
pub struct RowIndexOutOfRange {
    /// The requested index.
    pub index: usize,
    /// Row count at the time of the request.
    pub len: usize,
}

/// Failures of a data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading the backing file failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The payload was not a valid reviews document.
    #[error("Malformed reviews payload: {0}")]
    Decode(String),

    /// The source could not produce records (transport down, request dropped).
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// A failed load as recorded in the controller's load phase.
///
/// Carries the rendered message of the originating `SourceError` so the
/// phase stays `Clone + Eq` for observers and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadFailure {
    /// Rendered source error.
    pub message: String,
}

impl From<&SourceError> for LoadFailure {
    fn from(err: &SourceError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}
