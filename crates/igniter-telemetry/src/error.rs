//! Telemetry error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up logging.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A level or per-target directive is not a valid filter.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// The offending level or directive.
        directive: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A log format name that is not one of the supported formats.
    #[error("unknown log format '{0}' (expected pretty, compact, json or full)")]
    UnknownFormat(String),

    /// A global subscriber is already installed.
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),

    /// The log directory could not be created.
    #[error("cannot create log directory {}: {source}", .path.display())]
    LogDirectory {
        /// Directory that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
