//! Configuration error types.
//!
//! The set of variants is closed: every input that cannot be normalized
//! lands in exactly one of them.

use thiserror::Error;

/// Line and column of a syntax or shape error inside the JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// One-based line number.
    pub line: usize,
    /// One-based column number.
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Reasons a raw blob could not be turned into a latest-version config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The blob was zero bytes long.
    #[error("config is empty")]
    Empty,

    /// The blob is a cloud-init document, not a provisioning config.
    #[error("config is a cloud-config document")]
    CloudConfig,

    /// The blob is a shell script, not a provisioning config.
    #[error("config is a script")]
    Script,

    /// The blob is malformed: bad gzip stream, bad JSON syntax, or JSON
    /// whose shape does not match its declared version.
    #[error("config is not valid: {reason}")]
    Invalid {
        /// What went wrong.
        reason: String,
        /// Where in the document it went wrong, when known.
        position: Option<Position>,
    },

    /// The version marker is missing, unparsable, or not supported.
    #[error("unsupported config version")]
    UnknownVersion,
}

impl ConfigError {
    /// Build an [`Invalid`](Self::Invalid) error from a `serde_json` failure,
    /// keeping its position when serde reported one.
    pub(crate) fn from_json(context: &str, err: &serde_json::Error) -> Self {
        let position = (err.line() > 0).then(|| Position {
            line: err.line(),
            column: err.column(),
        });
        Self::Invalid {
            reason: format!("{context}: {err}"),
            position,
        }
    }
}

/// Result type for config parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;
