//! Igniter Telemetry - Logging setup for the igniter binaries.
//!
//! The config library only emits `tracing` events. This crate installs the
//! subscriber that renders them, in one of several formats, to stdout,
//! stderr or a rolling file.
//!
//! # Example
//!
//! ```rust,no_run
//! use igniter_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), igniter_telemetry::TelemetryError> {
//! let config = LogConfig::new("warn")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("igniter_config=debug");
//!
//! setup_logging(&config)?;
//! tracing::debug!("Logging ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{FileRotation, LogConfig, LogFormat, LogTarget, setup_logging};
