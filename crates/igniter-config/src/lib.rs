#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Parsing of machine provisioning configs.
//!
//! A raw blob goes through four stages:
//!
//! 1. **Sniff**: reject empty input, cloud-init documents and shell scripts
//!    with distinct errors, transparently expanding gzip first.
//! 2. **Resolve**: read the version marker and admit it against
//!    [`SUPPORTED_VERSIONS`].
//! 3. **Decode**: deserialize under that version's schema.
//! 4. **Translate**: upgrade hop by hop to the latest schema, recording
//!    anything lossy in a [`Report`].
//!
//! # Usage
//!
//! ```rust
//! use igniter_config::{Config, ConfigError};
//!
//! let (config, report) = Config::parse(br#"{"ignition": {"version": "2.2.0"}}"#);
//! assert_eq!(config.unwrap().ignition.version, "3.0.0-experimental");
//! assert!(report.is_empty());
//!
//! let (config, _) = Config::parse(b"#!/bin/sh\necho hi\n");
//! assert!(matches!(config, Err(ConfigError::Script)));
//! ```
//!
//! The pipeline is a pure function of its input. It does no I/O and keeps
//! no state between calls. Gzip expansion is unbounded, so callers handling
//! untrusted input should cap its size before parsing.

/// Error kinds of the pipeline.
pub mod error;
/// Top-level entry point.
pub mod parse;
/// Non-fatal diagnostics.
pub mod report;
/// Version marker extraction.
pub mod resolve;
/// Per-version config shapes.
pub mod schema;
/// Byte-level format detection.
pub mod sniff;
/// Version-to-version upgrades.
pub mod translate;
/// Version tags and the supported set.
pub mod version;

pub use error::{ConfigError, ConfigResult, Position};
pub use parse::parse;
pub use report::{Entry, EntryKind, Report};
pub use resolve::resolve;
pub use sniff::{FormatClass, Sniffed, sniff};
pub use translate::{VersionedConfig, translate};
pub use version::{SUPPORTED_VERSIONS, SchemaVersion, SupportedVersion, VersionTag};

/// A config in the latest schema, the only shape handed to consumers.
pub type Config = schema::latest::Config;

impl Config {
    /// Parse a raw blob into the latest config shape.
    ///
    /// See [`parse()`].
    #[must_use]
    pub fn parse(raw: &[u8]) -> (ConfigResult<Self>, Report) {
        parse::parse(raw)
    }
}
