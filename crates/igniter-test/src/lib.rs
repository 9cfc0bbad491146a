//! Igniter Test - Shared fixtures for the igniter crates.
//!
//! Sample configs for every supported schema version, foreign documents in
//! gzipped form, and a log capture helper for tests that want to see the
//! pipeline's tracing output.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! igniter-test.workspace = true
//! ```
//!
//! Then use in your tests:
//!
//! ```rust,ignore
//! use igniter_test::{GZIPPED_SCRIPT, SAMPLE_CONFIGS};
//!
//! #[test]
//! fn test_every_sample_parses() {
//!     for (label, raw) in SAMPLE_CONFIGS {
//!         let (config, _) = igniter_config::parse(raw.as_bytes());
//!         assert!(config.is_ok(), "{label}");
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod fixtures;

pub use fixtures::*;
