//! Shared helpers for integration tests.

use igniter_config::{Config, ConfigError, Report};

/// Parse a config given as text.
#[allow(dead_code)]
pub fn parse_str(raw: &str) -> (Result<Config, ConfigError>, Report) {
    igniter_config::parse(raw.as_bytes())
}

/// A document declaring `version` and nothing else.
#[allow(dead_code)]
pub fn versioned(version: &str) -> String {
    format!(r#"{{"ignition":{{"version":"{version}"}}}}"#)
}

/// The config every minimal document translates to.
#[allow(dead_code)]
pub fn bare_latest() -> Config {
    let mut config = Config::default();
    igniter_config::SchemaVersion::LATEST
        .tag()
        .to_string()
        .clone_into(&mut config.ignition.version);
    config
}

/// Parse `raw` and return the error, failing the test on success.
#[allow(dead_code)]
pub fn rejection(raw: &[u8]) -> ConfigError {
    match igniter_config::parse(raw).0 {
        Ok(config) => panic!("expected an error, got {config:?}"),
        Err(e) => e,
    }
}
