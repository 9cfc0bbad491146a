//! The full pipeline: sniff, resolve, decode, translate.

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::report::Report;
use crate::resolve::resolve;
use crate::schema::latest;
use crate::sniff::{FormatClass, sniff};
use crate::translate::VersionedConfig;

/// Turn a raw config blob into the latest config shape.
///
/// The report is returned in every case. On failure it holds whatever was
/// recorded before the failing stage, which today is nothing since only
/// translation hops write to it.
#[must_use]
pub fn parse(raw: &[u8]) -> (ConfigResult<latest::Config>, Report) {
    let mut report = Report::new();
    let result = run(raw, &mut report);
    match &result {
        Ok(config) => info!(
            version = %config.ignition.version,
            entries = report.len(),
            "Parsed config"
        ),
        Err(e) => debug!(error = %e, "Rejected config"),
    }
    (result, report)
}

fn run(raw: &[u8], report: &mut Report) -> ConfigResult<latest::Config> {
    let sniffed = sniff(raw)?;
    match sniffed.class {
        FormatClass::Empty => return Err(ConfigError::Empty),
        FormatClass::CloudConfig => return Err(ConfigError::CloudConfig),
        FormatClass::Script => return Err(ConfigError::Script),
        FormatClass::JsonCandidate => {},
    }

    let document: serde_json::Value = serde_json::from_slice(&sniffed.content)
        .map_err(|e| ConfigError::from_json("config is not valid JSON", &e))?;
    let schema = resolve(&document)?;
    Ok(VersionedConfig::decode(schema, document)?.into_latest(report))
}

#[cfg(test)]
mod tests {
    use igniter_test::{GZIPPED_CLOUD_CONFIG, GZIPPED_SCRIPT, gzip};

    use super::*;
    use crate::report::EntryKind;
    use crate::version::SchemaVersion;

    fn latest_only() -> latest::Config {
        latest::Config {
            ignition: latest::Ignition {
                version: SchemaVersion::LATEST.tag().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn error_of(raw: &[u8]) -> ConfigError {
        parse(raw).0.unwrap_err()
    }

    #[test]
    fn test_minimal_documents_translate_to_bare_latest() {
        for raw in [
            r#"{"ignitionVersion": 1}"#,
            r#"{"ignition": {"version": "2.0.0"}}"#,
            r#"{"ignition": {"version": "2.1.0"}}"#,
            r#"{"ignition": {"version": "2.2.0"}}"#,
            r#"{"ignition": {"version": "2.3.0"}}"#,
            r#"{"ignition": {"version": "2.4.0-experimental"}}"#,
            r#"{"ignition": {"version": "3.0.0-experimental"}}"#,
        ] {
            let (config, report) = parse(raw.as_bytes());
            assert_eq!(config.unwrap(), latest_only(), "{raw}");
            assert!(report.is_empty(), "{raw}");
        }
    }

    #[test]
    fn test_error_classes() {
        assert!(matches!(error_of(b""), ConfigError::Empty));
        assert!(matches!(error_of(b"#cloud-config"), ConfigError::CloudConfig));
        assert!(matches!(error_of(b"#cloud-config "), ConfigError::CloudConfig));
        assert!(matches!(error_of(b"#cloud-config\n\r"), ConfigError::CloudConfig));
        assert!(matches!(error_of(GZIPPED_CLOUD_CONFIG), ConfigError::CloudConfig));
        assert!(matches!(error_of(b"#!/bin/sh"), ConfigError::Script));
        assert!(matches!(error_of(GZIPPED_SCRIPT), ConfigError::Script));
        assert!(matches!(error_of(b"{}"), ConfigError::UnknownVersion));
        assert!(matches!(
            error_of(br#"{"ignition": {"version": "1.0.0"}}"#),
            ConfigError::UnknownVersion
        ));
        assert!(matches!(
            error_of(br#"{"ignition": {"version": "invalid.semver"}}"#),
            ConfigError::UnknownVersion
        ));
        assert!(matches!(
            error_of(br#"{"ignition": {"version": "2.2.0-experimental"}}"#),
            ConfigError::UnknownVersion
        ));
    }

    #[test]
    fn test_trailing_comma_is_invalid_with_position() {
        let err = error_of(br#"{"ignition": {"version": "2.0.0"},}"#);
        match err {
            ConfigError::Invalid { position, .. } => {
                let position = position.unwrap();
                assert_eq!(position.line, 1);
            },
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_gzipped_json_is_parsed() {
        let raw = gzip(br#"{"ignition": {"version": "2.2.0"}}"#);
        let (config, _) = parse(&raw);
        assert_eq!(config.unwrap(), latest_only());
    }

    #[test]
    fn test_corrupt_gzip_is_invalid() {
        let err = error_of(&[0x1f, 0x8b, 0x00, 0x01, 0x02]);
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_gzipped_nothing_is_empty() {
        assert!(matches!(error_of(&gzip(b"")), ConfigError::Empty));
    }

    #[test]
    fn test_lossy_translation_fills_report() {
        let raw = br#"{
            "ignition": {"version": "2.2.0"},
            "systemd": {"units": [{"name": "docker.service", "enable": true}]}
        }"#;
        let (config, report) = parse(raw);
        let config = config.unwrap();
        assert_eq!(config.systemd.units[0].enabled, Some(true));
        assert_eq!(report.of_kind(EntryKind::Deprecated).count(), 1);
    }
}
