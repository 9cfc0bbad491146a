//! End-to-end behaviour of `parse` on minimal and foreign inputs.

mod common;

use common::{bare_latest, parse_str, rejection, versioned};
use igniter_config::{ConfigError, SUPPORTED_VERSIONS, SchemaVersion};
use igniter_test::{GZIPPED_CLOUD_CONFIG, GZIPPED_SCRIPT, UNKNOWN_VERSIONS, gzip};

#[test]
fn test_every_supported_version_translates_to_latest() {
    for supported in SUPPORTED_VERSIONS.entries() {
        if supported.schema == SchemaVersion::V1 {
            continue;
        }
        let raw = versioned(&supported.schema.tag().to_string());
        let (config, report) = parse_str(&raw);
        assert_eq!(config.unwrap(), bare_latest(), "{raw}");
        assert!(report.is_empty(), "{raw}");
    }
}

#[test]
fn test_legacy_marker_matches_oldest_stable() {
    let (legacy, _) = parse_str(r#"{"ignitionVersion": 1}"#);
    let (oldest, _) = parse_str(&versioned("2.0.0"));
    assert_eq!(legacy.unwrap(), oldest.unwrap());
}

#[test]
fn test_legacy_marker_is_read_before_the_string_marker() {
    let (oldest, _) = parse_str(&versioned("2.0.0"));
    let oldest = oldest.unwrap();

    let (legacy, _) = parse_str(r#"{"ignitionVersion": 1, "ignition": {"version": 2}}"#);
    assert_eq!(legacy.unwrap(), oldest);

    let (stray, _) = parse_str(r#"{"ignitionVersion": "x", "ignition": {"version": "2.2.0"}}"#);
    assert_eq!(stray.unwrap(), bare_latest());
}

#[test]
fn test_patch_releases_of_stable_versions_are_admitted() {
    let (config, _) = parse_str(&versioned("2.2.3"));
    assert_eq!(config.unwrap(), bare_latest());
}

#[test]
fn test_unknown_versions() {
    for version in UNKNOWN_VERSIONS {
        assert!(
            matches!(rejection(versioned(version).as_bytes()), ConfigError::UnknownVersion),
            "{version}"
        );
    }
}

#[test]
fn test_missing_marker_is_unknown() {
    assert!(matches!(rejection(b"{}"), ConfigError::UnknownVersion));
    assert!(matches!(
        rejection(br#"{"ignition": {}}"#),
        ConfigError::UnknownVersion
    ));
}

#[test]
fn test_empty_input() {
    assert!(matches!(rejection(b""), ConfigError::Empty));
    assert!(matches!(rejection(&gzip(b"")), ConfigError::Empty));
}

#[test]
fn test_syntax_errors_are_invalid_not_unknown() {
    for raw in [
        &br#"{"ignition":{"version":"2.0.0"},}"#[..],
        b"{",
        b"[1, 2",
        b"ignition",
    ] {
        assert!(
            matches!(rejection(raw), ConfigError::Invalid { .. }),
            "{}",
            String::from_utf8_lossy(raw)
        );
    }
}

#[test]
fn test_wrong_shapes_are_invalid() {
    for raw in [
        r#"[{"ignition":{"version":"2.0.0"}}]"#,
        r#"{"ignition":{"version":2}}"#,
        r#"{"ignition":{"version":"2.1.0"},"storage":{"files":{}}}"#,
        r#"{"ignitionVersion":1,"systemd":{"units":[{"name":7}]}}"#,
    ] {
        assert!(
            matches!(rejection(raw.as_bytes()), ConfigError::Invalid { .. }),
            "{raw}"
        );
    }
}

#[test]
fn test_cloud_config() {
    for raw in [
        &b"#cloud-config"[..],
        b"#cloud-config ",
        b"#cloud-config\n\r",
        b"#cloud-config\nhostname: node1\n",
        GZIPPED_CLOUD_CONFIG,
    ] {
        assert!(matches!(rejection(raw), ConfigError::CloudConfig));
    }
    assert!(matches!(
        rejection(&gzip(b"#cloud-config\nusers: []\n")),
        ConfigError::CloudConfig
    ));
}

#[test]
fn test_scripts() {
    for raw in [&b"#!/bin/sh"[..], b"#!/usr/bin/env bash\necho hi\n", GZIPPED_SCRIPT] {
        assert!(matches!(rejection(raw), ConfigError::Script));
    }
}

#[test]
fn test_gzipped_config_equals_plain() {
    let plain = versioned("2.3.0");
    let (from_plain, _) = parse_str(&plain);
    let (from_gzip, _) = igniter_config::parse(&gzip(plain.as_bytes()));
    assert_eq!(from_plain.unwrap(), from_gzip.unwrap());
}

#[test]
fn test_gzip_is_expanded_only_once() {
    let twice = gzip(&gzip(versioned("2.3.0").as_bytes()));
    assert!(matches!(rejection(&twice), ConfigError::Invalid { .. }));
}
