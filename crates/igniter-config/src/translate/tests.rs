use igniter_test::SAMPLE_CONFIGS;
use serde_json::Value;

use super::*;
use crate::resolve::resolve;

fn decoded(raw: &str) -> VersionedConfig {
    let document: Value = serde_json::from_str(raw).unwrap();
    let schema = resolve(&document).unwrap();
    VersionedConfig::decode(schema, document).unwrap()
}

#[test]
fn test_samples_decode_under_their_own_schema() {
    let versions: Vec<_> = SAMPLE_CONFIGS
        .iter()
        .map(|(_, raw)| decoded(raw).schema_version())
        .collect();
    assert_eq!(versions, SchemaVersion::PATH.to_vec());
}

#[test]
fn test_upgrade_is_single_step() {
    let mut report = Report::new();
    let config = decoded(SAMPLE_CONFIGS[0].1).upgrade(&mut report);
    assert_eq!(config.schema_version(), SchemaVersion::V2_0);
}

#[test]
fn test_upgrade_at_latest_is_identity() {
    let latest = decoded(SAMPLE_CONFIGS[SAMPLE_CONFIGS.len().saturating_sub(1)].1);
    let mut report = Report::new();
    assert_eq!(latest.clone().upgrade(&mut report), latest);
    assert!(report.is_empty());
}

#[test]
fn test_upgrade_to_older_target_is_noop() {
    let config = decoded(SAMPLE_CONFIGS[3].1);
    let mut report = Report::new();
    let same = config.clone().upgrade_to(SchemaVersion::V2_0, &mut report);
    assert_eq!(same, config);
}

#[test]
fn test_decode_rejects_mistyped_fields() {
    let document = serde_json::json!({
        "ignition": {"version": "2.2.0"},
        "storage": {"files": "not-a-list"}
    });
    let err = VersionedConfig::decode(SchemaVersion::V2_2, document).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn test_chain_composes_through_every_intermediate() {
    igniter_test::init_test_logging();
    for (label, raw) in SAMPLE_CONFIGS {
        let mut direct_report = Report::new();
        let direct = decoded(raw).into_latest(&mut direct_report);

        let start = decoded(raw).schema_version();
        for stop in SchemaVersion::PATH.into_iter().filter(|v| *v >= start) {
            let mut report = Report::new();
            let partial = decoded(raw).upgrade_to(stop, &mut report);
            assert_eq!(partial.schema_version(), stop, "{label}");

            let reencoded = VersionedConfig::decode(stop, partial.to_json().unwrap()).unwrap();
            let composed = reencoded.into_latest(&mut report);

            assert_eq!(composed, direct, "{label} via {stop}");
            assert_eq!(report, direct_report, "{label} via {stop}");
        }
    }
}

#[test]
fn test_latest_is_a_fixed_point() {
    for (label, raw) in SAMPLE_CONFIGS {
        let mut report = Report::new();
        let once = decoded(raw).into_latest(&mut report);

        let json = serde_json::to_value(&once).unwrap();
        let mut again_report = Report::new();
        let twice = VersionedConfig::decode(SchemaVersion::LATEST, json)
            .unwrap()
            .into_latest(&mut again_report);

        assert_eq!(twice, once, "{label}");
        assert!(again_report.is_empty(), "{label}");
    }
}

#[test]
fn test_translate_stamps_latest_version() {
    let document: Value = serde_json::from_str(SAMPLE_CONFIGS[1].1).unwrap();
    let (config, report) = translate(SchemaVersion::V2_0, document).unwrap();
    assert_eq!(config.ignition.version, "3.0.0-experimental");
    assert!(!report.is_empty());
}
