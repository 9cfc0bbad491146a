//! Version marker extraction.
//!
//! A document declares its version either with the legacy top-level
//! integer `ignitionVersion` (only `1` is meaningful) or with the string
//! at `ignition.version`. A legacy marker of `1` wins without the string
//! being read; any other legacy value is ignored.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::version::{SUPPORTED_VERSIONS, SchemaVersion, VersionTag};

/// Name of the legacy integer version field.
pub const LEGACY_VERSION_FIELD: &str = "ignitionVersion";

/// Value of the legacy field that selects the legacy schema.
const LEGACY_VERSION: i64 = 1;

/// The string marker; everything else in the document is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VersionProbe {
    ignition: Option<IgnitionProbe>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IgnitionProbe {
    version: Option<String>,
}

/// Determine which schema a parsed JSON document should be decoded with.
///
/// # Errors
///
/// - [`ConfigError::Invalid`] if the document is not a JSON object or the
///   string marker has the wrong JSON type.
/// - [`ConfigError::UnknownVersion`] if no marker is present, the string is
///   not a valid version, or the version is not supported.
pub fn resolve(document: &Value) -> ConfigResult<SchemaVersion> {
    if !document.is_object() {
        return Err(ConfigError::Invalid {
            reason: "config must be a JSON object".to_owned(),
            position: None,
        });
    }

    if document.get(LEGACY_VERSION_FIELD).and_then(Value::as_i64) == Some(LEGACY_VERSION) {
        debug!("legacy version marker found");
        return Ok(SchemaVersion::V1);
    }

    let probe = VersionProbe::deserialize(document)
        .map_err(|e| ConfigError::from_json("malformed version marker", &e))?;

    let Some(raw) = probe.ignition.and_then(|i| i.version) else {
        debug!("no version marker found");
        return Err(ConfigError::UnknownVersion);
    };

    let tag: VersionTag = raw.parse().map_err(|e| {
        debug!(version = %raw, error = %e, "unparsable config version");
        ConfigError::UnknownVersion
    })?;

    match SUPPORTED_VERSIONS.admit(&tag) {
        Some(schema) => {
            debug!(version = %tag, schema = %schema, "resolved config version");
            Ok(schema)
        },
        None => {
            debug!(version = %tag, "config version not supported");
            Err(ConfigError::UnknownVersion)
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_legacy_marker() {
        assert_eq!(
            resolve(&json!({"ignitionVersion": 1})).unwrap(),
            SchemaVersion::V1
        );
    }

    #[test]
    fn test_legacy_marker_wins_over_string() {
        let doc = json!({"ignitionVersion": 1, "ignition": {"version": "2.2.0"}});
        assert_eq!(resolve(&doc).unwrap(), SchemaVersion::V1);
    }

    #[test]
    fn test_legacy_marker_ignores_malformed_string_marker() {
        for doc in [
            json!({"ignitionVersion": 1, "ignition": {"version": 2}}),
            json!({"ignitionVersion": 1, "ignition": "2.2.0"}),
        ] {
            assert_eq!(resolve(&doc).unwrap(), SchemaVersion::V1, "{doc}");
        }
    }

    #[test]
    fn test_non_integer_legacy_marker_is_ignored() {
        let doc = json!({"ignitionVersion": "x", "ignition": {"version": "2.2.0"}});
        assert_eq!(resolve(&doc).unwrap(), SchemaVersion::V2_2);

        let doc = json!({"ignitionVersion": "1"});
        assert!(matches!(resolve(&doc), Err(ConfigError::UnknownVersion)));
    }

    #[test]
    fn test_other_legacy_values_fall_through() {
        let doc = json!({"ignitionVersion": 2});
        assert!(matches!(resolve(&doc), Err(ConfigError::UnknownVersion)));

        let doc = json!({"ignitionVersion": 2, "ignition": {"version": "2.1.0"}});
        assert_eq!(resolve(&doc).unwrap(), SchemaVersion::V2_1);
    }

    #[test]
    fn test_string_marker() {
        let doc = json!({"ignition": {"version": "2.3.0"}});
        assert_eq!(resolve(&doc).unwrap(), SchemaVersion::V2_3);
    }

    #[test]
    fn test_missing_marker_is_unknown() {
        assert!(matches!(resolve(&json!({})), Err(ConfigError::UnknownVersion)));
        assert!(matches!(
            resolve(&json!({"ignition": {}})),
            Err(ConfigError::UnknownVersion)
        ));
        assert!(matches!(
            resolve(&json!({"ignition": {"version": null}})),
            Err(ConfigError::UnknownVersion)
        ));
    }

    #[test]
    fn test_bad_string_is_unknown_not_invalid() {
        let doc = json!({"ignition": {"version": "invalid.semver"}});
        assert!(matches!(resolve(&doc), Err(ConfigError::UnknownVersion)));
    }

    #[test]
    fn test_string_one_point_oh_is_unknown() {
        let doc = json!({"ignition": {"version": "1.0.0"}});
        assert!(matches!(resolve(&doc), Err(ConfigError::UnknownVersion)));
    }

    #[test]
    fn test_wrong_marker_types_are_invalid() {
        for doc in [
            json!({"ignition": {"version": 2}}),
            json!({"ignition": "2.0.0"}),
        ] {
            assert!(
                matches!(resolve(&doc), Err(ConfigError::Invalid { .. })),
                "expected Invalid for {doc}"
            );
        }
    }

    #[test]
    fn test_non_object_is_invalid() {
        for doc in [json!([]), json!("2.0.0"), json!(1), json!(null)] {
            assert!(matches!(resolve(&doc), Err(ConfigError::Invalid { .. })));
        }
    }
}
