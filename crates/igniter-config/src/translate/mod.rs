//! Upgrading a parsed config one schema version at a time.
//!
//! Each hop is a total function from one schema to its successor that
//! records anything it could not carry over in a [`Report`]. Hops compose:
//! translating `V → latest` in one go gives the same result as stopping at
//! any intermediate version, re-encoding, re-parsing and continuing.

mod dataurl;
mod v1_to_v2_0;
mod v2_0_to_v2_1;
mod v2_1_to_v2_2;
mod v2_2_to_v2_3;
mod v2_3_to_v2_4;
mod v2_4_to_v3_0;

#[cfg(test)]
mod tests;

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::report::Report;
use crate::schema::{latest, v1, v2_0, v2_1, v2_2, v2_3, v2_4_exp, v3_0_exp};
use crate::version::SchemaVersion;

/// A config decoded under the schema of its declared version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionedConfig {
    /// Legacy (`ignitionVersion: 1`).
    V1(v1::Config),
    /// `2.0.0`.
    V2_0(v2_0::Config),
    /// `2.1.0`.
    V2_1(v2_1::Config),
    /// `2.2.0`.
    V2_2(v2_2::Config),
    /// `2.3.0`.
    V2_3(v2_3::Config),
    /// `2.4.0-experimental`.
    V2_4Experimental(v2_4_exp::Config),
    /// `3.0.0-experimental`.
    V3_0Experimental(v3_0_exp::Config),
}

impl VersionedConfig {
    /// Decode `document` under `schema`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if the document doesn't fit the schema's
    /// shape, e.g. a string where a list is expected.
    pub fn decode(schema: SchemaVersion, document: Value) -> ConfigResult<Self> {
        let context = format!("config does not match schema {schema}");
        let decoded = match schema {
            SchemaVersion::V1 => serde_json::from_value(document).map(Self::V1),
            SchemaVersion::V2_0 => serde_json::from_value(document).map(Self::V2_0),
            SchemaVersion::V2_1 => serde_json::from_value(document).map(Self::V2_1),
            SchemaVersion::V2_2 => serde_json::from_value(document).map(Self::V2_2),
            SchemaVersion::V2_3 => serde_json::from_value(document).map(Self::V2_3),
            SchemaVersion::V2_4Experimental => {
                serde_json::from_value(document).map(Self::V2_4Experimental)
            },
            SchemaVersion::V3_0Experimental => {
                serde_json::from_value(document).map(Self::V3_0Experimental)
            },
        };
        decoded.map_err(|e| ConfigError::from_json(&context, &e))
    }

    /// The schema this config is decoded under.
    #[must_use]
    pub fn schema_version(&self) -> SchemaVersion {
        match self {
            Self::V1(_) => SchemaVersion::V1,
            Self::V2_0(_) => SchemaVersion::V2_0,
            Self::V2_1(_) => SchemaVersion::V2_1,
            Self::V2_2(_) => SchemaVersion::V2_2,
            Self::V2_3(_) => SchemaVersion::V2_3,
            Self::V2_4Experimental(_) => SchemaVersion::V2_4Experimental,
            Self::V3_0Experimental(_) => SchemaVersion::V3_0Experimental,
        }
    }

    /// Apply a single hop. The latest version is returned unchanged.
    #[must_use]
    pub fn upgrade(self, report: &mut Report) -> Self {
        let from = self.schema_version();
        let upgraded = match self {
            Self::V1(c) => Self::V2_0(v1_to_v2_0::translate(c, report)),
            Self::V2_0(c) => Self::V2_1(v2_0_to_v2_1::translate(c, report)),
            Self::V2_1(c) => Self::V2_2(v2_1_to_v2_2::translate(c, report)),
            Self::V2_2(c) => Self::V2_3(v2_2_to_v2_3::translate(c, report)),
            Self::V2_3(c) => Self::V2_4Experimental(v2_3_to_v2_4::translate(c, report)),
            Self::V2_4Experimental(c) => {
                Self::V3_0Experimental(v2_4_to_v3_0::translate(c, report))
            },
            latest @ Self::V3_0Experimental(_) => return latest,
        };
        debug!(from = %from, to = %upgraded.schema_version(), "Applied translation hop");
        upgraded
    }

    /// Upgrade until the config is at `target`, or at the latest version if
    /// `target` is older than the config.
    #[must_use]
    pub fn upgrade_to(mut self, target: SchemaVersion, report: &mut Report) -> Self {
        while self.schema_version() < target {
            self = self.upgrade(report);
        }
        self
    }

    /// Upgrade all the way to the latest version.
    #[must_use]
    pub fn into_latest(self, report: &mut Report) -> latest::Config {
        let mut current = self;
        loop {
            match current {
                Self::V3_0Experimental(config) => return config,
                other => current = other.upgrade(report),
            }
        }
    }

    /// Encode back to JSON under the config's own schema.
    ///
    /// # Errors
    ///
    /// Returns a serialization error from `serde_json`; the schema types
    /// only contain maps with string keys so this does not happen in
    /// practice.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::V1(c) => serde_json::to_value(c),
            Self::V2_0(c) => serde_json::to_value(c),
            Self::V2_1(c) => serde_json::to_value(c),
            Self::V2_2(c) => serde_json::to_value(c),
            Self::V2_3(c) => serde_json::to_value(c),
            Self::V2_4Experimental(c) => serde_json::to_value(c),
            Self::V3_0Experimental(c) => serde_json::to_value(c),
        }
    }
}

/// Decode `document` under `schema` and translate it to the latest version.
///
/// # Errors
///
/// [`ConfigError::Invalid`] if the document doesn't fit the schema's shape.
pub fn translate(schema: SchemaVersion, document: Value) -> ConfigResult<(latest::Config, Report)> {
    let mut report = Report::new();
    let config = VersionedConfig::decode(schema, document)?.into_latest(&mut report);
    debug!(from = %schema, entries = report.len(), "Translated config to latest version");
    Ok((config, report))
}
