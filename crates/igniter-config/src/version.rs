//! Schema versions and the table of versions this crate understands.
//!
//! Stable versions are admitted as a range: any `X.Y.Z` whose `X.Y` matches
//! a stable entry. Experimental versions are admitted only on an exact match
//! with one of the experimental entries. The legacy schema has no string
//! form at all and is reachable only through the integer marker.

use std::str::FromStr;

use thiserror::Error;

/// Pre-release identifier that marks an experimental schema.
pub const EXPERIMENTAL: &str = "experimental";

/// A normalized schema version: `major.minor.patch` with an optional
/// `-experimental` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionTag {
    /// Major component.
    pub major: u64,
    /// Minor component.
    pub minor: u64,
    /// Patch component.
    pub patch: u64,
    /// Whether the tag carries the `-experimental` suffix.
    pub experimental: bool,
}

impl VersionTag {
    /// A stable tag.
    #[must_use]
    pub const fn stable(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            experimental: false,
        }
    }

    /// An experimental tag.
    #[must_use]
    pub const fn experimental(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            experimental: true,
        }
    }

    /// Whether `self` and `other` name the same `major.minor` line.
    #[must_use]
    pub const fn same_minor_line(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor
    }

    /// The tag as a full [`semver::Version`], for ordering.
    #[must_use]
    pub fn to_semver(&self) -> semver::Version {
        let mut version = semver::Version::new(self.major, self.minor, self.patch);
        if self.experimental {
            version.pre = semver::Prerelease::new(EXPERIMENTAL).unwrap_or_default();
        }
        version
    }
}

impl std::fmt::Display for VersionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.experimental {
            write!(f, "-{EXPERIMENTAL}")?;
        }
        Ok(())
    }
}

/// Why a string is not a [`VersionTag`].
#[derive(Debug, Error)]
pub enum VersionTagError {
    /// Not semantic-version syntax.
    #[error("invalid semantic version: {0}")]
    Syntax(#[from] semver::Error),
    /// Valid semver, but with a pre-release other than `experimental`.
    #[error("unsupported pre-release identifier '{0}'")]
    Prerelease(String),
    /// Valid semver, but with build metadata.
    #[error("unexpected build metadata '{0}'")]
    BuildMetadata(String),
}

impl FromStr for VersionTag {
    type Err = VersionTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let version = semver::Version::parse(s)?;
        if !version.build.is_empty() {
            return Err(VersionTagError::BuildMetadata(version.build.to_string()));
        }
        let experimental = match version.pre.as_str() {
            "" => false,
            EXPERIMENTAL => true,
            other => return Err(VersionTagError::Prerelease(other.to_owned())),
        };
        Ok(Self {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            experimental,
        })
    }
}

/// Every schema revision, in upgrade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaVersion {
    /// Legacy schema selected by `"ignitionVersion": 1`.
    V1,
    /// `2.0.0`
    V2_0,
    /// `2.1.0`
    V2_1,
    /// `2.2.0`
    V2_2,
    /// `2.3.0`
    V2_3,
    /// `2.4.0-experimental`
    V2_4Experimental,
    /// `3.0.0-experimental`, the latest schema.
    V3_0Experimental,
}

impl SchemaVersion {
    /// The schema every accepted config is translated into.
    pub const LATEST: Self = Self::V3_0Experimental;

    /// The oldest schema.
    pub const OLDEST: Self = Self::V1;

    /// All schemas along the canonical upgrade path.
    pub const PATH: [Self; 7] = [
        Self::V1,
        Self::V2_0,
        Self::V2_1,
        Self::V2_2,
        Self::V2_3,
        Self::V2_4Experimental,
        Self::V3_0Experimental,
    ];

    /// The tag this schema is identified by.
    #[must_use]
    pub const fn tag(self) -> VersionTag {
        match self {
            Self::V1 => VersionTag::stable(1, 0, 0),
            Self::V2_0 => VersionTag::stable(2, 0, 0),
            Self::V2_1 => VersionTag::stable(2, 1, 0),
            Self::V2_2 => VersionTag::stable(2, 2, 0),
            Self::V2_3 => VersionTag::stable(2, 3, 0),
            Self::V2_4Experimental => VersionTag::experimental(2, 4, 0),
            Self::V3_0Experimental => VersionTag::experimental(3, 0, 0),
        }
    }

    /// The schema one hop further along the path, or `None` for the latest.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::V1 => Some(Self::V2_0),
            Self::V2_0 => Some(Self::V2_1),
            Self::V2_1 => Some(Self::V2_2),
            Self::V2_2 => Some(Self::V2_3),
            Self::V2_3 => Some(Self::V2_4Experimental),
            Self::V2_4Experimental => Some(Self::V3_0Experimental),
            Self::V3_0Experimental => None,
        }
    }

    /// Whether this is [`SchemaVersion::LATEST`].
    #[must_use]
    pub const fn is_latest(self) -> bool {
        matches!(self, Self::V3_0Experimental)
    }

    /// Adjacent `(from, to)` pairs walked when upgrading from `self`.
    pub fn hops(self) -> impl Iterator<Item = (Self, Self)> {
        std::iter::successors(Some(self), |v| v.successor())
            .filter_map(|from| from.successor().map(|to| (from, to)))
    }
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.tag().fmt(f)
    }
}

/// How a table entry matches a requested tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Only through the legacy integer marker; never by string.
    LegacyMarker,
    /// Any stable tag on the same `major.minor` line.
    StableLine,
    /// Exactly this tag and nothing else.
    Exact,
}

/// What happens to a config of this version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Upgraded through the translation chain.
    Translatable,
    /// Already the latest shape.
    Latest,
}

/// One row of the supported version table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedVersion {
    /// Schema this row decodes into.
    pub schema: SchemaVersion,
    /// Matching policy.
    pub admission: Admission,
    /// Translation role.
    pub role: Role,
}

impl SupportedVersion {
    /// Whether a tag taken from `ignition.version` selects this row.
    #[must_use]
    pub fn admits(&self, tag: &VersionTag) -> bool {
        let own = self.schema.tag();
        match self.admission {
            Admission::LegacyMarker => false,
            Admission::StableLine => !tag.experimental && own.same_minor_line(tag),
            Admission::Exact => own == *tag,
        }
    }
}

/// The process-wide table of understood versions.
pub static SUPPORTED_VERSIONS: SupportedVersionSet = SupportedVersionSet {
    entries: &[
        SupportedVersion {
            schema: SchemaVersion::V1,
            admission: Admission::LegacyMarker,
            role: Role::Translatable,
        },
        SupportedVersion {
            schema: SchemaVersion::V2_0,
            admission: Admission::StableLine,
            role: Role::Translatable,
        },
        SupportedVersion {
            schema: SchemaVersion::V2_1,
            admission: Admission::StableLine,
            role: Role::Translatable,
        },
        SupportedVersion {
            schema: SchemaVersion::V2_2,
            admission: Admission::StableLine,
            role: Role::Translatable,
        },
        SupportedVersion {
            schema: SchemaVersion::V2_3,
            admission: Admission::StableLine,
            role: Role::Translatable,
        },
        SupportedVersion {
            schema: SchemaVersion::V2_4Experimental,
            admission: Admission::Exact,
            role: Role::Translatable,
        },
        SupportedVersion {
            schema: SchemaVersion::V3_0Experimental,
            admission: Admission::Exact,
            role: Role::Latest,
        },
    ],
};

/// Immutable lookup table from version tags to schemas.
#[derive(Debug)]
pub struct SupportedVersionSet {
    entries: &'static [SupportedVersion],
}

impl SupportedVersionSet {
    /// Look up the schema a string version tag selects.
    #[must_use]
    pub fn admit(&self, tag: &VersionTag) -> Option<SchemaVersion> {
        self.entries
            .iter()
            .find(|entry| entry.admits(tag))
            .map(|entry| entry.schema)
    }

    /// All rows, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[SupportedVersion] {
        self.entries
    }

    /// The row marked [`Role::Latest`].
    #[must_use]
    pub fn latest(&self) -> Option<&SupportedVersion> {
        self.entries.iter().find(|e| e.role == Role::Latest)
    }
}
