//! Schema `2.0.0`.
//!
//! Filesystems are named and files reference them by name. File contents
//! become a URL (usually `data:`). The version moves under `ignition`.

use serde::{Deserialize, Serialize};

pub use super::v1::{
    Disk, Dropin, FilesystemCreate as Create, Group, Networkd, NetworkdUnit, Partition, Passwd,
    Systemd, Unit, User, UserCreate,
};

/// Root of a `2.0.0` config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Metadata about the config itself.
    pub ignition: Ignition,
    /// Disks, filesystems and files.
    pub storage: Storage,
    /// systemd units.
    pub systemd: Systemd,
    /// networkd units.
    pub networkd: Networkd,
    /// Users and groups.
    pub passwd: Passwd,
}

/// The `ignition` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ignition {
    /// Schema version string.
    pub version: String,
    /// Remote configs to fetch.
    pub config: IgnitionConfig,
}

/// References to further configs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IgnitionConfig {
    /// Configs appended to this one.
    pub append: Vec<ConfigReference>,
    /// A config that replaces this one.
    pub replace: Option<ConfigReference>,
}

/// A remote resource with optional integrity check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigReference {
    /// URL to fetch.
    pub source: String,
    /// Integrity check.
    pub verification: Verification,
}

/// Integrity check for a fetched resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Verification {
    /// `<algorithm>-<hex digest>`.
    pub hash: Option<String>,
}

/// Storage section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Storage {
    /// Disks to partition.
    pub disks: Vec<Disk>,
    /// Named filesystems.
    pub filesystems: Vec<Filesystem>,
    /// Files to write.
    pub files: Vec<File>,
}

/// A named filesystem: either one to create (`mount`) or an already
/// mounted one (`path`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Filesystem {
    /// Name referenced by files.
    pub name: String,
    /// Device to mount.
    pub mount: Option<Mount>,
    /// Path of an already mounted filesystem.
    pub path: Option<String>,
}

/// A device to mount and optionally format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mount {
    /// Device path.
    pub device: String,
    /// Filesystem type.
    pub format: String,
    /// Creation options.
    pub create: Option<Create>,
}

/// A file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct File {
    /// Name of the filesystem the file is written to.
    pub filesystem: String,
    /// Path relative to that filesystem.
    pub path: String,
    /// Where the contents come from.
    pub contents: FileContents,
    /// Permission bits.
    pub mode: Option<u32>,
    /// Owner.
    pub user: FileUser,
    /// Group owner.
    pub group: FileGroup,
}

/// Source of a file's contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileContents {
    /// Compression of the fetched data (`gzip` or empty).
    pub compression: String,
    /// URL of the contents.
    pub source: String,
    /// Integrity check.
    pub verification: Verification,
}

/// File owner by uid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileUser {
    /// Numeric uid.
    pub id: u32,
}

/// File group owner by gid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileGroup {
    /// Numeric gid.
    pub id: u32,
}
