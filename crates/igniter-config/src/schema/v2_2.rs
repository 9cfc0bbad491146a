//! Schema `2.2.0`.
//!
//! Adds custom TLS certificate authorities and appending to files.

use serde::{Deserialize, Serialize};

pub use super::v2_1::{
    ConfigReference, Create, Directory, Disk, Dropin, FileContents, Filesystem, Group,
    IgnitionConfig, Link, Mount, Networkd, NetworkdUnit, NodeGroup, NodeUser, Partition, Passwd,
    Systemd, Timeouts, Unit, User, UserCreate, Verification,
};

/// Root of a `2.2.0` config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Metadata about the config itself.
    pub ignition: Ignition,
    /// Disks, filesystems, files, directories and links.
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
    /// HTTP fetch timeouts.
    pub timeouts: Timeouts,
    /// TLS settings for fetches.
    pub security: Security,
}

/// Security settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Security {
    /// TLS settings.
    pub tls: Tls,
}

/// TLS settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tls {
    /// Extra certificate authorities trusted for HTTPS fetches.
    pub certificate_authorities: Vec<CaReference>,
}

/// A certificate authority bundle to fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaReference {
    /// URL of the PEM bundle.
    pub source: String,
    /// Integrity check.
    pub verification: Verification,
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
    /// Directories to create.
    pub directories: Vec<Directory>,
    /// Links to create.
    pub links: Vec<Link>,
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
    /// Append the contents to an existing file instead of replacing it.
    pub append: bool,
    /// Permission bits.
    pub mode: Option<u32>,
    /// Owner.
    pub user: NodeUser,
    /// Group owner.
    pub group: NodeGroup,
}
