//! Schema `2.4.0-experimental`.
//!
//! Adds proxy settings for fetches and `overwrite` on filesystem nodes.

use serde::{Deserialize, Serialize};

pub use super::v2_3::{
    CaReference, ConfigReference, Create, Disk, Dropin, FileContents, Filesystem, Group,
    IgnitionConfig, Mount, Networkd, NetworkdUnit, NodeGroup, NodeUser, Partition, Passwd,
    Security, Systemd, Timeouts, Tls, Unit, User, UserCreate, Verification,
};

/// Root of a `2.4.0-experimental` config.
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
    /// Proxy settings for fetches.
    pub proxy: Proxy,
}

/// HTTP proxy settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Proxy {
    /// Proxy for `http://` URLs.
    pub http_proxy: Option<String>,
    /// Proxy for `https://` URLs.
    pub https_proxy: Option<String>,
    /// Hosts that bypass the proxy.
    pub no_proxy: Vec<String>,
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
    /// Replace whatever is already at `path`.
    pub overwrite: Option<bool>,
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

/// A directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Directory {
    /// Name of the filesystem the directory is created on.
    pub filesystem: String,
    /// Path relative to that filesystem.
    pub path: String,
    /// Replace whatever is already at `path`.
    pub overwrite: Option<bool>,
    /// Permission bits.
    pub mode: Option<u32>,
    /// Owner.
    pub user: NodeUser,
    /// Group owner.
    pub group: NodeGroup,
}

/// A symbolic or hard link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    /// Name of the filesystem the link is created on.
    pub filesystem: String,
    /// Path relative to that filesystem.
    pub path: String,
    /// Replace whatever is already at `path`.
    pub overwrite: Option<bool>,
    /// Link target.
    pub target: String,
    /// Create a hard link instead of a symlink.
    pub hard: bool,
    /// Owner.
    pub user: NodeUser,
    /// Group owner.
    pub group: NodeGroup,
}
