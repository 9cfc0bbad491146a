//! Schema `2.1.0`.
//!
//! Adds fetch timeouts, directories and links, owner names, filesystem
//! labels and UUIDs, and flattens `useradd` parameters onto the user.
//! `Unit::enable`, `Mount::create` and `User::create` are deprecated but
//! still accepted.

use serde::{Deserialize, Serialize};

pub use super::v2_0::{
    ConfigReference, Create, Dropin, FileContents, Group, IgnitionConfig, Networkd, NetworkdUnit,
    UserCreate, Verification,
};

/// Root of a `2.1.0` config.
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
}

/// HTTP fetch timeouts, in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timeouts {
    /// Time to wait for response headers.
    pub http_response_headers: Option<u32>,
    /// Time to wait for the whole response.
    pub http_total: Option<u32>,
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

/// A block device and its partition table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Disk {
    /// Device path.
    pub device: String,
    /// Wipe the existing partition table first.
    pub wipe_table: bool,
    /// Partitions to create.
    pub partitions: Vec<Partition>,
}

/// A GPT partition. Sizes and offsets are in 512-byte sectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Partition {
    /// Partition label.
    pub label: String,
    /// Partition number; `0` means next available.
    pub number: u32,
    /// Size in sectors; `0` means fill.
    pub size: u64,
    /// Start sector; `0` means next available.
    pub start: u64,
    /// Partition type GUID.
    pub type_guid: String,
    /// Unique partition GUID.
    pub guid: String,
}

/// A named filesystem.
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
    /// Deprecated creation options.
    pub create: Option<Create>,
    /// Always reformat.
    pub wipe_filesystem: bool,
    /// Filesystem label.
    pub label: Option<String>,
    /// Filesystem UUID.
    pub uuid: Option<String>,
    /// Extra arguments passed to `mkfs`.
    pub options: Vec<String>,
}

/// Owner of a filesystem node, by id or name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeUser {
    /// Numeric uid.
    pub id: Option<u32>,
    /// User name.
    pub name: Option<String>,
}

/// Group owner of a filesystem node, by id or name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeGroup {
    /// Numeric gid.
    pub id: Option<u32>,
    /// Group name.
    pub name: Option<String>,
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
    /// Link target.
    pub target: String,
    /// Create a hard link instead of a symlink.
    pub hard: bool,
    /// Owner.
    pub user: NodeUser,
    /// Group owner.
    pub group: NodeGroup,
}

/// systemd section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Systemd {
    /// Units to write and enable.
    pub units: Vec<Unit>,
}

/// A systemd unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Unit {
    /// Unit file name.
    pub name: String,
    /// Deprecated; use `enabled`.
    pub enable: bool,
    /// Enable (`true`) or disable (`false`) the unit.
    pub enabled: Option<bool>,
    /// Mask the unit.
    pub mask: bool,
    /// Unit file contents.
    pub contents: String,
    /// Drop-in snippets.
    pub dropins: Vec<Dropin>,
}

/// passwd section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Passwd {
    /// Users to create or modify.
    pub users: Vec<User>,
    /// Groups to create.
    pub groups: Vec<Group>,
}

/// A user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// Login name.
    pub name: String,
    /// Hashed password.
    pub password_hash: Option<String>,
    /// Authorized SSH public keys.
    pub ssh_authorized_keys: Vec<String>,
    /// Numeric uid.
    pub uid: Option<u32>,
    /// GECOS field.
    pub gecos: Option<String>,
    /// Home directory.
    pub home_dir: Option<String>,
    /// Do not create the home directory.
    pub no_create_home: bool,
    /// Primary group.
    pub primary_group: Option<String>,
    /// Supplementary groups.
    pub groups: Vec<String>,
    /// Do not create a group named after the user.
    pub no_user_group: bool,
    /// Create a system account.
    pub system: bool,
    /// Do not add the user to lastlog/faillog.
    pub no_log_init: bool,
    /// Login shell.
    pub shell: Option<String>,
    /// Deprecated `useradd` parameters.
    pub create: Option<UserCreate>,
}
