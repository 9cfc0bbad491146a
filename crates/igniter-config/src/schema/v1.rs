//! Legacy schema, selected by `"ignitionVersion": 1`.
//!
//! Files live inside the filesystem they are written to and carry their
//! contents inline as a plain string.

use serde::{Deserialize, Serialize};

/// Root of a legacy config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Always `1`.
    pub ignition_version: i64,
    /// Disks and filesystems.
    pub storage: Storage,
    /// systemd units.
    pub systemd: Systemd,
    /// networkd units.
    pub networkd: Networkd,
    /// Users and groups.
    pub passwd: Passwd,
}

/// Storage section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Storage {
    /// Disks to partition.
    pub disks: Vec<Disk>,
    /// Filesystems to create, with the files written to them.
    pub filesystems: Vec<Filesystem>,
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
}

/// A filesystem and the files placed on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Filesystem {
    /// Device path.
    pub device: String,
    /// Filesystem type (`ext4`, `xfs`, ...).
    pub format: String,
    /// Creation options; absent means use the existing filesystem.
    pub create: Option<FilesystemCreate>,
    /// Files written relative to this filesystem's root.
    pub files: Vec<File>,
}

/// `mkfs` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilesystemCreate {
    /// Overwrite an existing filesystem.
    pub force: bool,
    /// Extra arguments passed to `mkfs`.
    pub options: Vec<String>,
}

/// A file with inline contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct File {
    /// Path relative to the filesystem root.
    pub path: String,
    /// Literal file contents.
    pub contents: String,
    /// Permission bits.
    pub mode: Option<u32>,
    /// Owner uid.
    pub uid: u32,
    /// Owner gid.
    pub gid: u32,
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
    /// Enable the unit.
    pub enable: bool,
    /// Mask the unit.
    pub mask: bool,
    /// Unit file contents; empty leaves an existing unit in place.
    pub contents: String,
    /// Drop-in snippets.
    pub dropins: Vec<Dropin>,
}

/// A unit drop-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dropin {
    /// Drop-in file name.
    pub name: String,
    /// Drop-in contents.
    pub contents: String,
}

/// networkd section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Networkd {
    /// Network units.
    pub units: Vec<NetworkdUnit>,
}

/// A `.network`, `.netdev` or `.link` unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkdUnit {
    /// Unit file name.
    pub name: String,
    /// Unit file contents.
    pub contents: String,
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
    /// `useradd` parameters; absent means the user already exists.
    pub create: Option<UserCreate>,
}

/// `useradd` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserCreate {
    /// Numeric uid.
    pub uid: Option<u32>,
    /// GECOS field.
    pub gecos: String,
    /// Home directory.
    pub home_dir: String,
    /// Do not create the home directory.
    pub no_create_home: bool,
    /// Primary group.
    pub primary_group: String,
    /// Supplementary groups.
    pub groups: Vec<String>,
    /// Do not create a group named after the user.
    pub no_user_group: bool,
    /// Create a system account.
    pub system: bool,
    /// Do not add the user to lastlog/faillog.
    pub no_log_init: bool,
    /// Login shell.
    pub shell: String,
}

/// A group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
    /// Group name.
    pub name: String,
    /// Numeric gid.
    pub gid: Option<u32>,
    /// Hashed group password.
    pub password_hash: String,
    /// Create a system group.
    pub system: bool,
}
