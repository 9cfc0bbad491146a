//! Schema `2.3.0`.
//!
//! Partitions can be required to exist, or wiped when they don't match.

use serde::{Deserialize, Serialize};

pub use super::v2_2::{
    CaReference, ConfigReference, Create, Directory, Dropin, File, FileContents, Filesystem,
    Group, Ignition, IgnitionConfig, Link, Mount, Networkd, NetworkdUnit, NodeGroup, NodeUser,
    Passwd, Security, Systemd, Timeouts, Tls, Unit, User, UserCreate, Verification,
};

/// Root of a `2.3.0` config.
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
    /// Delete a mismatching partition instead of failing.
    pub wipe_partition_entry: bool,
    /// Whether the partition must exist (`false` deletes it).
    pub should_exist: Option<bool>,
}
