//! `2.4.0-experimental` → `3.0.0-experimental`.
//!
//! The only hop that can lose information. Deprecated fields are folded into
//! their replacements, node paths are made absolute against the filesystem
//! they live on, partition geometry moves from sectors to MiB and `networkd`
//! units become plain files. Anything that can't be carried over exactly is
//! recorded in the report.

use std::collections::HashMap;

use super::dataurl;
use crate::report::Report;
use crate::schema::{v2_4_exp as v2_4, v3_0_exp as v3_0};
use crate::version::SchemaVersion;

/// Name of the filesystem whose paths are already absolute.
const ROOT_FILESYSTEM: &str = "root";

/// Logical sectors per MiB, assuming 512-byte sectors.
const SECTORS_PER_MIB: u64 = 2048;

/// Directory networkd units are written to.
const NETWORKD_DIR: &str = "/etc/systemd/network";

/// Mode given to written networkd units.
const NETWORKD_MODE: u32 = 0o644;

pub(super) fn translate(old: v2_4::Config, report: &mut Report) -> v3_0::Config {
    let mount_points = MountPoints::new(&old.storage.filesystems);

    let mut files: Vec<v3_0::File> = old
        .storage
        .files
        .into_iter()
        .enumerate()
        .map(|(i, f)| file(f, &mount_points, &format!("storage.files.{i}"), report))
        .collect();
    files.extend(
        old.networkd
            .units
            .into_iter()
            .enumerate()
            .map(|(i, unit)| networkd_unit(i, unit, report)),
    );

    v3_0::Config {
        ignition: ignition(old.ignition, report),
        storage: v3_0::Storage {
            disks: old
                .storage
                .disks
                .into_iter()
                .enumerate()
                .map(|(i, d)| disk(d, &format!("storage.disks.{i}"), report))
                .collect(),
            filesystems: old
                .storage
                .filesystems
                .into_iter()
                .enumerate()
                .filter_map(|(i, fs)| filesystem(fs, &format!("storage.filesystems.{i}"), report))
                .collect(),
            files,
            directories: old
                .storage
                .directories
                .into_iter()
                .enumerate()
                .map(|(i, d)| v3_0::Directory {
                    path: mount_points.resolve(
                        &d.filesystem,
                        &d.path,
                        &format!("storage.directories.{i}"),
                        report,
                    ),
                    overwrite: d.overwrite,
                    mode: d.mode,
                    user: node_user(d.user),
                    group: node_group(d.group),
                })
                .collect(),
            links: old
                .storage
                .links
                .into_iter()
                .enumerate()
                .map(|(i, l)| v3_0::Link {
                    path: mount_points.resolve(
                        &l.filesystem,
                        &l.path,
                        &format!("storage.links.{i}"),
                        report,
                    ),
                    overwrite: l.overwrite,
                    target: l.target,
                    hard: flag(l.hard),
                    user: node_user(l.user),
                    group: node_group(l.group),
                })
                .collect(),
        },
        systemd: v3_0::Systemd {
            units: old
                .systemd
                .units
                .into_iter()
                .enumerate()
                .map(|(i, u)| unit(u, &format!("systemd.units.{i}"), report))
                .collect(),
        },
        passwd: v3_0::Passwd {
            users: old
                .passwd
                .users
                .into_iter()
                .enumerate()
                .map(|(i, u)| user(u, &format!("passwd.users.{i}"), report))
                .collect(),
            groups: old.passwd.groups.into_iter().map(group).collect(),
        },
    }
}

/// Mount point of every named filesystem, if it has one. Owns its names so
/// the filesystem list can be consumed while nodes are still resolved.
struct MountPoints {
    by_name: HashMap<String, Option<String>>,
}

impl MountPoints {
    fn new(filesystems: &[v2_4::Filesystem]) -> Self {
        Self {
            by_name: filesystems
                .iter()
                .map(|fs| (fs.name.clone(), fs.path.clone()))
                .collect(),
        }
    }

    /// Absolute path of `path` on the filesystem called `name`.
    fn resolve(&self, name: &str, path: &str, at: &str, report: &mut Report) -> String {
        if name == ROOT_FILESYSTEM {
            return path.to_owned();
        }
        match self.by_name.get(name) {
            Some(Some(mount_point)) => join(mount_point, path),
            Some(None) => {
                report.warn(
                    format!("{at}.filesystem"),
                    format!("filesystem '{name}' has no mount path; '{path}' is placed under /"),
                );
                join("/", path)
            },
            None => {
                report.warn(
                    format!("{at}.filesystem"),
                    format!("unknown filesystem '{name}'; '{path}' is placed under /"),
                );
                join("/", path)
            },
        }
    }
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// `false` meant "unset" before 3.0.
fn flag(b: bool) -> Option<bool> {
    b.then_some(true)
}

/// Merge a value from a deprecated field into its replacement. The
/// replacement wins when both are set and differ.
fn fold<T: PartialEq + std::fmt::Debug>(
    current: Option<T>,
    legacy: Option<T>,
    at: &str,
    report: &mut Report,
) -> Option<T> {
    match (current, legacy) {
        (Some(current), Some(legacy)) => {
            if current != legacy {
                report.warn(
                    at,
                    format!("conflicting deprecated value {legacy:?} dropped in favour of {current:?}"),
                );
            }
            Some(current)
        },
        (Some(current), None) => Some(current),
        (None, legacy) => legacy,
    }
}

fn sectors_to_mib(sectors: u64, at: &str, report: &mut Report) -> Option<u64> {
    if sectors == 0 {
        return None;
    }
    let mib = sectors.checked_div(SECTORS_PER_MIB).unwrap_or_default();
    if sectors.checked_rem(SECTORS_PER_MIB).unwrap_or_default() != 0 {
        report.warn(
            at,
            format!("{sectors} sectors is not a whole number of MiB; rounded down to {mib} MiB"),
        );
    }
    Some(mib)
}

fn verification(v: v2_4::Verification) -> v3_0::Verification {
    v3_0::Verification { hash: v.hash }
}

fn config_reference(r: v2_4::ConfigReference) -> v3_0::ConfigReference {
    v3_0::ConfigReference {
        source: non_empty(r.source),
        verification: verification(r.verification),
    }
}

fn ignition(old: v2_4::Ignition, report: &mut Report) -> v3_0::Ignition {
    if !old.config.append.is_empty() {
        report.info(
            "ignition.config.append",
            "appended configs are merged; renamed to ignition.config.merge",
        );
    }
    v3_0::Ignition {
        version: SchemaVersion::V3_0Experimental.tag().to_string(),
        config: v3_0::IgnitionConfig {
            merge: old.config.append.into_iter().map(config_reference).collect(),
            replace: old.config.replace.map(config_reference),
        },
        timeouts: v3_0::Timeouts {
            http_response_headers: old.timeouts.http_response_headers,
            http_total: old.timeouts.http_total,
        },
        security: v3_0::Security {
            tls: v3_0::Tls {
                certificate_authorities: old
                    .security
                    .tls
                    .certificate_authorities
                    .into_iter()
                    .map(|ca| v3_0::CaReference {
                        source: ca.source,
                        verification: verification(ca.verification),
                    })
                    .collect(),
            },
        },
        proxy: v3_0::Proxy {
            http_proxy: old.proxy.http_proxy,
            https_proxy: old.proxy.https_proxy,
            no_proxy: old.proxy.no_proxy,
        },
    }
}

fn disk(old: v2_4::Disk, at: &str, report: &mut Report) -> v3_0::Disk {
    v3_0::Disk {
        device: old.device,
        wipe_table: flag(old.wipe_table),
        partitions: old
            .partitions
            .into_iter()
            .enumerate()
            .map(|(i, p)| v3_0::Partition {
                label: non_empty(p.label),
                number: p.number,
                size_mib: sectors_to_mib(p.size, &format!("{at}.partitions.{i}.size"), report),
                start_mib: sectors_to_mib(p.start, &format!("{at}.partitions.{i}.start"), report),
                type_guid: non_empty(p.type_guid),
                guid: non_empty(p.guid),
                wipe_partition_entry: flag(p.wipe_partition_entry),
                should_exist: p.should_exist,
            })
            .collect(),
    }
}

/// Filesystems without a `mount` were already mounted and have nothing left
/// to describe once node paths are absolute.
fn filesystem(old: v2_4::Filesystem, at: &str, report: &mut Report) -> Option<v3_0::Filesystem> {
    let Some(mount) = old.mount else {
        report.info(
            at,
            format!("pre-mounted filesystem '{}' dropped; its nodes now use absolute paths", old.name),
        );
        return None;
    };

    let mut wipe_filesystem = flag(mount.wipe_filesystem);
    let mut options = mount.options;
    if let Some(create) = mount.create {
        report.deprecated(
            format!("{at}.mount.create"),
            "folded into wipeFilesystem and options",
        );
        wipe_filesystem = fold(
            wipe_filesystem,
            flag(create.force),
            &format!("{at}.mount.wipeFilesystem"),
            report,
        );
        let legacy = (!create.options.is_empty()).then_some(create.options);
        let current = (!options.is_empty()).then_some(options);
        options = fold(current, legacy, &format!("{at}.mount.options"), report).unwrap_or_default();
    }

    Some(v3_0::Filesystem {
        device: mount.device,
        format: non_empty(mount.format),
        path: old.path,
        wipe_filesystem,
        label: mount.label,
        uuid: mount.uuid,
        options,
    })
}

fn resource(c: v2_4::FileContents) -> v3_0::Resource {
    v3_0::Resource {
        compression: non_empty(c.compression),
        source: non_empty(c.source),
        verification: verification(c.verification),
    }
}

fn node_user(u: v2_4::NodeUser) -> v3_0::NodeUser {
    v3_0::NodeUser {
        id: u.id,
        name: u.name,
    }
}

fn node_group(g: v2_4::NodeGroup) -> v3_0::NodeGroup {
    v3_0::NodeGroup {
        id: g.id,
        name: g.name,
    }
}

fn file(old: v2_4::File, mount_points: &MountPoints, at: &str, report: &mut Report) -> v3_0::File {
    let contents = resource(old.contents);
    let (contents, append) = if old.append {
        (v3_0::Resource::default(), vec![contents])
    } else {
        (contents, Vec::new())
    };
    v3_0::File {
        path: mount_points.resolve(&old.filesystem, &old.path, at, report),
        overwrite: old.overwrite,
        contents,
        append,
        mode: old.mode,
        user: node_user(old.user),
        group: node_group(old.group),
    }
}

/// Final path component of a unit name, if it names a file at all.
fn unit_file_name(name: &str) -> Option<&str> {
    name.rsplit('/')
        .find(|part| !part.is_empty() && *part != "." && *part != "..")
}

fn networkd_unit(index: usize, old: v2_4::NetworkdUnit, report: &mut Report) -> v3_0::File {
    let at = format!("networkd.units.{index}");
    let file_name = match unit_file_name(&old.name) {
        Some(file_name) if file_name == old.name => file_name.to_owned(),
        Some(file_name) => {
            report.warn(
                format!("{at}.name"),
                format!("unit name '{}' is not a plain file name; using '{file_name}'", old.name),
            );
            file_name.to_owned()
        },
        None => {
            let fallback = format!("unit-{index}.network");
            report.warn(
                format!("{at}.name"),
                format!("unit name '{}' names no file; using '{fallback}'", old.name),
            );
            fallback
        },
    };
    let path = format!("{NETWORKD_DIR}/{file_name}");
    report.info(at, format!("networkd unit written as file {path}"));
    v3_0::File {
        path,
        contents: v3_0::Resource {
            source: Some(dataurl::encode(&old.contents)),
            ..Default::default()
        },
        mode: Some(NETWORKD_MODE),
        ..Default::default()
    }
}

fn unit(old: v2_4::Unit, at: &str, report: &mut Report) -> v3_0::Unit {
    let mut enabled = old.enabled;
    if old.enable {
        report.deprecated(format!("{at}.enable"), "folded into enabled");
        enabled = fold(enabled, Some(true), &format!("{at}.enabled"), report);
    }
    v3_0::Unit {
        name: old.name,
        enabled,
        mask: flag(old.mask),
        contents: non_empty(old.contents),
        dropins: old
            .dropins
            .into_iter()
            .map(|d| v3_0::Dropin {
                name: d.name,
                contents: non_empty(d.contents),
            })
            .collect(),
    }
}

fn user(old: v2_4::User, at: &str, report: &mut Report) -> v3_0::User {
    let mut user = v3_0::User {
        name: old.name,
        password_hash: old.password_hash,
        ssh_authorized_keys: old.ssh_authorized_keys,
        uid: old.uid,
        gecos: old.gecos,
        home_dir: old.home_dir,
        no_create_home: flag(old.no_create_home),
        primary_group: old.primary_group,
        groups: old.groups,
        no_user_group: flag(old.no_user_group),
        system: flag(old.system),
        no_log_init: flag(old.no_log_init),
        shell: old.shell,
    };

    let Some(create) = old.create else {
        return user;
    };
    report.deprecated(format!("{at}.create"), "folded into the user's own fields");

    user.uid = fold(user.uid, create.uid, &format!("{at}.uid"), report);
    user.gecos = fold(user.gecos, non_empty(create.gecos), &format!("{at}.gecos"), report);
    user.home_dir = fold(
        user.home_dir,
        non_empty(create.home_dir),
        &format!("{at}.homeDir"),
        report,
    );
    user.no_create_home = fold(
        user.no_create_home,
        flag(create.no_create_home),
        &format!("{at}.noCreateHome"),
        report,
    );
    user.primary_group = fold(
        user.primary_group,
        non_empty(create.primary_group),
        &format!("{at}.primaryGroup"),
        report,
    );
    let groups = (!user.groups.is_empty()).then_some(user.groups);
    let legacy_groups = (!create.groups.is_empty()).then_some(create.groups);
    user.groups = fold(groups, legacy_groups, &format!("{at}.groups"), report).unwrap_or_default();
    user.no_user_group = fold(
        user.no_user_group,
        flag(create.no_user_group),
        &format!("{at}.noUserGroup"),
        report,
    );
    user.system = fold(user.system, flag(create.system), &format!("{at}.system"), report);
    user.no_log_init = fold(
        user.no_log_init,
        flag(create.no_log_init),
        &format!("{at}.noLogInit"),
        report,
    );
    user.shell = fold(user.shell, non_empty(create.shell), &format!("{at}.shell"), report);
    user
}

fn group(old: v2_4::Group) -> v3_0::Group {
    v3_0::Group {
        name: old.name,
        gid: old.gid,
        password_hash: non_empty(old.password_hash),
        system: flag(old.system),
    }
}
