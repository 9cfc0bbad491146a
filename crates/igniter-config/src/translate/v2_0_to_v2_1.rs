//! `2.0.0` → `2.1.0`. Lossless: new fields take their unset values and
//! deprecated fields are carried as-is.

use crate::report::Report;
use crate::schema::{v2_0, v2_1};
use crate::version::SchemaVersion;

pub(super) fn translate(old: v2_0::Config, _report: &mut Report) -> v2_1::Config {
    v2_1::Config {
        ignition: v2_1::Ignition {
            version: SchemaVersion::V2_1.tag().to_string(),
            config: old.ignition.config,
            timeouts: v2_1::Timeouts::default(),
        },
        storage: v2_1::Storage {
            disks: old.storage.disks.into_iter().map(disk).collect(),
            filesystems: old.storage.filesystems.into_iter().map(filesystem).collect(),
            files: old.storage.files.into_iter().map(file).collect(),
            directories: Vec::new(),
            links: Vec::new(),
        },
        systemd: v2_1::Systemd {
            units: old.systemd.units.into_iter().map(unit).collect(),
        },
        networkd: old.networkd,
        passwd: v2_1::Passwd {
            users: old.passwd.users.into_iter().map(user).collect(),
            groups: old.passwd.groups,
        },
    }
}

fn disk(old: v2_0::Disk) -> v2_1::Disk {
    v2_1::Disk {
        device: old.device,
        wipe_table: old.wipe_table,
        partitions: old
            .partitions
            .into_iter()
            .map(|p| v2_1::Partition {
                label: p.label,
                number: p.number,
                size: p.size,
                start: p.start,
                type_guid: p.type_guid,
                guid: String::new(),
            })
            .collect(),
    }
}

fn filesystem(old: v2_0::Filesystem) -> v2_1::Filesystem {
    v2_1::Filesystem {
        name: old.name,
        mount: old.mount.map(|m| v2_1::Mount {
            device: m.device,
            format: m.format,
            create: m.create,
            ..Default::default()
        }),
        path: old.path,
    }
}

fn file(old: v2_0::File) -> v2_1::File {
    v2_1::File {
        filesystem: old.filesystem,
        path: old.path,
        contents: old.contents,
        mode: old.mode,
        user: v2_1::NodeUser {
            id: Some(old.user.id),
            name: None,
        },
        group: v2_1::NodeGroup {
            id: Some(old.group.id),
            name: None,
        },
    }
}

fn unit(old: v2_0::Unit) -> v2_1::Unit {
    v2_1::Unit {
        name: old.name,
        enable: old.enable,
        enabled: None,
        mask: old.mask,
        contents: old.contents,
        dropins: old.dropins,
    }
}

fn user(old: v2_0::User) -> v2_1::User {
    v2_1::User {
        name: old.name,
        password_hash: old.password_hash,
        ssh_authorized_keys: old.ssh_authorized_keys,
        create: old.create,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_ids_become_optional() {
        let old = v2_0::Config {
            storage: v2_0::Storage {
                files: vec![v2_0::File {
                    filesystem: "root".to_owned(),
                    path: "/etc/hostname".to_owned(),
                    user: v2_0::FileUser { id: 0 },
                    group: v2_0::FileGroup { id: 10 },
                    ..Default::default()
                }],
                ..Default::default()
            },
            ..Default::default()
        };
        let mut report = Report::new();
        let new = translate(old, &mut report);
        assert_eq!(new.ignition.version, "2.1.0");
        assert_eq!(new.storage.files[0].user.id, Some(0));
        assert_eq!(new.storage.files[0].group.id, Some(10));
        assert!(report.is_empty());
    }

    #[test]
    fn test_deprecated_fields_are_carried() {
        let old = v2_0::Config {
            systemd: v2_0::Systemd {
                units: vec![v2_0::Unit {
                    name: "etcd.service".to_owned(),
                    enable: true,
                    ..Default::default()
                }],
            },
            passwd: v2_0::Passwd {
                users: vec![v2_0::User {
                    name: "core".to_owned(),
                    create: Some(v2_0::UserCreate {
                        shell: "/bin/zsh".to_owned(),
                        ..Default::default()
                    }),
                    ..Default::default()
                }],
                ..Default::default()
            },
            ..Default::default()
        };
        let mut report = Report::new();
        let new = translate(old, &mut report);
        assert!(new.systemd.units[0].enable);
        assert_eq!(new.systemd.units[0].enabled, None);
        assert_eq!(
            new.passwd.users[0].create.as_ref().map(|c| c.shell.as_str()),
            Some("/bin/zsh")
        );
        assert_eq!(new.passwd.users[0].shell, None);
        assert!(report.is_empty());
    }
}
