//! Legacy → `2.0.0`.
//!
//! Filesystems receive generated names and their nested files move to the
//! top-level file list. Inline contents become `data:` URLs.

use super::dataurl;
use crate::report::Report;
use crate::schema::{v1, v2_0};
use crate::version::SchemaVersion;

/// Prefix of the names given to legacy filesystems.
pub(crate) const FILESYSTEM_NAME_PREFIX: &str = "_translate-filesystem-";

pub(super) fn translate(old: v1::Config, report: &mut Report) -> v2_0::Config {
    let mut filesystems = Vec::with_capacity(old.storage.filesystems.len());
    let mut files = Vec::new();

    for (fs_index, fs) in old.storage.filesystems.into_iter().enumerate() {
        let name = format!("{FILESYSTEM_NAME_PREFIX}{fs_index}");

        for (file_index, file) in fs.files.into_iter().enumerate() {
            report.info(
                format!("storage.filesystems.{fs_index}.files.{file_index}"),
                format!("moved to storage.files on filesystem '{name}'"),
            );
            files.push(v2_0::File {
                filesystem: name.clone(),
                path: file.path,
                contents: v2_0::FileContents {
                    source: dataurl::encode(&file.contents),
                    ..Default::default()
                },
                mode: file.mode,
                user: v2_0::FileUser { id: file.uid },
                group: v2_0::FileGroup { id: file.gid },
            });
        }

        filesystems.push(v2_0::Filesystem {
            name,
            mount: Some(v2_0::Mount {
                device: fs.device,
                format: fs.format,
                create: fs.create,
            }),
            path: None,
        });
    }

    v2_0::Config {
        ignition: v2_0::Ignition {
            version: SchemaVersion::V2_0.tag().to_string(),
            config: v2_0::IgnitionConfig::default(),
        },
        storage: v2_0::Storage {
            disks: old.storage.disks,
            filesystems,
            files,
        },
        systemd: old.systemd,
        networkd: old.networkd,
        passwd: old.passwd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_files_move_to_named_filesystem() {
        let old = v1::Config {
            ignition_version: 1,
            storage: v1::Storage {
                filesystems: vec![v1::Filesystem {
                    device: "/dev/sdb1".to_owned(),
                    format: "ext4".to_owned(),
                    create: Some(v1::FilesystemCreate {
                        force: true,
                        options: vec!["-L".to_owned(), "data".to_owned()],
                    }),
                    files: vec![v1::File {
                        path: "/srv/motd".to_owned(),
                        contents: "hi there".to_owned(),
                        mode: Some(0o644),
                        uid: 500,
                        gid: 501,
                    }],
                }],
                ..Default::default()
            },
            ..Default::default()
        };

        let mut report = Report::new();
        let new = translate(old, &mut report);

        assert_eq!(new.ignition.version, "2.0.0");
        assert_eq!(new.storage.filesystems.len(), 1);
        let fs = &new.storage.filesystems[0];
        assert_eq!(fs.name, "_translate-filesystem-0");
        let mount = fs.mount.as_ref().unwrap();
        assert_eq!(mount.device, "/dev/sdb1");
        assert!(mount.create.as_ref().unwrap().force);

        assert_eq!(new.storage.files.len(), 1);
        let file = &new.storage.files[0];
        assert_eq!(file.filesystem, "_translate-filesystem-0");
        assert_eq!(file.path, "/srv/motd");
        assert_eq!(file.contents.source, "data:,hi%20there");
        assert_eq!(file.mode, Some(0o644));
        assert_eq!(file.user.id, 500);
        assert_eq!(file.group.id, 501);

        assert_eq!(report.len(), 1);
        assert_eq!(
            report.entries()[0].path.as_deref(),
            Some("storage.filesystems.0.files.0")
        );
    }

    #[test]
    fn test_empty_legacy_config_is_silent() {
        let mut report = Report::new();
        let new = translate(
            v1::Config {
                ignition_version: 1,
                ..Default::default()
            },
            &mut report,
        );
        assert_eq!(new.ignition.version, "2.0.0");
        assert!(new.storage.files.is_empty());
        assert!(report.is_empty());
    }
}
