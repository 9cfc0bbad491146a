//! `2.1.0` → `2.2.0`. Lossless.

use crate::report::Report;
use crate::schema::{v2_1, v2_2};
use crate::version::SchemaVersion;

pub(super) fn translate(old: v2_1::Config, _report: &mut Report) -> v2_2::Config {
    v2_2::Config {
        ignition: v2_2::Ignition {
            version: SchemaVersion::V2_2.tag().to_string(),
            config: old.ignition.config,
            timeouts: old.ignition.timeouts,
            security: v2_2::Security::default(),
        },
        storage: v2_2::Storage {
            disks: old.storage.disks,
            filesystems: old.storage.filesystems,
            files: old
                .storage
                .files
                .into_iter()
                .map(|f| v2_2::File {
                    filesystem: f.filesystem,
                    path: f.path,
                    contents: f.contents,
                    append: false,
                    mode: f.mode,
                    user: f.user,
                    group: f.group,
                })
                .collect(),
            directories: old.storage.directories,
            links: old.storage.links,
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
    fn test_timeouts_survive_and_security_defaults() {
        let old = v2_1::Config {
            ignition: v2_1::Ignition {
                version: "2.1.0".to_owned(),
                timeouts: v2_1::Timeouts {
                    http_response_headers: Some(5),
                    http_total: Some(60),
                },
                ..Default::default()
            },
            ..Default::default()
        };
        let mut report = Report::new();
        let new = translate(old, &mut report);
        assert_eq!(new.ignition.version, "2.2.0");
        assert_eq!(new.ignition.timeouts.http_total, Some(60));
        assert!(new.ignition.security.tls.certificate_authorities.is_empty());
        assert!(report.is_empty());
    }
}
