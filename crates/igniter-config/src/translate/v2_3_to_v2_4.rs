//! `2.3.0` → `2.4.0-experimental`. Lossless.

use crate::report::Report;
use crate::schema::{v2_3, v2_4_exp};
use crate::version::SchemaVersion;

pub(super) fn translate(old: v2_3::Config, _report: &mut Report) -> v2_4_exp::Config {
    v2_4_exp::Config {
        ignition: v2_4_exp::Ignition {
            version: SchemaVersion::V2_4Experimental.tag().to_string(),
            config: old.ignition.config,
            timeouts: old.ignition.timeouts,
            security: old.ignition.security,
            proxy: v2_4_exp::Proxy::default(),
        },
        storage: v2_4_exp::Storage {
            disks: old.storage.disks,
            filesystems: old.storage.filesystems,
            files: old
                .storage
                .files
                .into_iter()
                .map(|f| v2_4_exp::File {
                    filesystem: f.filesystem,
                    path: f.path,
                    overwrite: None,
                    contents: f.contents,
                    append: f.append,
                    mode: f.mode,
                    user: f.user,
                    group: f.group,
                })
                .collect(),
            directories: old
                .storage
                .directories
                .into_iter()
                .map(|d| v2_4_exp::Directory {
                    filesystem: d.filesystem,
                    path: d.path,
                    overwrite: None,
                    mode: d.mode,
                    user: d.user,
                    group: d.group,
                })
                .collect(),
            links: old
                .storage
                .links
                .into_iter()
                .map(|l| v2_4_exp::Link {
                    filesystem: l.filesystem,
                    path: l.path,
                    overwrite: None,
                    target: l.target,
                    hard: l.hard,
                    user: l.user,
                    group: l.group,
                })
                .collect(),
        },
        systemd: old.systemd,
        networkd: old.networkd,
        passwd: old.passwd,
    }
}
