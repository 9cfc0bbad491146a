//! `2.2.0` → `2.3.0`. Lossless.

use crate::report::Report;
use crate::schema::{v2_2, v2_3};
use crate::version::SchemaVersion;

pub(super) fn translate(mut old: v2_2::Config, _report: &mut Report) -> v2_3::Config {
    old.ignition.version = SchemaVersion::V2_3.tag().to_string();
    v2_3::Config {
        ignition: old.ignition,
        storage: v2_3::Storage {
            disks: old.storage.disks.into_iter().map(disk).collect(),
            filesystems: old.storage.filesystems,
            files: old.storage.files,
            directories: old.storage.directories,
            links: old.storage.links,
        },
        systemd: old.systemd,
        networkd: old.networkd,
        passwd: old.passwd,
    }
}

fn disk(old: v2_2::Disk) -> v2_3::Disk {
    v2_3::Disk {
        device: old.device,
        wipe_table: old.wipe_table,
        partitions: old
            .partitions
            .into_iter()
            .map(|p| v2_3::Partition {
                label: p.label,
                number: p.number,
                size: p.size,
                start: p.start,
                type_guid: p.type_guid,
                guid: p.guid,
                wipe_partition_entry: false,
                should_exist: None,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partitions_gain_unset_fields() {
        let old = v2_2::Config {
            storage: v2_2::Storage {
                disks: vec![v2_2::Disk {
                    device: "/dev/vda".to_owned(),
                    wipe_table: true,
                    partitions: vec![v2_2::Partition {
                        label: "ROOT".to_owned(),
                        number: 1,
                        size: 4_194_304,
                        ..Default::default()
                    }],
                }],
                ..Default::default()
            },
            ..Default::default()
        };
        let mut report = Report::new();
        let new = translate(old, &mut report);
        let partition = &new.storage.disks[0].partitions[0];
        assert_eq!(new.ignition.version, "2.3.0");
        assert_eq!(partition.label, "ROOT");
        assert_eq!(partition.size, 4_194_304);
        assert!(!partition.wipe_partition_entry);
        assert_eq!(partition.should_exist, None);
        assert!(report.is_empty());
    }
}
