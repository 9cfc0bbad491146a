//! Test fixtures for config blobs.

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use tracing_subscriber::EnvFilter;

/// `#cloud-config\n` gzipped by an external tool, header timestamp included.
pub const GZIPPED_CLOUD_CONFIG: &[u8] = &[
    0x1f, 0x8b, 0x08, 0x00, 0x03, 0xd6, 0x79, 0x56, 0x00, 0x03, 0x53, 0x4e, 0xce, 0xc9, 0x2f, 0x4d,
    0xd1, 0x4d, 0xce, 0xcf, 0x4b, 0xcb, 0x4c, 0xe7, 0x02, 0x00, 0x05, 0x56, 0xb3, 0xb8, 0x0e, 0x00,
    0x00, 0x00,
];

/// `#!/bin/sh\n` gzipped by an external tool.
pub const GZIPPED_SCRIPT: &[u8] = &[
    0x1f, 0x8b, 0x08, 0x00, 0x48, 0xda, 0x79, 0x56, 0x00, 0x03, 0x53, 0x56, 0xd4, 0x4f, 0xca, 0xcc,
    0xd3, 0x2f, 0xce, 0xe0, 0x02, 0x00, 0x1d, 0x9d, 0xfb, 0x04, 0x0a, 0x00, 0x00, 0x00,
];

/// Gzip `data` in memory.
///
/// # Panics
///
/// Never in practice; writing to a `Vec` can't fail.
#[must_use]
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("write to in-memory gzip");
    encoder.finish().expect("finish in-memory gzip")
}

/// Install a subscriber that writes through the test harness, so log
/// output shows up only for failing tests. Safe to call more than once.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A legacy config: nested filesystem files, a deprecated unit `enable`,
/// `user.create` and a networkd unit.
pub const LEGACY_CONFIG: &str = r#"{
  "ignitionVersion": 1,
  "storage": {
    "disks": [{
      "device": "/dev/vda",
      "wipeTable": true,
      "partitions": [{
        "label": "ROOT",
        "number": 1,
        "start": 2048,
        "size": 4194304,
        "typeGuid": "4f68bce3-e8cd-4db1-96e7-fbcaf984b709"
      }]
    }],
    "filesystems": [{
      "device": "/dev/vda1",
      "format": "ext4",
      "create": {"force": true, "options": ["-L", "ROOT"]},
      "files": [{
        "path": "/etc/motd",
        "contents": "welcome\n",
        "mode": 420,
        "uid": 0,
        "gid": 0
      }]
    }]
  },
  "systemd": {
    "units": [{
      "name": "etcd.service",
      "enable": true,
      "contents": "[Service]\nExecStart=/usr/bin/etcd\n",
      "dropins": [{"name": "10-env.conf", "contents": "[Service]\nEnvironment=A=1\n"}]
    }]
  },
  "networkd": {
    "units": [{"name": "00-eth0.network", "contents": "[Match]\nName=eth0\n"}]
  },
  "passwd": {
    "users": [{
      "name": "core",
      "sshAuthorizedKeys": ["ssh-ed25519 AAAAC3Nza core@example"],
      "create": {"uid": 1000, "groups": ["wheel"], "shell": "/bin/bash"}
    }],
    "groups": [{"name": "ops", "gid": 2000}]
  }
}"#;

/// A `2.0.0` config: appended remote config, a created filesystem, a
/// pre-mounted filesystem and files on both.
pub const V2_0_CONFIG: &str = r#"{
  "ignition": {
    "version": "2.0.0",
    "config": {
      "append": [{
        "source": "https://example.com/base.ign",
        "verification": {"hash": "sha512-00"}
      }]
    }
  },
  "storage": {
    "filesystems": [
      {
        "name": "var",
        "mount": {
          "device": "/dev/vdb1",
          "format": "xfs",
          "create": {"force": true, "options": ["-n", "ftype=1"]}
        }
      },
      {"name": "oem", "path": "/usr/share/oem"}
    ],
    "files": [
      {
        "filesystem": "root",
        "path": "/etc/hostname",
        "contents": {"source": "data:,node1"},
        "mode": 420,
        "user": {"id": 0},
        "group": {"id": 0}
      },
      {
        "filesystem": "oem",
        "path": "/grub.cfg",
        "contents": {"source": "data:,set%20linux_append"}
      }
    ]
  },
  "systemd": {"units": [{"name": "docker.service", "enable": true}]},
  "passwd": {"users": [{"name": "core", "passwordHash": "$6$rounds=4096$salt$hash"}]}
}"#;

/// A `2.1.0` config: timeouts, mount options, directories, links and the
/// flattened user fields.
pub const V2_1_CONFIG: &str = r#"{
  "ignition": {
    "version": "2.1.0",
    "timeouts": {"httpResponseHeaders": 10, "httpTotal": 120}
  },
  "storage": {
    "filesystems": [
      {
        "name": "data",
        "mount": {
          "device": "/dev/disk/by-label/DATA",
          "format": "ext4",
          "wipeFilesystem": true,
          "label": "DATA",
          "options": ["-m", "0"]
        }
      },
      {"name": "srv", "path": "/srv"}
    ],
    "directories": [{
      "filesystem": "srv",
      "path": "/www",
      "mode": 493,
      "user": {"name": "web"}
    }],
    "links": [{
      "filesystem": "root",
      "path": "/etc/localtime",
      "target": "/usr/share/zoneinfo/UTC"
    }]
  },
  "systemd": {
    "units": [
      {"name": "nginx.service", "enabled": true, "contents": "[Service]\nExecStart=/usr/sbin/nginx\n"},
      {"name": "sshd.socket", "mask": true}
    ]
  },
  "passwd": {
    "users": [{
      "name": "web",
      "uid": 1001,
      "homeDir": "/srv/www",
      "noCreateHome": true,
      "groups": ["www-data"]
    }]
  }
}"#;

/// A `2.2.0` config: a custom CA and an appended file.
pub const V2_2_CONFIG: &str = r#"{
  "ignition": {
    "version": "2.2.0",
    "security": {
      "tls": {"certificateAuthorities": [{"source": "https://example.com/ca.pem"}]}
    }
  },
  "storage": {
    "files": [{
      "filesystem": "root",
      "path": "/etc/hosts",
      "append": true,
      "contents": {"source": "data:,10.0.0.2%20db"}
    }]
  }
}"#;

/// A `2.3.0` config: a partition that must not exist and one whose size
/// is not a whole number of MiB.
pub const V2_3_CONFIG: &str = r#"{
  "ignition": {"version": "2.3.0"},
  "storage": {
    "disks": [{
      "device": "/dev/sda",
      "partitions": [
        {"number": 1, "shouldExist": false},
        {"label": "DATA", "number": 2, "start": 4096, "size": 1000000, "wipePartitionEntry": true}
      ]
    }]
  }
}"#;

/// A `2.4.0-experimental` config: proxy settings and `overwrite`.
pub const V2_4_EXPERIMENTAL_CONFIG: &str = r#"{
  "ignition": {
    "version": "2.4.0-experimental",
    "proxy": {"httpsProxy": "http://proxy.example.com:3128", "noProxy": ["10.0.0.0/8"]}
  },
  "storage": {
    "files": [{
      "filesystem": "root",
      "path": "/etc/issue",
      "overwrite": true,
      "contents": {"source": "data:,hello"}
    }]
  }
}"#;

/// A `3.0.0-experimental` config.
pub const V3_0_EXPERIMENTAL_CONFIG: &str = r#"{
  "ignition": {
    "version": "3.0.0-experimental",
    "config": {"merge": [{"source": "https://example.com/extra.ign"}]}
  },
  "storage": {
    "filesystems": [{"device": "/dev/vdb", "format": "ext4", "path": "/var", "wipeFilesystem": true}],
    "files": [{
      "path": "/var/motd",
      "contents": {"source": "data:,hi"},
      "append": [{"source": "data:,more"}]
    }]
  },
  "systemd": {"units": [{"name": "kubelet.service", "enabled": true}]},
  "passwd": {"users": [{"name": "core", "groups": ["wheel"]}]}
}"#;

/// One sample per supported schema, oldest first.
pub const SAMPLE_CONFIGS: [(&str, &str); 7] = [
    ("legacy", LEGACY_CONFIG),
    ("2.0.0", V2_0_CONFIG),
    ("2.1.0", V2_1_CONFIG),
    ("2.2.0", V2_2_CONFIG),
    ("2.3.0", V2_3_CONFIG),
    ("2.4.0-experimental", V2_4_EXPERIMENTAL_CONFIG),
    ("3.0.0-experimental", V3_0_EXPERIMENTAL_CONFIG),
];

/// Version strings that must be rejected as unknown.
pub const UNKNOWN_VERSIONS: &[&str] = &[
    "1.0.0",
    "2.1.0-experimental",
    "2.2.0-experimental",
    "2.3.0-experimental",
    "2.5.0",
    "3.0.0",
    "invalid.semver",
];
