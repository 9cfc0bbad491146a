//! Reading the config blob.

use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Where to read the config from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    /// Standard input, spelled `-`.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(s))
        })
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Source {
    /// Read the whole blob, refusing anything over `max_bytes`.
    pub(crate) fn read(&self, max_bytes: u64) -> Result<Vec<u8>> {
        let raw = match self {
            Self::Stdin => read_capped(std::io::stdin().lock(), max_bytes),
            Self::File(path) => {
                let file = File::open(path).with_context(|| format!("failed to open {self}"))?;
                read_capped(file, max_bytes)
            },
        }
        .with_context(|| format!("failed to read {self}"))?;
        debug!(source = %self, bytes = raw.len(), "Read config blob");
        Ok(raw)
    }
}

fn read_capped(reader: impl Read, max_bytes: u64) -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut raw)?;
    if u64::try_from(raw.len()).unwrap_or(u64::MAX) > max_bytes {
        bail!("input is larger than the {max_bytes} byte limit");
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_dash_is_stdin() {
        assert_eq!("-".parse::<Source>().unwrap(), Source::Stdin);
        assert_eq!(
            "cfg.ign".parse::<Source>().unwrap(),
            Source::File(PathBuf::from("cfg.ign"))
        );
    }

    #[test]
    fn test_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"ignition":{"version":"2.2.0"}}"#).unwrap();

        let source = Source::File(file.path().to_path_buf());
        let raw = source.read(1024).unwrap();
        assert_eq!(raw, br#"{"ignition":{"version":"2.2.0"}}"#);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0123456789").unwrap();

        let source = Source::File(file.path().to_path_buf());
        assert_eq!(source.read(10).unwrap().len(), 10);
        let err = source.read(9).unwrap_err();
        assert!(format!("{err:#}").contains("9 byte limit"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::File(dir.path().join("absent.ign"));
        let err = source.read(1024).unwrap_err();
        assert!(format!("{err:#}").contains("absent.ign"));
    }
}
