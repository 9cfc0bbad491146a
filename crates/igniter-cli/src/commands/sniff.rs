//! `igniter sniff`: classify a blob without translating it.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use igniter_config::{ConfigError, FormatClass, resolve, sniff};

use super::write_rejection;
use crate::exit;
use crate::input::Source;
use crate::theme::Theme;

pub(crate) fn run(source: &Source, max_bytes: u64) -> Result<ExitCode> {
    let raw = source.read(max_bytes)?;
    let code = execute(&raw, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())?;
    Ok(ExitCode::from(code))
}

fn execute(raw: &[u8], out: &mut impl Write, err: &mut impl Write) -> Result<u8> {
    let sniffed = match sniff(raw) {
        Ok(sniffed) => sniffed,
        Err(e) => {
            write_rejection(err, &e)?;
            return Ok(exit::code_for(&e));
        },
    };

    let compression = if sniffed.was_compressed() { " (gzip)" } else { "" };
    writeln!(out, "{} {}{compression}", Theme::label("format:"), sniffed.class)?;

    if sniffed.class == FormatClass::JsonCandidate {
        let version = match serde_json::from_slice(&sniffed.content) {
            Ok(document) => match resolve(&document) {
                Ok(schema) => schema.to_string(),
                Err(ConfigError::UnknownVersion) => "unknown".to_owned(),
                Err(e) => e.to_string(),
            },
            Err(_) => "not valid JSON".to_owned(),
        };
        writeln!(out, "{} {version}", Theme::label("version:"))?;
    }

    Ok(exit::SUCCESS)
}

#[cfg(test)]
mod tests {
    use igniter_test::{GZIPPED_CLOUD_CONFIG, gzip};

    use super::*;

    fn sniffed(raw: &[u8]) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = execute(raw, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_reports_resolved_version() {
        let (code, out, _) = sniffed(br#"{"ignition":{"version":"2.3.0"}}"#);
        assert_eq!(code, exit::SUCCESS);
        assert!(out.contains("json"));
        assert!(out.contains("2.3.0"));
    }

    #[test]
    fn test_foreign_documents_are_classified_not_rejected() {
        let (code, out, _) = sniffed(GZIPPED_CLOUD_CONFIG);
        assert_eq!(code, exit::SUCCESS);
        assert!(out.contains("cloud-config (gzip)"));
        assert!(!out.contains("version:"));
    }

    #[test]
    fn test_unknown_and_malformed_versions() {
        let (_, out, _) = sniffed(&gzip(br#"{"ignition":{"version":"9.9.9"}}"#));
        assert!(out.contains("unknown"));
        let (_, out, _) = sniffed(b"{not json");
        assert!(out.contains("not valid JSON"));
    }

    #[test]
    fn test_corrupt_gzip_is_rejected() {
        let (code, _, err) = sniffed(&[0x1f, 0x8b, 0xff]);
        assert_eq!(code, 5);
        assert!(err.contains("not valid"));
    }
}
