//! `igniter validate`: run the full pipeline and summarize.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use igniter_config::parse;

use super::{write_rejection, write_report};
use crate::exit;
use crate::input::Source;
use crate::theme::Theme;

pub(crate) fn run(source: &Source, max_bytes: u64) -> Result<ExitCode> {
    let raw = source.read(max_bytes)?;
    let code = execute(&raw, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())?;
    Ok(ExitCode::from(code))
}

fn execute(raw: &[u8], out: &mut impl Write, err: &mut impl Write) -> Result<u8> {
    let (result, report) = parse(raw);
    write_report(out, &report)?;

    match result {
        Ok(config) => {
            let summary = format!(
                "valid config, translated to {} with {} diagnostic(s)",
                config.ignition.version,
                report.len()
            );
            writeln!(out, "{}", Theme::success(&summary))?;
            Ok(exit::SUCCESS)
        },
        Err(e) => {
            write_rejection(err, &e)?;
            Ok(exit::code_for(&e))
        },
    }
}

#[cfg(test)]
mod tests {
    use igniter_test::{GZIPPED_SCRIPT, V2_0_CONFIG};

    use super::*;

    fn validated(raw: &[u8]) -> (u8, String, String) {
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
    fn test_valid_config_lists_diagnostics() {
        let (code, out, err) = validated(V2_0_CONFIG.as_bytes());
        assert_eq!(code, exit::SUCCESS);
        assert!(out.contains("3.0.0-experimental"));
        assert!(out.contains("deprecated at systemd.units.0.enable"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_rejections_use_their_own_codes() {
        assert_eq!(validated(b"").0, 2);
        assert_eq!(validated(b"#cloud-config\n").0, 3);
        assert_eq!(validated(GZIPPED_SCRIPT).0, 4);
        assert_eq!(validated(b"{\"ignition\":{\"version\":\"2.0.0\"},}").0, 5);
        assert_eq!(validated(b"{}").0, 6);
    }

    #[test]
    fn test_invalid_shows_position() {
        let (_, _, err) = validated(b"{\n  \"ignition\": [,\n}");
        assert!(err.contains("line 2"));
    }
}
