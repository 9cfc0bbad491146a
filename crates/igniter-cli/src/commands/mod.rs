//! CLI command implementations.
//!
//! Each command reads its input, writes to the given output streams and
//! returns the process exit code.

pub(crate) mod sniff;
pub(crate) mod translate;
pub(crate) mod validate;

use std::io::Write;

use igniter_config::{ConfigError, Report};

use crate::theme::Theme;

/// Print every report entry, one per line.
fn write_report(out: &mut impl Write, report: &Report) -> std::io::Result<()> {
    for entry in report.entries() {
        writeln!(out, "{}", Theme::entry(entry))?;
    }
    Ok(())
}

/// Print a pipeline rejection, with its position when known.
fn write_rejection(out: &mut impl Write, err: &ConfigError) -> std::io::Result<()> {
    match err {
        ConfigError::Invalid {
            position: Some(position),
            ..
        } => writeln!(out, "{}", Theme::error(&format!("{err} ({position})"))),
        _ => writeln!(out, "{}", Theme::error(&err.to_string())),
    }
}
