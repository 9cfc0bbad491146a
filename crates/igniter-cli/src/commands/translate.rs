//! `igniter translate`: print the latest-version config.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use igniter_config::parse;

use super::{write_rejection, write_report};
use crate::exit;
use crate::input::Source;

pub(crate) fn run(source: &Source, max_bytes: u64, compact: bool) -> Result<ExitCode> {
    let raw = source.read(max_bytes)?;
    let code = execute(
        &raw,
        compact,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;
    Ok(ExitCode::from(code))
}

/// The config goes to `out`; diagnostics go to `err` so the output can be
/// piped straight into another tool.
fn execute(raw: &[u8], compact: bool, out: &mut impl Write, err: &mut impl Write) -> Result<u8> {
    let (result, report) = parse(raw);
    write_report(err, &report)?;

    match result {
        Ok(config) => {
            let json = if compact {
                serde_json::to_string(&config)
            } else {
                serde_json::to_string_pretty(&config)
            }
            .context("failed to encode translated config")?;
            writeln!(out, "{json}")?;
            Ok(exit::SUCCESS)
        },
        Err(e) => {
            write_rejection(err, &e)?;
            Ok(exit::code_for(&e))
        },
    }
}
