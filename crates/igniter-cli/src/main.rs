//! Igniter CLI - inspect, validate and translate provisioning configs.
//!
//! Every command reads a single blob from a file or stdin, runs it through
//! `igniter-config` and reports the outcome. Failures map to distinct exit
//! codes so scripts can tell a pasted cloud-init file from a typo.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use igniter_telemetry::{FileRotation, LogConfig, LogFormat};

mod commands;
mod exit;
mod input;
mod theme;

use commands::{sniff, translate, validate};
use input::Source;
use theme::Theme;

/// Default cap on input size (16 MiB), before decompression.
const DEFAULT_MAX_CONFIG_BYTES: u64 = 16_777_216;

/// Igniter - provisioning config toolkit
#[derive(Parser)]
#[command(name = "igniter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (forces debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level or filter directive
    #[arg(long, global = true, env = "IGNITER_LOG", default_value = "warn")]
    log_level: String,

    /// Log format: pretty, compact, json or full
    #[arg(long, global = true, env = "IGNITER_LOG_FORMAT", default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Write logs to rolling files in this directory instead of stderr
    #[arg(long, global = true, env = "IGNITER_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Reject input larger than this many bytes
    #[arg(long, global = true, env = "IGNITER_MAX_CONFIG_BYTES", default_value_t = DEFAULT_MAX_CONFIG_BYTES)]
    max_size: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a blob and show its declared version
    Sniff {
        /// Config file, or `-` for stdin
        input: Source,
    },

    /// Run the full pipeline and print diagnostics
    Validate {
        /// Config file, or `-` for stdin
        input: Source,
    },

    /// Print the config translated to the latest version
    Translate {
        /// Config file, or `-` for stdin
        input: Source,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        let level = if self.verbose { "debug" } else { self.log_level.as_str() };
        let config = LogConfig::new(level).with_format(self.log_format);
        match &self.log_dir {
            Some(dir) => config.with_file_logging(dir, FileRotation::Daily),
            None => config,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = igniter_telemetry::setup_logging(&cli.log_config()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let result = match cli.command {
        Commands::Sniff { input } => sniff::run(&input, cli.max_size),
        Commands::Validate { input } => validate::run(&input, cli.max_size),
        Commands::Translate { input, compact } => translate::run(&input, cli.max_size, compact),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", Theme::error(&format!("{e:#}")));
            ExitCode::from(exit::FAILURE)
        },
    }
}
