// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line front end.
//!
//! `kvcfg <CONFIG_FILE> [PARAMS]...` parses the file, prints every problem it
//! found, dumps the resulting parameters and then reports each requested
//! parameter on its own line. Only a file that cannot be opened or read stops
//! the run early; malformed lines and unknown parameters are reported and
//! skipped.

use crate::adapters::{dump, DumpFormat, FileLineSource, ParserOptions};
use crate::domain::{ConfigError, Result};
use crate::service::{ParamLookup, StoreBuilder};
use clap::{CommandFactory, Parser};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Exit status after a clean run, or after recoverable problems without `--strict`.
pub const EXIT_OK: u8 = 0;

/// Exit status when the file could not be read, or on problems with `--strict`.
pub const EXIT_FAILURE: u8 = 1;

/// Command-line arguments for the `kvcfg` binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "kvcfg")]
#[command(version)]
#[command(about = "Report parameters from a key = value configuration file")]
pub struct CliArgs {
    /// Configuration file to read
    pub config_file: PathBuf,

    /// Parameters to report, matched case-insensitively
    pub params: Vec<String>,

    /// Treat `param =` (a parameter without a value) as an error
    #[arg(long, env = "KVCFG_NULL_VALUE_IS_ERROR")]
    pub null_value_is_error: bool,

    /// How to dump the parsed configuration
    #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
    pub format: DumpFormat,

    /// Do not dump the parsed configuration
    #[arg(long)]
    pub no_dump: bool,

    /// Exit with a failure status if any problem was reported
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging (to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parser options selected by these arguments.
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions::new().with_null_value_is_error(self.null_value_is_error)
    }
}

/// Returns the one-line usage text.
pub fn usage() -> String {
    CliArgs::command().render_usage().to_string()
}

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise only errors are logged, or everything
/// down to debug with `verbose`. Colour is used only when stderr is a terminal.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) -> std::result::Result<(), TryInitError> {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish()
        .try_init()
}

/// Runs the tool, writing reports to `out` and problems to `err`.
///
/// Returns the process exit status.
///
/// # Errors
///
/// Returns an error if the file fails while being read, or if writing to
/// `out` or `err` fails.
pub fn run<W: Write, E: Write>(args: &CliArgs, out: &mut W, err: &mut E) -> Result<u8> {
    let source = match FileLineSource::open(&args.config_file) {
        Ok(source) => source,
        Err(e @ (ConfigError::FileNotFound { .. } | ConfigError::SourceError { .. })) => {
            writeln!(err, "{}", e)?;
            writeln!(err, "{}", usage())?;
            return Ok(EXIT_FAILURE);
        }
        Err(e) => return Err(e),
    };

    let report = StoreBuilder::with_options(args.parser_options()).parse(source)?;
    for diagnostic in &report.diagnostics {
        writeln!(err, "{}", diagnostic)?;
        writeln!(err, "{}", diagnostic.line.text)?;
    }

    if !args.no_dump {
        dump(&report.store, args.format, out)?;
    }

    let lookup = ParamLookup::new(&report.store);
    let mut missing = 0usize;
    for name in &args.params {
        match lookup.lookup(name) {
            Ok(param) => writeln!(out, "{}", param)?,
            Err(e @ ConfigError::ParamNotFound { .. }) => {
                missing += 1;
                writeln!(err, "{}", e)?;
            }
            Err(e) => return Err(e),
        }
    }

    if args.strict && (report.has_diagnostics() || missing > 0) {
        Ok(EXIT_FAILURE)
    } else {
        Ok(EXIT_OK)
    }
}
