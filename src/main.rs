// SPDX-License-Identifier: MIT OR Apache-2.0

//! `kvcfg`: report parameters from a `key = value` configuration file.

use clap::Parser;
use kvcfg::adapters::cli::{self, CliArgs};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    if let Err(e) = cli::init_tracing(args.verbose) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match cli::run(&args, &mut out, &mut err) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            let _ = writeln!(err, "{}", e);
            ExitCode::FAILURE
        }
    }
}

