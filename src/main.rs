//! Graphwalk - shortest paths and word ladders
//!
//! `graphwalk paths` runs Dijkstra's algorithm over a weighted graph file;
//! `graphwalk ladder` searches a dictionary for the shortest word ladder.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use graphwalk_core::error::{ExitCode as GraphwalkExitCode, GraphwalkError};
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            match err.kind() {
                // Help and version are informational, not errors - let clap handle them
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    err.exit()
                }
                _ => {}
            }

            // `--format` is a global flag, but clap may fail parsing before we can
            // inspect `Cli.format`. If the user requested JSON output, emit a
            // structured error envelope.
            let error = GraphwalkError::UsageError(err.to_string());
            if argv_format_json {
                eprintln!("{}", error.to_json());
            } else {
                let _ = err.print();
            }
            return ExitCode::from(error.exit_code() as u8);
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(GraphwalkExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            // Fatal errors are reported even under --quiet
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
