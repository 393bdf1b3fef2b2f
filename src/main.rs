//! Papertrend - research publication trend analytics CLI
//!
//! Fetches category trends, searches and recommendations from a research
//! search service and turns them into rankings, sparklines, summaries and
//! match scores.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use papertrend_core::error::{ExitCode as TrendExitCode, TrendError};
use papertrend_core::format::OutputFormat;
use papertrend_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // clap fails before `Cli.format` exists, so look at argv directly
        Err(err) if argv_requests_json() => {
            let parse_error = parse_error_for_json(err);
            eprintln!("{}", parse_error.to_json());
            return ExitCode::from(parse_error.exit_code() as u8);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(TrendExitCode::Success as u8),
        Err(e) => report_error(&cli, &e),
    }
}

/// Print a command failure in the requested format and pick the exit code
fn report_error(cli: &Cli, err: &TrendError) -> ExitCode {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", err);
    }
    ExitCode::from(err.exit_code() as u8)
}

/// Classify a clap failure for the JSON error envelope.
///
/// Help and version output are not errors and exit through clap.
fn parse_error_for_json(err: clap::Error) -> TrendError {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => TrendError::UsageError(err.to_string()),
        _ => TrendError::Other(err.to_string()),
    }
}

/// True when argv asks for `--format json`, in either spelling
fn argv_requests_json() -> bool {
    requests_json(env::args().skip(1))
}

fn requests_json(mut args: impl Iterator<Item = String>) -> bool {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().is_some_and(|v| v == "json") => return true,
            _ => {}
        }
    }
    false
}
