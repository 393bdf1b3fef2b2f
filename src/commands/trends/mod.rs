//! `papertrend trends` command

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, TrendsArgs};
use crate::commands::dispatch::CommandContext;
use papertrend_core::client::{FileSource, TrendsSource};
use papertrend_core::error::Result;
use papertrend_core::format::OutputFormat;
use papertrend_core::trends::TrendsReport;

/// Execute the trends command
pub fn execute(ctx: &CommandContext, args: &TrendsArgs) -> Result<()> {
    let view = ctx.view_state(args.sort, args.window, args.top_n, args.category.as_deref());

    let fetch_start = Instant::now();
    let raw = match &args.input {
        Some(path) => FileSource::new(path).fetch_trends(view.top_n)?,
        None => ctx.api_client().fetch_trends(view.top_n)?,
    };
    debug!(
        categories = raw.len(),
        elapsed = ?fetch_start.elapsed(),
        "fetch_trends"
    );

    let report = TrendsReport::build(&raw, &view)?;
    output_report(ctx.cli, &report)
}

/// Print a report in the selected output format
pub fn output_report(cli: &Cli, report: &TrendsReport) -> Result<()> {
    match cli.format {
        OutputFormat::Human => format::output_human(cli, report),
        OutputFormat::Json => format::output_json(report)?,
        OutputFormat::Records => format::output_records(report),
    }
    Ok(())
}
