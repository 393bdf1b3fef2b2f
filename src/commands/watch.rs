//! `papertrend watch` command
//!
//! Each stdin line is a new top-N. Every change issues a fresh fetch while
//! earlier ones may still be running; only the newest request's response is
//! rendered once input ends.

use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::cli::parse::parse_positive;
use crate::cli::WatchArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::trends::output_report;
use papertrend_core::client::{FetchSession, FileSource, TrendsSource};
use papertrend_core::error::{Result, TrendError};
use papertrend_core::trends::{TrendsReport, ViewState};

/// Execute the watch command
pub fn execute(ctx: &CommandContext, args: &WatchArgs) -> Result<()> {
    let view = ctx.view_state(args.sort, args.window, None, None);
    let stdin = io::stdin();

    match &args.input {
        Some(path) => watch(ctx, FileSource::new(path), view, stdin.lock()),
        None => watch(ctx, ctx.api_client(), view, stdin.lock()),
    }
}

fn watch<S: TrendsSource, R: BufRead>(
    ctx: &CommandContext,
    source: S,
    view: ViewState,
    input: R,
) -> Result<()> {
    let mut session = FetchSession::new(source);

    for line in input.lines() {
        let line = line?;
        let value = line.trim();
        if value.is_empty() {
            continue;
        }

        let top_n = parse_positive(value)
            .map_err(|e| TrendError::UsageError(format!("invalid top-n '{}': {}", value, e)))?;
        let generation = session.request(top_n);
        debug!(generation, top_n, "top_n_changed");

        match session.poll() {
            Some(Ok(fetched)) => debug!(generation = fetched.generation, "applied"),
            Some(Err(e)) => warn!(error = %e, "trends fetch failed"),
            None => {}
        }
    }

    if session.latest_generation() == 0 {
        session.request(view.top_n);
    }

    let fetched = session.wait_latest()?.clone();
    debug!(
        generation = fetched.generation,
        discarded = session.discarded(),
        "watch_done"
    );

    let report = TrendsReport::build(&fetched.trends, &view.with_top_n(fetched.top_n))?;
    output_report(ctx.cli, &report)
}
