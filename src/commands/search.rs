//! `papertrend search` command

use tracing::debug;

use crate::cli::SearchArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::paper::{paper_byline, paper_headline, paper_record};
use crate::commands::read_input;
use papertrend_core::error::Result;
use papertrend_core::format::{escape_quotes, OutputFormat};
use papertrend_core::recommend::SearchResponse;

/// Execute the search command
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let response = match &args.input {
        Some(path) => SearchResponse::parse(&read_input(path)?)?,
        None => ctx.api_client().search(&args.query)?,
    };
    debug!(
        count = response.count,
        returned = response.results.len(),
        "search"
    );

    let shown = args
        .limit
        .unwrap_or(response.results.len())
        .min(response.results.len());
    let results = &response.results[..shown];

    match ctx.cli.format {
        OutputFormat::Human => {
            if results.is_empty() {
                if !ctx.cli.quiet {
                    println!("No papers found for \"{}\"", args.query);
                }
                return Ok(());
            }
            if !ctx.cli.quiet {
                println!(
                    "Found {} papers for \"{}\" (showing {})",
                    response.count,
                    args.query,
                    results.len()
                );
                println!();
            }
            for paper in results {
                println!("{}", paper_headline(paper));
                let byline = paper_byline(paper);
                if !byline.is_empty() && !ctx.cli.quiet {
                    println!("    {}", byline);
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": args.query,
                "count": response.count,
                "results": results,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H papertrend=1 records=1 mode=search query=\"{}\" count={} results={}",
                escape_quotes(&args.query),
                response.count,
                results.len()
            );
            for paper in results {
                println!("{}", paper_record(paper));
            }
        }
    }
    Ok(())
}
