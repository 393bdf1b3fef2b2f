//! `papertrend recommend` command

use tracing::debug;

use crate::cli::{Cli, RecommendArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::paper::{paper_byline, paper_headline, ABSTRACT_PREVIEW_CHARS};
use crate::commands::read_input;
use papertrend_core::bail_usage;
use papertrend_core::error::Result;
use papertrend_core::format::{escape_quotes, OutputFormat};
use papertrend_core::recommend::{
    score_results, truncate, RecommendRequest, RecommendResponse, RecommendationSummary,
    ScoredPaper,
};

/// Execute the recommend command
pub fn execute(ctx: &CommandContext, args: &RecommendArgs) -> Result<()> {
    if args.abstract_text.trim().is_empty() {
        bail_usage!("--abstract must not be empty");
    }

    let request = RecommendRequest {
        title: args.title.clone().unwrap_or_default(),
        authors: args.authors.clone().unwrap_or_default(),
        abstract_text: args.abstract_text.clone(),
        categories: args.categories.clone().unwrap_or_default(),
    };

    let response = match &args.input {
        Some(path) => RecommendResponse::parse(&read_input(path)?)?,
        None => ctx.api_client().recommend(&request)?,
    };

    let scored = score_results(response.results);
    let summary = RecommendationSummary::from_scored(&scored);
    debug!(
        results = summary.results_count,
        quality = %summary.quality,
        "recommend"
    );

    let shown = args.limit.unwrap_or(scored.len()).min(scored.len());
    let displayed = &scored[..shown];

    match ctx.cli.format {
        OutputFormat::Human => output_human(ctx.cli, &summary, displayed),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "summary": summary,
                "results": displayed,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => output_records(&summary, displayed),
    }
    Ok(())
}

fn output_human(cli: &Cli, summary: &RecommendationSummary, scored: &[ScoredPaper]) {
    if !cli.quiet {
        println!(
            "Match quality: {} ({})",
            summary.quality,
            summary.quality.description()
        );
        let mut line = format!("{} results", summary.results_count);
        if let Some(avg) = summary.average_match_score {
            line.push_str(&format!(", avg. match {}%", avg));
        }
        if let Some((first, last)) = summary.year_range {
            line.push_str(&format!(", published {}-{}", first, last));
        }
        println!("{}", line);
    }

    if scored.is_empty() {
        if !cli.quiet {
            println!("No similar papers found");
        }
        return;
    }

    for entry in scored {
        println!();
        println!(
            "{:>6}%  {}  ({} min read)",
            format_score(entry.match_score),
            paper_headline(&entry.paper),
            entry.reading_minutes
        );
        if cli.quiet {
            continue;
        }
        let byline = paper_byline(&entry.paper);
        if !byline.is_empty() {
            println!("         {}", byline);
        }
        if !entry.paper.abstract_text.is_empty() {
            println!(
                "         {}",
                truncate(entry.paper.abstract_text.trim(), ABSTRACT_PREVIEW_CHARS)
            );
        }
    }
}

fn output_records(summary: &RecommendationSummary, scored: &[ScoredPaper]) {
    let avg = summary
        .average_match_score
        .map(|a| a.to_string())
        .unwrap_or_else(|| "-".to_string());
    let years = summary
        .year_range
        .map(|(first, last)| format!("{}-{}", first, last))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "H papertrend=1 records=1 mode=recommend results={} avg_score={} years={} quality={}",
        summary.results_count,
        avg,
        years,
        summary.quality.to_string().to_lowercase()
    );

    for entry in scored {
        println!(
            "R {} score={} {} \"{}\" minutes={}",
            entry.rank + 1,
            format_score(entry.match_score),
            entry.paper.key().unwrap_or("-"),
            escape_quotes(&entry.paper.title),
            entry.reading_minutes
        );
    }
}

/// Whole scores without a fraction, others to one decimal
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}
