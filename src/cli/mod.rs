//! CLI argument parsing for papertrend
//!
//! Global flags: --base-url, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use papertrend_core::format::OutputFormat;

pub use args::{PaperArgs, RecommendArgs, SearchArgs, TrendsArgs, WatchArgs};
use parse::parse_output_format;

/// Papertrend - research publication trend analytics
#[derive(Parser, Debug)]
#[command(name = "papertrend")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Research service API root (overrides config and PAPERTREND_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Alternate config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, papertrend_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank research categories by publication trends
    Trends(TrendsArgs),

    /// Search papers
    Search(SearchArgs),

    /// Show a single paper
    Paper(PaperArgs),

    /// Recommend papers similar to an abstract
    Recommend(RecommendArgs),

    /// Re-fetch trends for each top-N read from stdin, keeping the latest
    Watch(WatchArgs),
}
