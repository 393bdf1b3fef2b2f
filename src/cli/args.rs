use std::path::PathBuf;

use super::parse::{parse_positive, parse_ranking_key};
use clap::Args;
use papertrend_core::trends::RankingKey;

#[derive(Args, Debug, Clone)]
pub struct TrendsArgs {
    /// Number of categories to request and display
    #[arg(long, short = 'n', value_parser = parse_positive)]
    pub top_n: Option<usize>,

    /// Ranking (total-papers, category-name, peak-year)
    #[arg(long, short, value_parser = parse_ranking_key)]
    pub sort: Option<RankingKey>,

    /// Sparkline window in years
    #[arg(long, short, value_parser = parse_positive)]
    pub window: Option<usize>,

    /// Expand the year-by-year history of one category
    #[arg(long, short)]
    pub category: Option<String>,

    /// Read the trends payload from a file instead of the service
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum results to display
    #[arg(long, value_parser = parse_positive)]
    pub limit: Option<usize>,

    /// Read the search response from a file instead of the service
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct PaperArgs {
    /// Paper id (database id or arXiv id)
    pub id: String,

    /// Read the paper from a file instead of the service
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Abstract to match against
    #[arg(long = "abstract")]
    pub abstract_text: String,

    /// Title of the draft
    #[arg(long)]
    pub title: Option<String>,

    /// Authors of the draft
    #[arg(long)]
    pub authors: Option<String>,

    /// Space-separated category tags
    #[arg(long)]
    pub categories: Option<String>,

    /// Maximum results to display
    #[arg(long, value_parser = parse_positive)]
    pub limit: Option<usize>,

    /// Read the recommendation response from a file instead of the service
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// Ranking (total-papers, category-name, peak-year)
    #[arg(long, short, value_parser = parse_ranking_key)]
    pub sort: Option<RankingKey>,

    /// Sparkline window in years
    #[arg(long, short, value_parser = parse_positive)]
    pub window: Option<usize>,

    /// Read the trends payload from a file instead of the service
    #[arg(long)]
    pub input: Option<PathBuf>,
}
