//! Post-processing of search and recommendation results

pub mod paper;
pub mod score;
pub mod summary;

pub use paper::{
    reading_minutes, split_tags, truncate, Paper, RecommendRequest, RecommendResponse,
    SearchResponse,
};
pub use score::{match_score, score_results, ScoredPaper, SCORE_FLOOR, TOP_SCORE};
pub use summary::{MatchQuality, RecommendationSummary};
