//! Rank-derived match percentages for recommended papers
//!
//! The service returns recommendations in its own order without a score.
//! The percentage shown next to each result is derived from its position
//! only: it is a display heuristic, not a relevance measure, and it stops
//! distinguishing results after the tenth.

use serde::Serialize;

use super::paper::Paper;

/// Score of the first result
pub const TOP_SCORE: f64 = 100.0;

/// Every result at index 10 or later scores this
pub const SCORE_FLOOR: f64 = 85.0;

/// Drop per rank position
pub const SCORE_STEP: f64 = 1.5;

/// `max(85, 100 - 1.5 * rank)` for a 0-based rank
pub fn match_score(rank: usize) -> f64 {
    (TOP_SCORE - SCORE_STEP * rank as f64).max(SCORE_FLOOR)
}

/// A recommendation with its position and display score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPaper {
    /// 0-based position in the service's ordering
    pub rank: usize,
    pub match_score: f64,
    pub reading_minutes: usize,
    pub paper: Paper,
}

/// Attach scores to results in the order the service returned them
pub fn score_results(results: Vec<Paper>) -> Vec<ScoredPaper> {
    results
        .into_iter()
        .enumerate()
        .map(|(rank, paper)| ScoredPaper {
            rank,
            match_score: match_score(rank),
            reading_minutes: paper.reading_minutes(),
            paper,
        })
        .collect()
}
