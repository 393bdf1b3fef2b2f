use std::fmt;

use serde::Serialize;

use super::score::ScoredPaper;

/// Coarse label for a recommendation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchQuality {
    /// At least one recommendation came back
    Excellent,
    Good,
}

impl MatchQuality {
    pub fn description(&self) -> &'static str {
        match self {
            MatchQuality::Excellent => "High relevance matches found",
            MatchQuality::Good => "Moderate relevance matches",
        }
    }
}

impl fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchQuality::Excellent => write!(f, "Excellent"),
            MatchQuality::Good => write!(f, "Good"),
        }
    }
}

/// Rollup shown beside a recommendation list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationSummary {
    pub results_count: usize,
    /// Rounded mean of the display scores, `None` without results
    pub average_match_score: Option<u64>,
    /// Earliest and latest publication year among results that have one
    pub year_range: Option<(i32, i32)>,
    pub quality: MatchQuality,
}

impl RecommendationSummary {
    pub fn from_scored(scored: &[ScoredPaper]) -> Self {
        let results_count = scored.len();

        let average_match_score = if scored.is_empty() {
            None
        } else {
            let sum: f64 = scored.iter().map(|s| s.match_score).sum();
            Some((sum / results_count as f64).round() as u64)
        };

        let year_range = scored
            .iter()
            .filter_map(|s| s.paper.publication_year)
            .fold(None, |range, year| match range {
                None => Some((year, year)),
                Some((lo, hi)) => Some((i32::min(lo, year), i32::max(hi, year))),
            });

        let quality = if results_count > 0 {
            MatchQuality::Excellent
        } else {
            MatchQuality::Good
        };

        Self {
            results_count,
            average_match_score,
            year_range,
            quality,
        }
    }
}
