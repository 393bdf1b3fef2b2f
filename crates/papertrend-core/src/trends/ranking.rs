//! Ordering of category statistics
//!
//! Every key breaks ties by category name ascending, so a ranking never
//! depends on the order categories arrived in.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::stats::CategoryStats;
use crate::error::TrendError;

/// Sort key for a trends ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RankingKey {
    /// Most papers first
    #[default]
    #[serde(rename = "total-papers", alias = "total_papers")]
    TotalPapersDesc,
    /// Alphabetical by category label
    #[serde(rename = "category-name", alias = "category_name")]
    CategoryNameAsc,
    /// Most recent peak first
    #[serde(rename = "peak-year", alias = "peak_year")]
    PeakYearDesc,
}

impl RankingKey {
    pub const ALL: [RankingKey; 3] = [
        RankingKey::TotalPapersDesc,
        RankingKey::CategoryNameAsc,
        RankingKey::PeakYearDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RankingKey::TotalPapersDesc => "total-papers",
            RankingKey::CategoryNameAsc => "category-name",
            RankingKey::PeakYearDesc => "peak-year",
        }
    }

    /// Compare two categories under this key, then by name
    pub fn compare(&self, a: &CategoryStats, b: &CategoryStats) -> Ordering {
        let primary = match self {
            RankingKey::TotalPapersDesc => b.total_papers.cmp(&a.total_papers),
            RankingKey::CategoryNameAsc => a.category.cmp(&b.category),
            RankingKey::PeakYearDesc => b.peak_year.cmp(&a.peak_year),
        };
        primary.then_with(|| a.category.cmp(&b.category))
    }
}

impl FromStr for RankingKey {
    type Err = TrendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "total-papers" => Ok(RankingKey::TotalPapersDesc),
            "category-name" => Ok(RankingKey::CategoryNameAsc),
            "peak-year" => Ok(RankingKey::PeakYearDesc),
            _ => Err(TrendError::invalid_value(
                "ranking key",
                format!("{} (expected: total-papers, category-name, or peak-year)", s),
            )),
        }
    }
}

impl fmt::Display for RankingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category statistics in ranking order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTrends {
    pub key: RankingKey,
    pub entries: Vec<CategoryStats>,
}

impl RankedTrends {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The leading `n` entries
    pub fn top(&self, n: usize) -> &[CategoryStats] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// The first-ranked category
    pub fn leader(&self) -> Option<&CategoryStats> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryStats> {
        self.entries.iter()
    }
}

/// Order statistics by `key`
pub fn rank(mut stats: Vec<CategoryStats>, key: RankingKey) -> RankedTrends {
    stats.sort_by(|a, b| key.compare(a, b));
    RankedTrends {
        key,
        entries: stats,
    }
}
