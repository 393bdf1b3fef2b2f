//! Corpus-wide rollup of category statistics

use serde::Serialize;
use tracing::debug;

use super::stats::CategoryStats;
use crate::bail_malformed;
use crate::error::{Result, TrendError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateSummary {
    pub total_categories: usize,
    pub total_all_papers: u64,
    /// Rounded half up
    pub avg_papers_per_category: u64,
    /// Categories whose latest year beat the year before
    pub categories_with_growth: usize,
    pub start_year_overall: i32,
    pub end_year_overall: i32,
}

impl AggregateSummary {
    /// Roll up every category. Fails with
    /// [`TrendError::EmptyAggregateInput`] when there is nothing to average.
    pub fn from_stats<'a, I>(stats: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a CategoryStats>,
    {
        let mut total_categories = 0usize;
        let mut total_all_papers = 0u64;
        let mut categories_with_growth = 0usize;
        let mut year_bounds: Option<(i32, i32)> = None;

        for item in stats {
            total_categories += 1;
            let Some(sum) = total_all_papers.checked_add(item.total_papers) else {
                bail_malformed!("total papers across categories overflows");
            };
            total_all_papers = sum;
            if item.recent_trend > 0 {
                categories_with_growth += 1;
            }
            for &year in item.years.keys() {
                year_bounds = Some(match year_bounds {
                    None => (year, year),
                    Some((lo, hi)) => (lo.min(year), hi.max(year)),
                });
            }
        }

        let Some((start_year_overall, end_year_overall)) = year_bounds else {
            return Err(TrendError::EmptyAggregateInput);
        };

        let summary = Self {
            total_categories,
            total_all_papers,
            avg_papers_per_category: rounded_average(total_all_papers, total_categories),
            categories_with_growth,
            start_year_overall,
            end_year_overall,
        };
        debug!(?summary, "aggregate_summary");
        Ok(summary)
    }
}

/// `round(total / count)` with halves rounded up, in integer arithmetic
fn rounded_average(total: u64, count: usize) -> u64 {
    let total = u128::from(total);
    let count = count as u128;
    ((2 * total + count) / (2 * count)) as u64
}
