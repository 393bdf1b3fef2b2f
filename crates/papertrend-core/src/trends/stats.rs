//! Per-category derived statistics

use serde::Serialize;

use super::ingest::{RawTrends, YearCounts};
use crate::bail_malformed;
use crate::error::Result;

/// Derived statistics for one category's publication history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    /// Source year counts
    pub years: YearCounts,
    pub total_papers: u64,
    pub start_year: i32,
    pub end_year: i32,
    /// Earliest year holding the maximum count
    pub peak_year: i32,
    pub peak_count: u64,
    /// Count of the latest year minus count of the year before it
    pub recent_trend: i64,
    /// `(year, count)` pairs, ascending by year
    pub year_entries: Vec<(i32, u64)>,
}

/// One row of a category's history, scaled against its peak
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearShare {
    pub year: i32,
    pub count: u64,
    /// Change from the previous listed year, absent for the first row
    pub delta: Option<i64>,
    /// `count / peak_count * 100`
    pub percent_of_peak: f64,
}

impl CategoryStats {
    /// Compute statistics for one category.
    ///
    /// `years` must hold at least one entry.
    pub fn build(category: impl Into<String>, years: &YearCounts) -> Result<Self> {
        let category = category.into();

        // BTreeMap iteration is ascending by year
        let year_entries: Vec<(i32, u64)> = years.iter().map(|(&y, &c)| (y, c)).collect();

        let (Some(&(start_year, _)), Some(&(end_year, _))) =
            (year_entries.first(), year_entries.last())
        else {
            bail_malformed!("category '{}' has no years", category);
        };

        let Some(total_papers) = year_entries
            .iter()
            .try_fold(0u64, |total, &(_, count)| total.checked_add(count))
        else {
            bail_malformed!("total papers for '{}' overflows", category);
        };

        // Strictly-greater update keeps the earliest year on ties
        let mut peak_year = start_year;
        let mut peak_count = 0;
        for &(year, count) in &year_entries {
            if count > peak_count {
                peak_year = year;
                peak_count = count;
            }
        }

        let recent_trend = match year_entries.as_slice() {
            [.., (_, prev), (_, last)] => signed(*last) - signed(*prev),
            _ => 0,
        };

        Ok(Self {
            category,
            years: years.clone(),
            total_papers,
            start_year,
            end_year,
            peak_year,
            peak_count,
            recent_trend,
            year_entries,
        })
    }

    /// Number of calendar years covered, inclusive
    pub fn span_years(&self) -> u32 {
        self.end_year.abs_diff(self.start_year) + 1
    }

    pub fn is_growing(&self) -> bool {
        self.recent_trend > 0
    }

    /// Full chronological history with year-over-year deltas
    pub fn history(&self) -> Vec<YearShare> {
        let mut previous: Option<u64> = None;
        self.year_entries
            .iter()
            .map(|&(year, count)| {
                let percent_of_peak = if self.peak_count == 0 {
                    0.0
                } else {
                    count as f64 / self.peak_count as f64 * 100.0
                };
                let delta = previous.map(|p| signed(count) - signed(p));
                previous = Some(count);
                YearShare {
                    year,
                    count,
                    delta,
                    percent_of_peak,
                }
            })
            .collect()
    }
}

/// Build statistics for every category, in label order
pub fn build_all(raw: &RawTrends) -> Result<Vec<CategoryStats>> {
    raw.iter()
        .map(|(category, years)| CategoryStats::build(category, years))
        .collect()
}

fn signed(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
