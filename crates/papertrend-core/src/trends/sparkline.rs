//! Windowed, locally normalized bar heights for a category's recent years
//!
//! Heights are scaled against the largest count inside the window only, so
//! they are not comparable across categories or across windows.

use serde::Serialize;

use super::stats::CategoryStats;

/// Number of most recent years shown by default
pub const DEFAULT_WINDOW: usize = 8;

/// Lowest bar height, keeps zero and near-zero years visible
pub const MIN_BAR_HEIGHT: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparkBar {
    pub year: i32,
    pub count: u64,
    pub height_percent: f64,
}

/// Bars for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sparkline {
    pub category: String,
    pub bars: Vec<SparkBar>,
}

impl Sparkline {
    pub fn for_stats(stats: &CategoryStats, window_size: usize) -> Self {
        Self {
            category: stats.category.clone(),
            bars: window(&stats.year_entries, window_size),
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Reduce ascending `(year, count)` entries to the last `size` bars.
pub fn window(entries: &[(i32, u64)], size: usize) -> Vec<SparkBar> {
    let start = entries.len().saturating_sub(size);
    let recent = &entries[start..];

    let local_max = recent.iter().map(|&(_, c)| c).max().unwrap_or(0);

    recent
        .iter()
        .map(|&(year, count)| {
            let height = if local_max == 0 {
                0.0
            } else {
                count as f64 / local_max as f64 * 100.0
            };
            SparkBar {
                year,
                count,
                height_percent: height.max(MIN_BAR_HEIGHT),
            }
        })
        .collect()
}
