//! Trends report: the full derived view for one fetch
//!
//! A report is a pure function of the ingested data and a [`ViewState`];
//! changing any view parameter means building a new report.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use super::ingest::RawTrends;
use super::ranking::{rank, RankedTrends};
use super::sparkline::Sparkline;
use super::stats::{build_all, CategoryStats, YearShare};
use super::summary::AggregateSummary;
use super::view::ViewState;
use crate::error::{Result, TrendError};
use crate::trace_time;

/// Expanded history of the selected category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDetail {
    pub category: String,
    pub total_papers: u64,
    pub peak_year: i32,
    pub peak_count: u64,
    pub span_years: u32,
    pub recent_trend: i64,
    pub history: Vec<YearShare>,
}

impl From<&CategoryStats> for CategoryDetail {
    fn from(stats: &CategoryStats) -> Self {
        Self {
            category: stats.category.clone(),
            total_papers: stats.total_papers,
            peak_year: stats.peak_year,
            peak_count: stats.peak_count,
            span_years: stats.span_years(),
            recent_trend: stats.recent_trend,
            history: stats.history(),
        }
    }
}

/// Headline observations over the ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    /// First-ranked category and its paper count
    pub leader: Option<(String, u64)>,
    /// Growing categories, largest recent increase first
    pub growing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendsReport {
    pub view: ViewState,
    /// Leading `top_n` categories in ranking order
    pub ranked: Vec<CategoryStats>,
    /// Categories ranked but not displayed
    pub hidden: usize,
    /// One sparkline per displayed category, same order as `ranked`
    pub sparklines: Vec<Sparkline>,
    /// Computed over every category, not just the displayed ones
    pub summary: AggregateSummary,
    pub insights: Insights,
    pub selected: Option<CategoryDetail>,
}

impl TrendsReport {
    pub fn build(raw: &RawTrends, view: &ViewState) -> Result<Self> {
        let start = Instant::now();
        view.validate()?;

        let stats = build_all(raw)?;
        let summary = AggregateSummary::from_stats(&stats)?;
        let ranked = rank(stats, view.ranking_key);

        let selected = match &view.selected_category {
            Some(name) => Some(select(&ranked, name)?),
            None => None,
        };

        let insights = insights(&ranked);
        let displayed = ranked.top(view.top_n).to_vec();
        let sparklines = displayed
            .iter()
            .map(|s| Sparkline::for_stats(s, view.window_size))
            .collect();

        debug!(
            categories = ranked.len(),
            displayed = displayed.len(),
            ranking = %view.ranking_key,
            "trends_report"
        );
        trace_time!(start, "build_report");

        Ok(Self {
            view: view.clone(),
            hidden: ranked.len() - displayed.len(),
            ranked: displayed,
            sparklines,
            summary,
            insights,
            selected,
        })
    }
}

fn select(ranked: &RankedTrends, name: &str) -> Result<CategoryDetail> {
    ranked
        .iter()
        .find(|s| s.category == name)
        .map(CategoryDetail::from)
        .ok_or_else(|| TrendError::invalid_value("category", name))
}

fn insights(ranked: &RankedTrends) -> Insights {
    let leader = ranked
        .leader()
        .map(|s| (s.category.clone(), s.total_papers));

    let mut growing: Vec<&CategoryStats> = ranked.iter().filter(|s| s.is_growing()).collect();
    growing.sort_by(|a, b| {
        b.recent_trend
            .cmp(&a.recent_trend)
            .then_with(|| a.category.cmp(&b.category))
    });

    Insights {
        leader,
        growing: growing.into_iter().map(|s| s.category.clone()).collect(),
    }
}
