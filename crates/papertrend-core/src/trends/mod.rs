//! Category trend analytics
//!
//! Pipeline: [`RawTrends`] (validated payload) → [`CategoryStats`] per
//! category → [`RankedTrends`] for a [`RankingKey`] → [`Sparkline`]s for the
//! displayed categories and an [`AggregateSummary`] over all of them.
//! [`TrendsReport::build`] runs the whole pipeline for one [`ViewState`].

pub mod ingest;
pub mod ranking;
pub mod report;
pub mod sparkline;
pub mod stats;
pub mod summary;
pub mod view;

pub use ingest::{RawTrends, YearCounts};
pub use ranking::{rank, RankedTrends, RankingKey};
pub use report::{CategoryDetail, Insights, TrendsReport};
pub use sparkline::{SparkBar, Sparkline, DEFAULT_WINDOW, MIN_BAR_HEIGHT};
pub use stats::{build_all, CategoryStats, YearShare};
pub use summary::AggregateSummary;
pub use view::{ViewState, DEFAULT_TOP_N};
