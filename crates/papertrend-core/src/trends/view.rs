//! Explicit view parameters for a trends report

use serde::{Deserialize, Serialize};

use super::ranking::RankingKey;
use super::sparkline::DEFAULT_WINDOW;
use crate::bail_invalid;
use crate::error::Result;

/// Default number of categories requested and displayed
pub const DEFAULT_TOP_N: usize = 10;

/// Everything a trends report depends on besides the data itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Category to expand into a full history
    pub selected_category: Option<String>,
    pub ranking_key: RankingKey,
    /// Sparkline window length in years
    pub window_size: usize,
    /// Categories to request and display
    pub top_n: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_category: None,
            ranking_key: RankingKey::default(),
            window_size: DEFAULT_WINDOW,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ranking(mut self, key: RankingKey) -> Self {
        self.ranking_key = key;
        self
    }

    pub fn with_window(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_selected(mut self, category: impl Into<String>) -> Self {
        self.selected_category = Some(category.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            bail_invalid!("sparkline window", "0 (must be at least 1)");
        }
        if self.top_n == 0 {
            bail_invalid!("top-n", "0 (must be at least 1)");
        }
        Ok(())
    }
}
