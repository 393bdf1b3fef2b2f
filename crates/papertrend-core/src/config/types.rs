//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::trends::{RankingKey, DEFAULT_TOP_N, DEFAULT_WINDOW};

/// Research service root used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Default timeout for service requests
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const MIN_TIMEOUT_SECONDS: u64 = 5;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root of the research service API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Categories requested when `--top-n` is not given
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    /// Ranking used when `--sort` is not given
    #[serde(default)]
    pub ranking: RankingKey,

    /// Sparkline window length in years
    #[serde(default = "default_window")]
    pub sparkline_window: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            default_top_n: default_top_n(),
            ranking: RankingKey::default(),
            sparkline_window: default_window(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}
