//! HTTP client for the research service
//!
//! Thin synchronous wrapper over `ureq`. Every non-2xx status and every
//! transport failure becomes [`TrendError::UpstreamFailure`]; nothing is
//! retried here, a retry is the caller re-issuing the request.

use std::time::{Duration, Instant};

use tracing::debug;
use ureq::Agent;

use super::source::TrendsSource;
use crate::config::ClientConfig;
use crate::error::{Result, TrendError};
use crate::map_upstream_err;
use crate::recommend::{Paper, RecommendRequest, RecommendResponse, SearchResponse};
use crate::trace_time;
use crate::trends::RawTrends;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Connection settings for [`ApiClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl From<&ClientConfig> for ApiConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_root().to_string(),
            timeout_seconds: config.timeout_seconds,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

/// Client for the trends, search, paper and recommendation endpoints
pub struct ApiClient {
    pub config: ApiConfig,
    agent: Agent,
    user_agent: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_seconds)))
            .build()
            .into();
        let user_agent = format!("papertrend/{} ({})", APP_VERSION, std::env::consts::OS);

        Self {
            config,
            agent,
            user_agent,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    /// `GET /papers/trends/?top_n=N`
    pub fn fetch_trends(&self, top_n: usize) -> Result<RawTrends> {
        let start = Instant::now();
        let url = self.url("papers/trends/");
        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .query("top_n", top_n.to_string())
            .call();
        let body = read_body("trends", response)?;
        trace_time!(start, "fetch_trends", top_n = top_n);
        RawTrends::parse(&body)
    }

    /// `GET /papers/?search=Q`
    pub fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = self.url("papers/");
        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .query("search", query)
            .call();
        let body = read_body("search", response)?;
        SearchResponse::parse(&body)
    }

    /// `GET /papers/{id}/`
    pub fn paper(&self, id: &str) -> Result<Paper> {
        let url = self.url(&format!("papers/{}/", urlencoding::encode(id)));
        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .call();
        let body = read_body("paper", response)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `POST /user-uploads/recommend/`
    pub fn recommend(&self, request: &RecommendRequest) -> Result<RecommendResponse> {
        let url = self.url("user-uploads/recommend/");
        let payload = serde_json::to_string(request)?;
        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .send(payload);
        let body = read_body("recommend", response)?;
        RecommendResponse::parse(&body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl TrendsSource for ApiClient {
    fn fetch_trends(&self, top_n: usize) -> Result<RawTrends> {
        ApiClient::fetch_trends(self, top_n)
    }
}

fn read_body(
    operation: &str,
    response: std::result::Result<ureq::http::Response<ureq::Body>, ureq::Error>,
) -> Result<String> {
    let mut response = response.map_err(|e| upstream_error(operation, e))?;

    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        return Err(TrendError::upstream(operation, format!("HTTP {}", status)));
    }

    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| upstream_error(operation, e))?;
    debug!(operation, status, bytes = body.len(), "upstream_response");
    Ok(body)
}

fn upstream_error(operation: &str, err: ureq::Error) -> TrendError {
    match err {
        ureq::Error::StatusCode(code) => map_upstream_err!(operation, format!("HTTP {}", code)),
        other => map_upstream_err!(operation, other),
    }
}
