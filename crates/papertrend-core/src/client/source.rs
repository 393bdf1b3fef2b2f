use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, TrendError};
use crate::trends::RawTrends;

/// Anything that can answer a trends query for a given top-N
pub trait TrendsSource: Send + Sync + 'static {
    fn fetch_trends(&self, top_n: usize) -> Result<RawTrends>;
}

/// Trends payload saved to disk, re-read on every fetch
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TrendsSource for FileSource {
    fn fetch_trends(&self, top_n: usize) -> Result<RawTrends> {
        let body = fs::read_to_string(&self.path).map_err(|e| {
            TrendError::Other(format!(
                "failed to read trends from {}: {}",
                self.path.display(),
                e
            ))
        })?;
        debug!(path = %self.path.display(), top_n, "file_source");
        RawTrends::parse(&body)
    }
}
