pub mod dispatch;
pub mod paper;
pub mod recommend;
pub mod search;
pub mod trends;
pub mod watch;

use std::fs;
use std::path::Path;

use papertrend_core::error::{Result, TrendError};

/// Read a saved service response given with `--input`
pub(crate) fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        TrendError::Other(format!("failed to read {}: {}", path.display(), e))
    })
}
