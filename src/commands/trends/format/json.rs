//! JSON output formatting for trends reports

use papertrend_core::error::Result;
use papertrend_core::trends::TrendsReport;

/// Output in JSON format
pub fn output_json(report: &TrendsReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
