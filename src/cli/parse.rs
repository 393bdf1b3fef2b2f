use papertrend_core::format::OutputFormat;
use papertrend_core::trends::RankingKey;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse ranking key from string
pub fn parse_ranking_key(s: &str) -> std::result::Result<RankingKey, String> {
    s.parse::<RankingKey>().map_err(|e| e.to_string())
}

/// Parse a positive count (top-N, window length)
pub fn parse_positive(s: &str) -> std::result::Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
