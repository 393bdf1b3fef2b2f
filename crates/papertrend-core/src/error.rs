//! Error types and exit codes for papertrend
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including upstream service failures)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed trends payload, nothing to aggregate)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed or empty input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while fetching and analysing trend data
#[derive(Error, Debug)]
pub enum TrendError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("malformed trends data: {reason}")]
    MalformedTrendsData { reason: String },

    #[error("no categories to aggregate")]
    EmptyAggregateInput,

    // Generic failures (exit code 1)
    /// A response for a superseded request. Consumed inside the fetch
    /// session and never shown to the user.
    #[error("stale response for generation {generation} (latest is {latest})")]
    StaleResponse { generation: u64, latest: u64 },

    #[error("upstream {operation} failed: {reason}")]
    UpstreamFailure { operation: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl TrendError {
    /// Create a malformed-data error naming the offending location
    pub fn malformed(reason: impl std::fmt::Display) -> Self {
        TrendError::MalformedTrendsData {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed call to the research service
    pub fn upstream(operation: &str, reason: impl std::fmt::Display) -> Self {
        TrendError::UpstreamFailure {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TrendError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether this error only signals a superseded response
    pub fn is_stale(&self) -> bool {
        matches!(self, TrendError::StaleResponse { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TrendError::UnknownFormat(_)
            | TrendError::UsageError(_)
            | TrendError::InvalidValue { .. } => ExitCode::Usage,

            TrendError::MalformedTrendsData { .. } | TrendError::EmptyAggregateInput => {
                ExitCode::Data
            }

            TrendError::StaleResponse { .. }
            | TrendError::UpstreamFailure { .. }
            | TrendError::Io(_)
            | TrendError::Json(_)
            | TrendError::Toml(_)
            | TrendError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TrendError::UnknownFormat(_) => "unknown_format",
            TrendError::UsageError(_) => "usage_error",
            TrendError::InvalidValue { .. } => "invalid_value",
            TrendError::MalformedTrendsData { .. } => "malformed_trends_data",
            TrendError::EmptyAggregateInput => "empty_aggregate_input",
            TrendError::StaleResponse { .. } => "stale_response",
            TrendError::UpstreamFailure { .. } => "upstream_failure",
            TrendError::Io(_) => "io_error",
            TrendError::Json(_) => "json_error",
            TrendError::Toml(_) => "toml_error",
            TrendError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for papertrend operations
pub type Result<T> = std::result::Result<T, TrendError>;
