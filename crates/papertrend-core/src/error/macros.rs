//! Error macros for papertrend

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::TrendError::invalid_value($context, $value))
    };
}

/// Macro for creating malformed trends data errors
#[macro_export]
macro_rules! bail_malformed {
    ($($arg:tt)*) => {
        return Err($crate::error::TrendError::malformed(format!($($arg)*)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::TrendError::UsageError($msg.to_string()))
    };
}

/// Macro for mapping upstream service errors
#[macro_export]
macro_rules! map_upstream_err {
    ($op:expr, $error:expr) => {
        $crate::error::TrendError::upstream($op, $error)
    };
}
