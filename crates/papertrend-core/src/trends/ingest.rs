//! Validation of the research service's trends payload
//!
//! The service answers `{ "trends": { <category>: { <year>: <count> } } }`.
//! Year keys arrive as JSON object keys (strings) and must parse as integers;
//! counts must be non-negative integers. Anything else is rejected as
//! [`TrendError::MalformedTrendsData`] instead of being coerced.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::bail_malformed;
use crate::error::{Result, TrendError};

/// Publication year to paper count, iterated in ascending year order
pub type YearCounts = BTreeMap<i32, u64>;

/// Validated category to year-count mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawTrends {
    categories: BTreeMap<String, YearCounts>,
}

impl RawTrends {
    /// Build from an already-typed map, applying the same checks as the
    /// JSON path (non-empty labels, at least one year per category).
    pub fn new(categories: BTreeMap<String, YearCounts>) -> Result<Self> {
        for (category, years) in &categories {
            if category.trim().is_empty() {
                bail_malformed!("empty category label");
            }
            if years.is_empty() {
                bail_malformed!("category '{}' has no years", category);
            }
        }
        Ok(Self { categories })
    }

    /// Parse a response body.
    pub fn parse(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| TrendError::malformed(format!("body is not JSON: {}", e)))?;
        Self::from_value(&value)
    }

    /// Validate a decoded response.
    ///
    /// Accepts the `{ "trends": {...} }` envelope as well as a bare category
    /// map. Other envelope keys (such as `top_n`) are ignored.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(top) = value.as_object() else {
            bail_malformed!("expected an object at the top level, got {}", kind(value));
        };

        let categories = match top.get("trends") {
            Some(Value::Object(inner)) => inner,
            Some(other) => bail_malformed!("'trends' must be an object, got {}", kind(other)),
            None => top,
        };

        let mut parsed = BTreeMap::new();
        for (category, years) in categories {
            let label = category.trim();
            if label.is_empty() {
                bail_malformed!("empty category label");
            }
            let years = parse_years(label, years)?;
            if parsed.insert(label.to_string(), years).is_some() {
                bail_malformed!("duplicate category '{}' after trimming", label);
            }
        }

        debug!(categories = parsed.len(), "ingest_trends");
        Ok(Self { categories: parsed })
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&YearCounts> {
        self.categories.get(category)
    }

    /// Iterate categories in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &YearCounts)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn parse_years(category: &str, value: &Value) -> Result<YearCounts> {
    let Some(obj) = value.as_object() else {
        bail_malformed!(
            "years for '{}' must be an object, got {}",
            category,
            kind(value)
        );
    };
    if obj.is_empty() {
        bail_malformed!("category '{}' has no years", category);
    }
    parse_year_map(category, obj)
}

fn parse_year_map(category: &str, obj: &Map<String, Value>) -> Result<YearCounts> {
    let mut years = YearCounts::new();
    for (key, raw_count) in obj {
        let year: i32 = match key.trim().parse() {
            Ok(year) => year,
            Err(_) => bail_malformed!("year key '{}' in '{}' is not an integer", key, category),
        };
        let Some(count) = parse_count(raw_count) else {
            bail_malformed!(
                "count for {}/{} must be a non-negative integer, got {}",
                category,
                key,
                raw_count
            );
        };
        if years.insert(year, count).is_some() {
            bail_malformed!("duplicate year {} in '{}'", year, category);
        }
    }
    Ok(years)
}

/// Integer counts, or floats with no fractional part (some serializers emit
/// `12.0`).
fn parse_count(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
