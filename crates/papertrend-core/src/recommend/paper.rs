//! Paper records returned by the search and recommendation endpoints

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::bail_malformed;
use crate::error::{Result, TrendError};

/// Average reading speed used for reading time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// A paper as returned by the research service
///
/// Both identifier fields may be present: `paper_id` is the archive
/// identifier, `id` the service's own key. Numeric identifiers are read as
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    #[serde(default, deserialize_with = "id_like", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "id_like", skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub authors: String,
    #[serde(rename = "abstract", default, deserialize_with = "string_or_null")]
    pub abstract_text: String,
    /// Space separated category tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_ref: Option<String>,
}

impl Paper {
    /// Preferred identifier: archive id, then service id
    pub fn key(&self) -> Option<&str> {
        self.paper_id.as_deref().or(self.id.as_deref())
    }

    /// Individual category tags
    pub fn tags(&self) -> Vec<&str> {
        self.categories
            .as_deref()
            .map(split_tags)
            .unwrap_or_default()
    }

    /// Estimated minutes to read the abstract
    pub fn reading_minutes(&self) -> usize {
        reading_minutes(&self.abstract_text)
    }
}

/// Split a space separated category string into tags
pub fn split_tags(categories: &str) -> Vec<&str> {
    categories.split_whitespace().collect()
}

/// `ceil(words / 200)`, zero for blank text
pub fn reading_minutes(text: &str) -> usize {
    text.split_whitespace().count().div_ceil(WORDS_PER_MINUTE)
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `...`
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
    }
}

/// Response of the search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    /// Total matches reported by the service; may exceed `results.len()`
    pub count: usize,
    pub results: Vec<Paper>,
}

impl SearchResponse {
    /// Parse either `{ count, results }` or a bare array of papers.
    pub fn parse(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        match value {
            Value::Array(list) => {
                let results: Vec<Paper> = serde_json::from_value(Value::Array(list))?;
                Ok(Self {
                    count: results.len(),
                    results,
                })
            }
            Value::Object(mut obj) => {
                let results: Vec<Paper> = match obj.remove("results") {
                    Some(list) => serde_json::from_value(list)?,
                    None => bail_malformed!("search response has no 'results'"),
                };
                let count = obj
                    .get("count")
                    .and_then(Value::as_u64)
                    .map(|c| c as usize)
                    .unwrap_or(results.len());
                Ok(Self { count, results })
            }
            other => Err(TrendError::malformed(format!(
                "unexpected search response: {}",
                other
            ))),
        }
    }
}

/// Body of a recommendation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub title: String,
    pub authors: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub categories: String,
}

impl RecommendRequest {
    pub fn from_abstract(abstract_text: impl Into<String>) -> Self {
        Self {
            abstract_text: abstract_text.into(),
            ..Self::default()
        }
    }
}

/// Response of the recommendation endpoint, results in service rank order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub results: Vec<Paper>,
}

impl RecommendResponse {
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

fn id_like<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn string_or_null<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
