//! Endpoint contract and query-string helpers.
//!
//! Every request type implements [`ApiRequest`]: it knows its path, its
//! query parameters, how to validate itself and which response type the
//! endpoint returns. The transport only needs this trait to perform a call.

use std::fmt::{Display, Formatter};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// A single REST endpoint call.
pub trait ApiRequest {
    type Response: DeserializeOwned;

    /// Path relative to the base URL, starting with `/`. Dynamic segments
    /// must already be encoded with [`path_segment`].
    fn path(&self) -> String;

    fn query(&self) -> QueryParams {
        QueryParams::new()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Responses that can point at a following page.
pub trait Paginated {
    fn next_url(&self) -> Option<&str>;

    /// The opaque `cursor` value embedded in `next_url`.
    fn next_cursor(&self) -> Option<String> {
        self.next_url().and_then(cursor_from_next_url)
    }
}

/// Ordered query parameters; order is preserved in the encoded string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn push_filters<V: Display>(&mut self, field: &str, filters: &[(Comparison, V)]) -> &mut Self {
        for (comparison, value) in filters {
            self.push(comparison.key(field), value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `key=value&...` with values percent-encoded.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Range operator for filterable fields (`strike_price.gte=...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Comparison {
    pub fn key(self, field: &str) -> String {
        match self {
            Self::Eq => field.to_owned(),
            Self::Gt => format!("{field}.gt"),
            Self::Gte => format!("{field}.gte"),
            Self::Lt => format!("{field}.lt"),
            Self::Lte => format!("{field}.lte"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percent-encodes a dynamic path segment such as a ticker.
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Extracts the `cursor` query parameter from a `next_url`.
pub fn cursor_from_next_url(next_url: &str) -> Option<String> {
    let (_, query) = next_url.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key != "cursor" {
            return None;
        }
        urlencoding::decode(value).ok().map(|cursor| cursor.into_owned())
    })
}

pub(crate) fn validate_limit(limit: Option<u32>, max: u32) -> Result<(), ValidationError> {
    match limit {
        Some(value) if value == 0 || value > max => {
            Err(ValidationError::LimitOutOfRange { value, max })
        }
        _ => Ok(()),
    }
}
