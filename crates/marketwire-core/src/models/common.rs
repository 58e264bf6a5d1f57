use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::domain::format_iso_date;
use crate::endpoint::{Comparison, Paginated};

/// Standard list envelope: `{ status, request_id, count, next_url, results: [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Paginated for ListResponse<T> {
    fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }
}

/// Envelope for endpoints returning a single object under `results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleResponse<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    pub results: T,
}

/// Unix milliseconds, as used by aggregate bars.
pub fn datetime_from_millis(millis: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}

/// Unix nanoseconds, as used by trades and quotes.
pub fn datetime_from_nanos(nanos: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(nanos)).ok()
}

pub(crate) fn iso_filters(filters: &[(Comparison, Date)]) -> Vec<(Comparison, String)> {
    filters
        .iter()
        .map(|(comparison, date)| (*comparison, format_iso_date(*date)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_tolerates_missing_results() {
        let page: ListResponse<serde_json::Value> =
            serde_json::from_str(r#"{"status":"OK","request_id":"r1","count":0}"#)
                .expect("valid envelope");

        assert!(page.results.is_empty());
        assert_eq!(page.next_url(), None);
    }

    #[test]
    fn converts_epoch_units() {
        let from_millis = datetime_from_millis(1_703_001_600_000).expect("in range");
        let from_nanos = datetime_from_nanos(1_703_001_600_000_000_000).expect("in range");

        assert_eq!(from_millis, from_nanos);
        assert_eq!(from_millis.unix_timestamp(), 1_703_001_600);
    }
}
