use serde::Serialize;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::CliError;

/// Machine-readable output wrapper shared by every command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub meta: EnvelopeMeta,
    pub data: Value,
}

/// Field order is fixed so JSON output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeMeta {
    pub request_id: Uuid,
    pub generated_at: String,
    pub latency_ms: u64,
    pub warnings: Vec<String>,
}

impl EnvelopeMeta {
    pub fn new(latency_ms: u64, warnings: Vec<String>) -> Result<Self, CliError> {
        Ok(Self {
            request_id: Uuid::new_v4(),
            generated_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
            latency_ms,
            warnings,
        })
    }
}

impl Envelope {
    pub fn new(data: Value, warnings: Vec<String>, latency_ms: u64) -> Result<Self, CliError> {
        Ok(Self {
            meta: EnvelopeMeta::new(latency_ms, warnings)?,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn meta_carries_v4_request_id_and_rfc3339_timestamp() {
        let envelope =
            Envelope::new(json!({"ticker": "O:SPY251219C00650000"}), Vec::new(), 12)
                .expect("envelope should build");

        assert_eq!(envelope.meta.request_id.get_version_num(), 4);
        OffsetDateTime::parse(&envelope.meta.generated_at, &Rfc3339)
            .expect("generated_at should be RFC 3339");
    }

    #[test]
    fn serializes_meta_before_data() {
        let envelope = Envelope::new(json!([]), vec![String::from("partial")], 0)
            .expect("envelope should build");
        let rendered = serde_json::to_string(&envelope).expect("serializable");

        assert!(rendered.starts_with(r#"{"meta":{"request_id":""#));
        assert!(rendered.contains(r#""warnings":["partial"]"#));
        assert!(rendered.ends_with(r#""data":[]}"#));
    }
}
