use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::http_client::HttpError;
use crate::ValidationError;

/// Error classification for REST calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    InvalidRequest,
    Unauthorized,
    NotFound,
    RateLimited,
    Upstream,
    Transport,
    Decode,
}

/// Structured error returned by every service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    status: Option<u16>,
    retryable: bool,
}

/// Error body shape used by the upstream API.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    request_id: Option<String>,
}

impl ApiError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::InvalidRequest,
            message: message.into(),
            status: None,
            retryable: false,
        }
    }

    pub fn transport(error: &HttpError) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: format!("transport error: {}", error.message()),
            status: None,
            retryable: error.retryable(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: message.into(),
            status: None,
            retryable: false,
        }
    }

    /// Maps a non-success HTTP status and its body to an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = match status {
            400 | 422 => ApiErrorKind::InvalidRequest,
            401 | 403 => ApiErrorKind::Unauthorized,
            404 => ApiErrorKind::NotFound,
            429 => ApiErrorKind::RateLimited,
            _ => ApiErrorKind::Upstream,
        };

        let detail = serde_json::from_str::<UpstreamErrorBody>(body)
            .ok()
            .and_then(|parsed| {
                let text = parsed.error.or(parsed.message)?;
                Some(match parsed.request_id {
                    Some(request_id) => format!("{text} (request_id {request_id})"),
                    None => text,
                })
            });

        let message = match detail {
            Some(detail) => format!("upstream returned status {status}: {detail}"),
            None => format!("upstream returned status {status}"),
        };

        Self {
            kind,
            message,
            status: Some(status),
            retryable: matches!(kind, ApiErrorKind::RateLimited) || status >= 500,
        }
    }

    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::InvalidRequest => "api.invalid_request",
            ApiErrorKind::Unauthorized => "api.unauthorized",
            ApiErrorKind::NotFound => "api.not_found",
            ApiErrorKind::RateLimited => "api.rate_limited",
            ApiErrorKind::Upstream => "api.upstream",
            ApiErrorKind::Transport => "api.transport",
            ApiErrorKind::Decode => "api.decode",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::invalid_request(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_kinds() {
        assert_eq!(ApiError::from_status(401, "").kind(), ApiErrorKind::Unauthorized);
        assert_eq!(ApiError::from_status(404, "").kind(), ApiErrorKind::NotFound);
        assert_eq!(ApiError::from_status(429, "").kind(), ApiErrorKind::RateLimited);
        assert_eq!(ApiError::from_status(502, "").kind(), ApiErrorKind::Upstream);
        assert!(ApiError::from_status(502, "").retryable());
        assert!(!ApiError::from_status(400, "").retryable());
    }

    #[test]
    fn upstream_error_text_is_kept() {
        let error = ApiError::from_status(
            403,
            r#"{"status":"NOT_AUTHORIZED","request_id":"abc","message":"You are not entitled to this data."}"#,
        );

        assert_eq!(error.status(), Some(403));
        assert_eq!(
            error.message(),
            "upstream returned status 403: You are not entitled to this data. (request_id abc)"
        );
        assert_eq!(error.code(), "api.unauthorized");
    }

    #[test]
    fn validation_errors_become_invalid_requests() {
        let error = ApiError::from(ValidationError::EmptySymbol);
        assert_eq!(error.kind(), ApiErrorKind::InvalidRequest);
        assert_eq!(error.to_string(), "symbol cannot be empty (api.invalid_request)");
    }
}
