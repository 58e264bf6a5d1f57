//! Client configuration.
//!
//! Values come from code (`ClientConfig::new(...).with_*`) or from the
//! environment via [`ClientConfig::from_env`]:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MARKETWIRE_API_KEY` / `POLYGON_API_KEY` | required | API key sent as a bearer token |
//! | `MARKETWIRE_BASE_URL` | `https://api.polygon.io` | REST root |
//! | `MARKETWIRE_TIMEOUT_MS` | `10000` | Per-attempt timeout |
//! | `MARKETWIRE_MAX_RETRIES` | `3` | Retries after the first attempt |

use std::time::Duration;

use crate::retry::RetryConfig;
use crate::throttling::RateLimitPolicy;
use crate::ValidationError;

pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_VARS: [&str; 2] = ["MARKETWIRE_API_KEY", "POLYGON_API_KEY"];

#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub retry: RetryConfig,
    pub rate_limit: Option<RateLimitPolicy>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryConfig::default(),
            rate_limit: None,
            user_agent: String::from(concat!("marketwire/", env!("CARGO_PKG_VERSION"))),
        }
    }

    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source; `from_env` passes
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_owned())
            .find(|value| !value.is_empty())
            .ok_or(ValidationError::MissingApiKey)?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup("MARKETWIRE_BASE_URL") {
            config.base_url = base_url.trim().to_owned();
        }
        if let Some(timeout_ms) = lookup("MARKETWIRE_TIMEOUT_MS") {
            config.timeout = Duration::from_millis(parse_number("timeout_ms", &timeout_ms)?);
        }
        if let Some(max_retries) = lookup("MARKETWIRE_MAX_RETRIES") {
            let max_retries = parse_number("max_retries", &max_retries)?;
            config.retry.max_retries = u32::try_from(max_retries).map_err(|_| {
                ValidationError::InvalidConfig {
                    field: "max_retries",
                    reason: format!("{max_retries} is too large"),
                }
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: RateLimitPolicy) -> Self {
        self.rate_limit = Some(rate_limit);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(ValidationError::MissingApiKey);
        }

        let base_url = self.base_url.trim();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ValidationError::InvalidConfig {
                field: "base_url",
                reason: format!("'{base_url}' must start with http:// or https://"),
            });
        }

        if self.timeout.is_zero() {
            return Err(ValidationError::InvalidConfig {
                field: "timeout",
                reason: String::from("must be greater than zero"),
            });
        }

        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("rate_limit", &self.rate_limit)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<u64, ValidationError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|error| ValidationError::InvalidConfig {
            field,
            reason: format!("'{value}' is not a non-negative integer ({error})"),
        })
}
