use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::api_error::ApiError;
use crate::config::ClientConfig;
use crate::endpoint::{ApiRequest, Paginated};
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::retry::AttemptFailure;
use crate::throttling::RequestThrottle;
use crate::ValidationError;

/// Low-level REST transport: URL building, auth, throttling, retries and
/// JSON decoding. Services are thin wrappers around [`RestClient::send`].
#[derive(Clone)]
pub struct RestClient {
    http: Arc<dyn HttpClient>,
    config: ClientConfig,
    auth: HttpAuth,
    throttle: Option<RequestThrottle>,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Result<Self, ValidationError> {
        let http = Arc::new(ReqwestHttpClient::new(&config.user_agent));
        Self::with_http_client(config, http)
    }

    pub fn with_http_client(
        config: ClientConfig,
        http: Arc<dyn HttpClient>,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            auth: HttpAuth::BearerToken(config.api_key.trim().to_owned()),
            throttle: config.rate_limit.map(RequestThrottle::new),
            http,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for a request, including its encoded query string.
    pub fn url_for<R: ApiRequest>(&self, request: &R) -> String {
        let query = request.query();
        let base = format!("{}{}", self.config.normalized_base_url(), request.path());
        if query.is_empty() {
            base
        } else {
            format!("{base}?{}", query.encode())
        }
    }

    /// Validates the request, performs the call and decodes the response.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        request.validate()?;
        let url = self.url_for(request);
        self.get_json(&url).await
    }

    /// Follows `next_url` of a page; `Ok(None)` once the last page was reached.
    pub async fn next_page<T>(&self, page: &T) -> Result<Option<T>, ApiError>
    where
        T: Paginated + DeserializeOwned,
    {
        let Some(next_url) = page.next_url() else {
            return Ok(None);
        };

        // The bearer token must never be sent to a host other than the configured one.
        if !same_origin(self.config.normalized_base_url(), next_url) {
            return Err(ApiError::invalid_request(format!(
                "next_url '{next_url}' does not belong to {}",
                self.config.normalized_base_url()
            )));
        }

        self.get_json(next_url).await.map(Some)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.execute_with_retry(url).await?;
        serde_json::from_str(&response.body)
            .map_err(|error| ApiError::decode(format!("failed to decode response from {url}: {error}")))
    }

    async fn execute_with_retry(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let mut attempt = 0_u32;

        loop {
            if let Some(throttle) = &self.throttle {
                throttle.acquire().await;
            }

            let request = HttpRequest::get(url)
                .with_auth(&self.auth)
                .with_header("accept", "application/json")
                .with_timeout(self.config.timeout);

            tracing::debug!(url, attempt, "sending request");

            let delay = match self.http.execute(request).await {
                Ok(response) if response.is_success() => {
                    tracing::debug!(url, status = response.status, "request succeeded");
                    return Ok(response);
                }
                Ok(response) => {
                    let failure = AttemptFailure::Status(response.status);
                    let Some(delay) = self.config.retry.next_delay(attempt, failure) else {
                        return Err(ApiError::from_status(response.status, &response.body));
                    };
                    tracing::warn!(
                        url,
                        status = response.status,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "upstream returned retryable status"
                    );
                    delay
                }
                Err(error) => {
                    let Some(delay) = self
                        .config
                        .retry
                        .next_delay(attempt, AttemptFailure::Transport(&error))
                    else {
                        return Err(ApiError::transport(&error));
                    };
                    tracing::warn!(
                        url,
                        error = %error,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "transport error; retrying"
                    );
                    delay
                }
            };

            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

/// True when `candidate` has the scheme, host and port of `base`, carries no
/// userinfo and stays under the base path.
fn same_origin(base: &str, candidate: &str) -> bool {
    let (Ok(base), Ok(candidate)) = (Url::parse(base), Url::parse(candidate)) else {
        return false;
    };

    if !candidate.username().is_empty() || candidate.password().is_some() {
        return false;
    }

    let base_path = base.path().trim_end_matches('/');
    let path = candidate.path();
    let under_base = path
        .strip_prefix(base_path)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));

    candidate.scheme() == base.scheme()
        && candidate.host_str() == base.host_str()
        && candidate.port_or_known_default() == base.port_or_known_default()
        && under_base
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("config", &self.config)
            .field("throttle", &self.throttle)
            .finish_non_exhaustive()
    }
}
