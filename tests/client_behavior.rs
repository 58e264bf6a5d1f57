//! Behavior tests for the REST client and its services.
//!
//! A scripted transport stands in for the network so every test can see
//! exactly which requests went out and control what came back.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use marketwire_core::{
    calendar_date, AggregatesRequest, ApiErrorKind, ClientConfig, HttpClient, HttpError,
    HttpRequest, HttpResponse, MarketDataClient, OptionsContractsRequest, OptionsTicker,
    RateLimitPolicy, RetryConfig, Symbol, Timespan, ValidationError,
};

const BASE_URL: &str = "https://api.test.local";
const OPTION: &str = "O:SPY251219C00650000";

#[derive(Debug, Default)]
struct ScriptedHttpClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    fn new(responses: impl IntoIterator<Item = Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    fn recorded_urls(&self) -> Vec<String> {
        self.recorded_requests()
            .into_iter()
            .map(|request| request.url)
            .collect()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self
            .responses
            .lock()
            .expect("response script should not be poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::non_retryable("no scripted response left")));
        Box::pin(async move { response })
    }
}

fn config() -> ClientConfig {
    ClientConfig::new("test-key")
        .with_base_url(BASE_URL)
        .with_retry(RetryConfig::fixed(Duration::from_millis(1), 2))
}

fn client_with(http: &Arc<ScriptedHttpClient>) -> MarketDataClient {
    MarketDataClient::with_http_client(config(), http.clone()).expect("valid config")
}

fn ok(body: &str) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::ok_json(body))
}

fn status(code: u16, body: &str) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::new(code, body))
}

fn aapl_january() -> AggregatesRequest {
    AggregatesRequest::new(
        Symbol::parse("AAPL").expect("valid symbol"),
        1,
        Timespan::Day,
        calendar_date(2024, 1, 2).expect("valid date"),
        calendar_date(2024, 1, 31).expect("valid date"),
    )
}

const AGGS_BODY: &str = r#"{
    "ticker": "AAPL",
    "queryCount": 1,
    "resultsCount": 1,
    "adjusted": true,
    "status": "OK",
    "request_id": "agg-1",
    "results": [
        {"v": 1000, "vw": 185.1, "o": 185.0, "c": 186.0, "h": 187.0, "l": 184.0, "t": 1704171600000, "n": 10}
    ]
}"#;

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn when_sending_a_request_client_attaches_bearer_token_and_query() {
    // Given: a client with a scripted successful response
    let http = ScriptedHttpClient::new([ok(AGGS_BODY)]);
    let client = client_with(&http);

    // When: aggregates are requested with explicit options
    let request = aapl_january().with_adjusted(true).with_limit(5000);
    let response = client
        .stocks()
        .aggregates(&request)
        .await
        .expect("aggregates should succeed");

    // Then: the response is decoded
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].close, 186.0);
    assert_eq!(response.results[0].transactions, Some(10));

    // And: exactly one well-formed GET went out
    let requests = http.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url,
        "https://api.test.local/v2/aggs/ticker/AAPL/range/1/day/2024-01-02/2024-01-31?adjusted=true&limit=5000"
    );
    assert_eq!(
        requests[0].headers.get("authorization").map(String::as_str),
        Some("Bearer test-key")
    );
    assert_eq!(
        requests[0].headers.get("accept").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(requests[0].timeout, config().timeout);
}

#[tokio::test]
async fn when_api_key_has_surrounding_whitespace_it_is_trimmed() {
    let http = ScriptedHttpClient::new([ok(AGGS_BODY)]);
    let client = MarketDataClient::with_http_client(
        ClientConfig::new("  padded-key \n").with_base_url(format!("{BASE_URL}/")),
        http.clone(),
    )
    .expect("valid config");

    client
        .stocks()
        .aggregates(&aapl_january())
        .await
        .expect("aggregates should succeed");

    let requests = http.recorded_requests();
    assert_eq!(
        requests[0].headers.get("authorization").map(String::as_str),
        Some("Bearer padded-key")
    );
    assert!(requests[0].url.starts_with("https://api.test.local/v2/"));
}

#[tokio::test]
async fn when_ticker_is_an_option_it_is_percent_encoded_in_the_path() {
    let http = ScriptedHttpClient::new([ok(AGGS_BODY)]);
    let client = client_with(&http);
    let contract = OptionsTicker::parse(OPTION).expect("valid option");

    let request = AggregatesRequest::new(
        contract,
        1,
        Timespan::Hour,
        calendar_date(2025, 12, 1).expect("valid date"),
        calendar_date(2025, 12, 5).expect("valid date"),
    );
    client
        .options()
        .aggregates(&request)
        .await
        .expect("option aggregates should succeed");

    assert_eq!(
        http.recorded_urls(),
        vec![String::from(
            "https://api.test.local/v2/aggs/ticker/O%3ASPY251219C00650000/range/1/hour/2025-12-01/2025-12-05"
        )]
    );
}

#[tokio::test]
async fn when_fetching_an_option_snapshot_path_uses_underlying_and_contract() {
    let body = r#"{
        "status": "OK",
        "request_id": "snap-1",
        "results": {
            "break_even_price": 662.5,
            "details": {
                "ticker": "O:SPY251219C00650000",
                "contract_type": "call",
                "exercise_style": "american",
                "expiration_date": "2025-12-19",
                "shares_per_contract": 100,
                "strike_price": 650
            },
            "open_interest": 1234
        }
    }"#;
    let http = ScriptedHttpClient::new([ok(body)]);
    let client = client_with(&http);
    let contract = OptionsTicker::parse(OPTION).expect("valid option");

    let snapshot = client
        .options()
        .snapshot(&contract)
        .await
        .expect("snapshot should succeed");

    assert_eq!(
        http.recorded_urls(),
        vec![String::from(
            "https://api.test.local/v3/snapshot/options/SPY/O%3ASPY251219C00650000"
        )]
    );
    let decoded = snapshot
        .results
        .options_ticker()
        .expect("details carry a ticker")
        .expect("ticker decodes");
    assert_eq!(decoded, contract);
}

// =============================================================================
// Validation happens before any I/O
// =============================================================================

#[tokio::test]
async fn when_request_is_invalid_no_call_is_made() {
    let http = ScriptedHttpClient::new([ok(AGGS_BODY)]);
    let client = client_with(&http);

    // Given: a date range that runs backwards
    let backwards = AggregatesRequest::new(
        Symbol::parse("AAPL").expect("valid symbol"),
        1,
        Timespan::Day,
        calendar_date(2024, 2, 1).expect("valid date"),
        calendar_date(2024, 1, 1).expect("valid date"),
    );

    // When
    let err = client
        .stocks()
        .aggregates(&backwards)
        .await
        .expect_err("backwards range must fail");

    // Then
    assert_eq!(err.kind(), ApiErrorKind::InvalidRequest);
    assert_eq!(err.code(), "api.invalid_request");
    assert!(err.message().contains("2024-02-01"), "{err}");
    assert!(http.recorded_requests().is_empty());
}

#[tokio::test]
async fn when_options_service_gets_a_stock_symbol_it_refuses() {
    let http = ScriptedHttpClient::new([ok(AGGS_BODY)]);
    let client = client_with(&http);

    let err = client
        .options()
        .aggregates(&aapl_january())
        .await
        .expect_err("stock symbol is not a contract");

    assert_eq!(err.kind(), ApiErrorKind::InvalidRequest);
    assert!(err.message().contains("AAPL"), "{err}");
    assert!(http.recorded_requests().is_empty());
}

#[test]
fn when_api_key_is_blank_client_construction_fails() {
    let http = ScriptedHttpClient::new([]);
    let err = MarketDataClient::with_http_client(ClientConfig::new("   "), http)
        .expect_err("blank key must be rejected");

    assert_eq!(err, ValidationError::MissingApiKey);
}

// =============================================================================
// Error mapping and retries
// =============================================================================

#[tokio::test]
async fn when_upstream_is_briefly_unavailable_client_retries_and_succeeds() {
    // Given: a 503 followed by a success
    let http = ScriptedHttpClient::new([status(503, "service unavailable"), ok(AGGS_BODY)]);
    let client = client_with(&http);

    // When
    let response = client
        .stocks()
        .aggregates(&aapl_january())
        .await
        .expect("second attempt should succeed");

    // Then: both attempts targeted the same URL
    assert_eq!(response.results.len(), 1);
    let urls = http.recorded_urls();
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0], urls[1]);
}

#[tokio::test]
async fn when_rate_limited_client_retries() {
    let http = ScriptedHttpClient::new([
        status(429, r#"{"status":"ERROR","error":"too many requests"}"#),
        ok(AGGS_BODY),
    ]);
    let client = client_with(&http);

    client
        .stocks()
        .aggregates(&aapl_january())
        .await
        .expect("retry after 429 should succeed");

    assert_eq!(http.recorded_requests().len(), 2);
}

#[tokio::test]
async fn when_retries_are_exhausted_last_status_is_reported() {
    // Given: max_retries = 2, so three attempts in total
    let http = ScriptedHttpClient::new([
        status(503, ""),
        status(502, ""),
        status(503, r#"{"status":"ERROR","error":"maintenance"}"#),
        ok(AGGS_BODY),
    ]);
    let client = client_with(&http);

    let err = client
        .stocks()
        .aggregates(&aapl_january())
        .await
        .expect_err("all attempts fail");

    assert_eq!(err.kind(), ApiErrorKind::Upstream);
    assert_eq!(err.status(), Some(503));
    assert!(err.retryable());
    assert!(err.message().contains("maintenance"), "{err}");
    assert_eq!(http.recorded_requests().len(), 3);
}

#[tokio::test]
async fn when_resource_is_missing_client_does_not_retry() {
    let http = ScriptedHttpClient::new([
        status(
            404,
            r#"{"status":"NOT_FOUND","request_id":"req-404","message":"Ticker not found."}"#,
        ),
        ok(AGGS_BODY),
    ]);
    let client = client_with(&http);

    let err = client
        .stocks()
        .aggregates(&aapl_january())
        .await
        .expect_err("404 is final");

    assert_eq!(err.kind(), ApiErrorKind::NotFound);
    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.message(),
        "upstream returned status 404: Ticker not found. (request_id req-404)"
    );
    assert_eq!(http.recorded_requests().len(), 1);
}

#[tokio::test]
async fn when_credentials_are_rejected_error_is_unauthorized() {
    let http = ScriptedHttpClient::new([status(
        401,
        r#"{"status":"ERROR","error":"Unknown API Key"}"#,
    )]);
    let client = client_with(&http);

    let err = client
        .reference()
        .market_status()
        .await
        .expect_err("401 is final");

    assert_eq!(err.kind(), ApiErrorKind::Unauthorized);
    assert_eq!(err.code(), "api.unauthorized");
    assert!(!err.retryable());
    assert_eq!(http.recorded_requests().len(), 1);
}

#[tokio::test]
async fn when_transport_times_out_client_retries() {
    let http = ScriptedHttpClient::new([
        Err(HttpError::timeout("request timeout: deadline elapsed")),
        ok(AGGS_BODY),
    ]);
    let client = client_with(&http);

    client
        .stocks()
        .aggregates(&aapl_january())
        .await
        .expect("retry after timeout should succeed");

    assert_eq!(http.recorded_requests().len(), 2);
}

#[tokio::test]
async fn when_transport_error_is_not_retryable_it_surfaces_immediately() {
    let http = ScriptedHttpClient::new([
        Err(HttpError::non_retryable("invalid request: bad header")),
        ok(AGGS_BODY),
    ]);
    let client = client_with(&http);

    let err = client
        .stocks()
        .aggregates(&aapl_january())
        .await
        .expect_err("non-retryable transport error");

    assert_eq!(err.kind(), ApiErrorKind::Transport);
    assert!(err.message().contains("bad header"), "{err}");
    assert_eq!(http.recorded_requests().len(), 1);
}

#[tokio::test]
async fn when_retries_are_disabled_first_failure_is_final() {
    let http = ScriptedHttpClient::new([status(503, ""), ok(AGGS_BODY)]);
    let client = MarketDataClient::with_http_client(
        config().with_retry(RetryConfig::no_retry()),
        http.clone(),
    )
    .expect("valid config");

    let err = client
        .stocks()
        .aggregates(&aapl_january())
        .await
        .expect_err("no retry configured");

    assert_eq!(err.status(), Some(503));
    assert_eq!(http.recorded_requests().len(), 1);
}

#[tokio::test]
async fn when_body_is_not_the_expected_shape_error_is_decode() {
    let http = ScriptedHttpClient::new([ok("<html>maintenance</html>")]);
    let client = client_with(&http);

    let err = client
        .stocks()
        .aggregates(&aapl_january())
        .await
        .expect_err("html is not json");

    assert_eq!(err.kind(), ApiErrorKind::Decode);
    assert!(
        err.message()
            .starts_with("failed to decode response from https://api.test.local/v2/aggs/ticker/AAPL/"),
        "{err}"
    );
    assert_eq!(http.recorded_requests().len(), 1);
}

#[tokio::test]
async fn when_throttle_is_configured_requests_still_flow_within_budget() {
    let http = ScriptedHttpClient::new([ok(AGGS_BODY), ok(AGGS_BODY)]);
    let client = MarketDataClient::with_http_client(
        config().with_rate_limit(RateLimitPolicy::per_second(10)),
        http.clone(),
    )
    .expect("valid config");

    for _ in 0..2 {
        client
            .stocks()
            .aggregates(&aapl_january())
            .await
            .expect("within budget");
    }

    assert_eq!(http.recorded_requests().len(), 2);
}

// =============================================================================
// Pagination
// =============================================================================

const CONTRACTS_PAGE_1: &str = r#"{
    "status": "OK",
    "request_id": "page-1",
    "results": [
        {"ticker": "O:SPY251219C00650000", "underlying_ticker": "SPY", "contract_type": "call",
         "expiration_date": "2025-12-19", "strike_price": 650, "shares_per_contract": 100}
    ],
    "next_url": "https://api.test.local/v3/reference/options/contracts?cursor=YWZ0ZXI9MQ%3D%3D"
}"#;

const CONTRACTS_PAGE_2: &str = r#"{
    "status": "OK",
    "request_id": "page-2",
    "results": [
        {"ticker": "O:SPY251219P00650000", "underlying_ticker": "SPY", "contract_type": "put",
         "expiration_date": "2025-12-19", "strike_price": 650, "shares_per_contract": 100}
    ]
}"#;

#[tokio::test]
async fn when_page_has_next_url_client_follows_it_until_the_end() {
    // Given: two pages of contracts
    let http = ScriptedHttpClient::new([ok(CONTRACTS_PAGE_1), ok(CONTRACTS_PAGE_2)]);
    let client = client_with(&http);
    let request = OptionsContractsRequest::for_underlying(Symbol::parse("SPY").expect("valid"))
        .with_limit(1);

    // When: the first page is fetched and then followed
    let first = client
        .options()
        .contracts(&request)
        .await
        .expect("first page");
    let second = client
        .next_page(&first)
        .await
        .expect("second page")
        .expect("there is a second page");
    let third = client.next_page(&second).await.expect("no error at the end");

    // Then: pages arrive in order and the end is reported as None
    assert_eq!(first.results[0].ticker, "O:SPY251219C00650000");
    assert_eq!(
        second.results[0].options_ticker().expect("decodes").to_string(),
        "O:SPY251219P00650000"
    );
    assert!(third.is_none());

    let requests = http.recorded_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].url,
        "https://api.test.local/v3/reference/options/contracts?underlying_ticker=SPY&limit=1"
    );
    assert_eq!(
        requests[1].url,
        "https://api.test.local/v3/reference/options/contracts?cursor=YWZ0ZXI9MQ%3D%3D"
    );
    assert_eq!(
        requests[1].headers.get("authorization").map(String::as_str),
        Some("Bearer test-key")
    );
}

#[tokio::test]
async fn when_next_url_points_elsewhere_client_refuses_to_follow() {
    let foreign_page = r#"{
        "status": "OK",
        "results": [],
        "next_url": "https://evil.example/v3/reference/options/contracts?cursor=abc"
    }"#;
    let http = ScriptedHttpClient::new([ok(foreign_page), ok(CONTRACTS_PAGE_2)]);
    let client = client_with(&http);

    let first = client
        .options()
        .contracts(&OptionsContractsRequest::new())
        .await
        .expect("first page");
    let err = client
        .next_page(&first)
        .await
        .expect_err("foreign host must be refused");

    assert_eq!(err.kind(), ApiErrorKind::InvalidRequest);
    assert!(err.message().contains("evil.example"), "{err}");
    assert_eq!(http.recorded_requests().len(), 1);
}

#[tokio::test]
async fn when_next_url_only_resembles_the_base_host_client_refuses_to_follow() {
    for next_url in [
        "https://api.test.local.evil.example/v3/reference/options/contracts?cursor=abc",
        "https://api.test.local@evil.example/v3/reference/options/contracts?cursor=abc",
    ] {
        // Given: a page whose next_url starts with the configured base URL text
        let page = format!(r#"{{"status": "OK", "results": [], "next_url": "{next_url}"}}"#);
        let http = ScriptedHttpClient::new([ok(&page), ok(CONTRACTS_PAGE_2)]);
        let client = client_with(&http);

        let first = client
            .options()
            .contracts(&OptionsContractsRequest::new())
            .await
            .expect("first page");

        // When: the client is asked to follow it
        let err = client
            .next_page(&first)
            .await
            .expect_err("lookalike host must be refused");

        // Then: nothing is sent, so the bearer token stays home
        assert_eq!(err.kind(), ApiErrorKind::InvalidRequest, "{next_url}");
        assert_eq!(http.recorded_requests().len(), 1, "{next_url}");
    }
}

// =============================================================================
// Options-specific endpoints
// =============================================================================

#[tokio::test]
async fn when_fetching_the_last_option_trade_contract_is_in_the_path() {
    let body = r#"{
        "status": "OK",
        "request_id": "lt-1",
        "results": {"T": "O:SPY251219C00650000", "p": 12.5, "s": 3, "t": 1703001600000000000, "x": 65}
    }"#;
    let http = ScriptedHttpClient::new([ok(body)]);
    let client = client_with(&http);
    let contract = OptionsTicker::parse(OPTION).expect("valid option");

    let last = client
        .options()
        .last_trade(&contract)
        .await
        .expect("last trade");

    assert_eq!(last.results.price, 12.5);
    assert_eq!(last.results.ticker.as_deref(), Some(OPTION));
    assert_eq!(
        http.recorded_urls(),
        vec![String::from(
            "https://api.test.local/v2/last/trade/O%3ASPY251219C00650000"
        )]
    );
}

#[tokio::test]
async fn when_fetching_contract_reference_data_ticker_round_trips() {
    let body = r#"{
        "status": "OK",
        "request_id": "c-1",
        "results": {"ticker": "O:SPY251219C00650000", "underlying_ticker": "SPY",
                    "contract_type": "call", "exercise_style": "american",
                    "expiration_date": "2025-12-19", "strike_price": 650}
    }"#;
    let http = ScriptedHttpClient::new([ok(body)]);
    let client = client_with(&http);
    let contract = OptionsTicker::parse(OPTION).expect("valid option");

    let reference = client
        .options()
        .contract(&contract)
        .await
        .expect("contract details");

    assert_eq!(
        reference.results.options_ticker().expect("decodes"),
        contract
    );
    assert_eq!(
        http.recorded_urls(),
        vec![String::from(
            "https://api.test.local/v3/reference/options/contracts/O%3ASPY251219C00650000"
        )]
    );
}
