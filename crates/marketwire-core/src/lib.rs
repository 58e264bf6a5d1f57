//! # Marketwire Core
//!
//! Typed client for a stocks, options and reference market-data REST API.
//!
//! ## Overview
//!
//! - **Options ticker codec** for `O:<UNDERLYING><YYMMDD><C|P><STRIKE8>`
//!   identifiers, with a fluent builder
//! - **Validated domain types** for symbols, timespans and dates
//! - **Request builders** implementing [`ApiRequest`] for every endpoint
//! - **Response DTOs** mirroring the upstream JSON
//! - **Transport** with bearer auth, retries, client-side throttling and
//!   `tracing` events
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | `OptionsTicker`, `OptionsTickerBuilder`, `Symbol`, `Timespan` |
//! | [`models`] | Request builders and response DTOs |
//! | [`services`] | `MarketDataClient` and per-asset-class services |
//! | [`client`] | Low-level `RestClient` |
//! | [`config`] | `ClientConfig` and environment loading |
//! | [`endpoint`] | `ApiRequest`, `Paginated` and query helpers |
//! | [`http_client`] | HTTP abstraction and reqwest implementation |
//! | [`retry`] | Retry policy and backoff |
//! | [`throttling`] | Rate limiting |
//!
//! ## Quick Start
//!
//! ```rust
//! use marketwire_core::{ContractKind, OptionsTicker};
//! use rust_decimal::Decimal;
//!
//! let ticker = OptionsTicker::builder()
//!     .underlying("SPY")
//!     .expiration_ymd(2025, 12, 19)
//!     .call()
//!     .strike(Decimal::new(650, 0))
//!     .build()
//!     .expect("valid contract");
//!
//! assert_eq!(ticker.encode(), "O:SPY251219C00650000");
//!
//! let decoded = OptionsTicker::parse("O:SPY251219C00650000").expect("valid ticker");
//! assert_eq!(decoded.kind(), ContractKind::Call);
//! assert_eq!(decoded, ticker);
//! ```
//!
//! Fetching data:
//!
//! ```rust,ignore
//! use marketwire_core::{AggregatesRequest, MarketDataClient, Symbol, Timespan, calendar_date};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarketDataClient::from_env()?;
//!     let request = AggregatesRequest::new(
//!         Symbol::parse("AAPL")?,
//!         1,
//!         Timespan::Day,
//!         calendar_date(2024, 1, 2)?,
//!         calendar_date(2024, 1, 31)?,
//!     );
//!     let bars = client.stocks().aggregates(&request).await?;
//!     println!("{} bars", bars.results.len());
//!     Ok(())
//! }
//! ```

pub mod api_error;
pub mod client;
pub mod config;
pub mod domain;
pub mod endpoint;
pub mod error;
pub mod http_client;
pub mod models;
pub mod retry;
pub mod services;
pub mod throttling;

pub use api_error::{ApiError, ApiErrorKind};
pub use client::RestClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use domain::{
    calendar_date, format_iso_date, parse_iso_date, ContractKind, IntoExpirationDate,
    OptionsTicker, OptionsTickerBuilder, Symbol, Ticker, Timespan,
};
pub use endpoint::{cursor_from_next_url, ApiRequest, Comparison, Paginated, QueryParams, SortOrder};
pub use error::{OptionsTickerError, ValidationError};
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use models::*;
pub use retry::{Backoff, RetryConfig};
pub use services::{MarketDataClient, OptionsService, ReferenceService, StocksService};
pub use throttling::{RateLimitPolicy, RequestThrottle};
