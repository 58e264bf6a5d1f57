//! High-level entry point grouping endpoints by asset class.
//!
//! ```rust,ignore
//! use marketwire_core::{MarketDataClient, OptionsTicker};
//!
//! let client = MarketDataClient::from_env()?;
//! let contract = OptionsTicker::parse("O:SPY251219C00650000")?;
//! let last = client.options().last_trade(&contract).await?;
//! println!("{} traded at {}", contract, last.results.price);
//! ```

mod options;
mod reference;
mod stocks;

use std::sync::Arc;

use serde::de::DeserializeOwned;

pub use options::OptionsService;
pub use reference::ReferenceService;
pub use stocks::StocksService;

use crate::api_error::ApiError;
use crate::client::RestClient;
use crate::config::ClientConfig;
use crate::endpoint::Paginated;
use crate::http_client::HttpClient;
use crate::ValidationError;

/// Shareable client; clones reuse the same transport, throttle and config.
#[derive(Debug, Clone)]
pub struct MarketDataClient {
    rest: Arc<RestClient>,
}

impl MarketDataClient {
    pub fn new(config: ClientConfig) -> Result<Self, ValidationError> {
        Ok(Self {
            rest: Arc::new(RestClient::new(config)?),
        })
    }

    pub fn from_env() -> Result<Self, ValidationError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn with_http_client(
        config: ClientConfig,
        http: Arc<dyn HttpClient>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            rest: Arc::new(RestClient::with_http_client(config, http)?),
        })
    }

    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    pub fn stocks(&self) -> StocksService<'_> {
        StocksService::new(&self.rest)
    }

    pub fn options(&self) -> OptionsService<'_> {
        OptionsService::new(&self.rest)
    }

    pub fn reference(&self) -> ReferenceService<'_> {
        ReferenceService::new(&self.rest)
    }

    /// Fetches the page after `page`, or `None` when it was the last one.
    pub async fn next_page<T>(&self, page: &T) -> Result<Option<T>, ApiError>
    where
        T: Paginated + DeserializeOwned,
    {
        self.rest.next_page(page).await
    }
}
