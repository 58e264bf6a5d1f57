use crate::api_error::ApiError;
use crate::client::RestClient;
use crate::domain::Ticker;
use crate::models::{
    AggregatesRequest, AggregatesResponse, LastTrade, LastTradeRequest, ListResponse,
    OptionContractSnapshot, OptionContractSnapshotRequest, OptionsChainRequest, OptionsContract,
    OptionsContractRequest, OptionsContractsRequest, PreviousCloseRequest, Quote, QuotesRequest,
    SingleResponse, Trade, TradesRequest,
};
use crate::{OptionsTicker, ValidationError};

/// Options reference data, snapshots and per-contract market data.
///
/// Every contract sent upstream is an [`OptionsTicker`]; requests built from
/// a plain symbol are rejected before any I/O.
#[derive(Debug, Clone, Copy)]
pub struct OptionsService<'a> {
    rest: &'a RestClient,
}

impl<'a> OptionsService<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn contracts(
        &self,
        request: &OptionsContractsRequest,
    ) -> Result<ListResponse<OptionsContract>, ApiError> {
        self.rest.send(request).await
    }

    pub async fn contract(
        &self,
        ticker: &OptionsTicker,
    ) -> Result<SingleResponse<OptionsContract>, ApiError> {
        self.rest
            .send(&OptionsContractRequest::new(ticker.clone()))
            .await
    }

    pub async fn chain(
        &self,
        request: &OptionsChainRequest,
    ) -> Result<ListResponse<OptionContractSnapshot>, ApiError> {
        self.rest.send(request).await
    }

    pub async fn snapshot(
        &self,
        ticker: &OptionsTicker,
    ) -> Result<SingleResponse<OptionContractSnapshot>, ApiError> {
        let request = OptionContractSnapshotRequest::for_contract(ticker.clone())?;
        self.rest.send(&request).await
    }

    pub async fn aggregates(
        &self,
        request: &AggregatesRequest,
    ) -> Result<AggregatesResponse, ApiError> {
        require_contract(&request.ticker)?;
        self.rest.send(request).await
    }

    pub async fn previous_close(
        &self,
        ticker: &OptionsTicker,
    ) -> Result<AggregatesResponse, ApiError> {
        self.rest
            .send(&PreviousCloseRequest::new(ticker.clone()))
            .await
    }

    pub async fn trades(&self, request: &TradesRequest) -> Result<ListResponse<Trade>, ApiError> {
        require_contract(request.ticker())?;
        self.rest.send(request).await
    }

    pub async fn quotes(&self, request: &QuotesRequest) -> Result<ListResponse<Quote>, ApiError> {
        require_contract(request.ticker())?;
        self.rest.send(request).await
    }

    pub async fn last_trade(
        &self,
        ticker: &OptionsTicker,
    ) -> Result<SingleResponse<LastTrade>, ApiError> {
        self.rest.send(&LastTradeRequest::new(ticker.clone())).await
    }
}

fn require_contract(ticker: &Ticker) -> Result<(), ValidationError> {
    match ticker {
        Ticker::Option(_) => Ok(()),
        Ticker::Symbol(symbol) => Err(ValidationError::NotAnOptionsTicker {
            value: symbol.to_string(),
        }),
    }
}
