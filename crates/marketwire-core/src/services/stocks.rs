use crate::api_error::ApiError;
use crate::client::RestClient;
use crate::models::{
    AggregatesRequest, AggregatesResponse, AllSnapshotsRequest, DailyOpenClose,
    DailyOpenCloseRequest, GainersLosersRequest, GroupedDailyRequest, IndicatorRequest,
    IndicatorResponse, LastQuote, LastQuoteRequest, LastTrade, LastTradeRequest, ListResponse,
    MarketDirection, PreviousCloseRequest, Quote, QuotesRequest, SingleResponse,
    SnapshotListResponse, SnapshotRequest, SnapshotResponse, Trade, TradesRequest,
};
use crate::Symbol;

/// Stock aggregates, ticks, snapshots and indicators.
#[derive(Debug, Clone, Copy)]
pub struct StocksService<'a> {
    rest: &'a RestClient,
}

impl<'a> StocksService<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn aggregates(
        &self,
        request: &AggregatesRequest,
    ) -> Result<AggregatesResponse, ApiError> {
        self.rest.send(request).await
    }

    pub async fn previous_close(
        &self,
        request: &PreviousCloseRequest,
    ) -> Result<AggregatesResponse, ApiError> {
        self.rest.send(request).await
    }

    pub async fn grouped_daily(
        &self,
        request: &GroupedDailyRequest,
    ) -> Result<AggregatesResponse, ApiError> {
        self.rest.send(request).await
    }

    pub async fn daily_open_close(
        &self,
        request: &DailyOpenCloseRequest,
    ) -> Result<DailyOpenClose, ApiError> {
        self.rest.send(request).await
    }

    pub async fn trades(&self, request: &TradesRequest) -> Result<ListResponse<Trade>, ApiError> {
        self.rest.send(request).await
    }

    pub async fn quotes(&self, request: &QuotesRequest) -> Result<ListResponse<Quote>, ApiError> {
        self.rest.send(request).await
    }

    pub async fn last_trade(&self, ticker: &Symbol) -> Result<SingleResponse<LastTrade>, ApiError> {
        self.rest.send(&LastTradeRequest::new(ticker.clone())).await
    }

    pub async fn last_quote(&self, ticker: &Symbol) -> Result<SingleResponse<LastQuote>, ApiError> {
        self.rest.send(&LastQuoteRequest::new(ticker.clone())).await
    }

    pub async fn snapshot(&self, ticker: &Symbol) -> Result<SnapshotResponse, ApiError> {
        self.rest.send(&SnapshotRequest::new(ticker.clone())).await
    }

    pub async fn all_snapshots(
        &self,
        request: &AllSnapshotsRequest,
    ) -> Result<SnapshotListResponse, ApiError> {
        self.rest.send(request).await
    }

    pub async fn gainers(&self) -> Result<SnapshotListResponse, ApiError> {
        self.rest
            .send(&GainersLosersRequest::new(MarketDirection::Gainers))
            .await
    }

    pub async fn losers(&self) -> Result<SnapshotListResponse, ApiError> {
        self.rest
            .send(&GainersLosersRequest::new(MarketDirection::Losers))
            .await
    }

    pub async fn gainers_losers(
        &self,
        request: &GainersLosersRequest,
    ) -> Result<SnapshotListResponse, ApiError> {
        self.rest.send(request).await
    }

    /// SMA, EMA, RSI or MACD depending on `request.indicator`.
    pub async fn indicator(
        &self,
        request: &IndicatorRequest,
    ) -> Result<IndicatorResponse, ApiError> {
        self.rest.send(request).await
    }
}
