use crate::api_error::ApiError;
use crate::client::RestClient;
use crate::models::{
    Condition, ConditionsRequest, Dividend, DividendsRequest, Exchange, ExchangesRequest,
    ListResponse, MarketHoliday, MarketHolidaysRequest, MarketStatus, MarketStatusRequest,
    NewsArticle, NewsRequest, RelatedCompaniesRequest, RelatedCompaniesResponse, SingleResponse,
    Split, SplitsRequest, TickerDetails, TickerDetailsRequest, TickerInfo, TickerType,
    TickerTypesRequest, TickersRequest,
};
use crate::Symbol;

/// Tickers, exchanges, market calendar, corporate actions and news.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceService<'a> {
    rest: &'a RestClient,
}

impl<'a> ReferenceService<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn tickers(
        &self,
        request: &TickersRequest,
    ) -> Result<ListResponse<TickerInfo>, ApiError> {
        self.rest.send(request).await
    }

    pub async fn ticker_details(
        &self,
        request: &TickerDetailsRequest,
    ) -> Result<SingleResponse<TickerDetails>, ApiError> {
        self.rest.send(request).await
    }

    pub async fn ticker_types(
        &self,
        request: &TickerTypesRequest,
    ) -> Result<ListResponse<TickerType>, ApiError> {
        self.rest.send(request).await
    }

    pub async fn related_companies(
        &self,
        ticker: &Symbol,
    ) -> Result<RelatedCompaniesResponse, ApiError> {
        self.rest
            .send(&RelatedCompaniesRequest::new(ticker.clone()))
            .await
    }

    pub async fn exchanges(
        &self,
        request: &ExchangesRequest,
    ) -> Result<ListResponse<Exchange>, ApiError> {
        self.rest.send(request).await
    }

    pub async fn conditions(
        &self,
        request: &ConditionsRequest,
    ) -> Result<ListResponse<Condition>, ApiError> {
        self.rest.send(request).await
    }

    pub async fn market_status(&self) -> Result<MarketStatus, ApiError> {
        self.rest.send(&MarketStatusRequest).await
    }

    pub async fn market_holidays(&self) -> Result<Vec<MarketHoliday>, ApiError> {
        self.rest.send(&MarketHolidaysRequest).await
    }

    pub async fn dividends(
        &self,
        request: &DividendsRequest,
    ) -> Result<ListResponse<Dividend>, ApiError> {
        self.rest.send(request).await
    }

    pub async fn splits(&self, request: &SplitsRequest) -> Result<ListResponse<Split>, ApiError> {
        self.rest.send(request).await
    }

    pub async fn news(&self, request: &NewsRequest) -> Result<ListResponse<NewsArticle>, ApiError> {
        self.rest.send(request).await
    }
}
