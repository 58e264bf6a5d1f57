//! Reference data: tickers, exchanges, market calendar, corporate actions
//! and news.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::Date;

use super::common::{iso_filters, ListResponse, SingleResponse};
use crate::domain::{format_iso_date, Symbol};
use crate::endpoint::{
    path_segment, validate_limit, ApiRequest, Comparison, QueryParams, SortOrder,
};
use crate::ValidationError;

pub const MAX_REFERENCE_LIMIT: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    Stocks,
    Crypto,
    Fx,
    Otc,
    Indices,
}

impl Market {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stocks => "stocks",
            Self::Crypto => "crypto",
            Self::Fx => "fx",
            Self::Otc => "otc",
            Self::Indices => "indices",
        }
    }
}

impl Display for Market {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Market {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stocks" => Ok(Self::Stocks),
            "crypto" => Ok(Self::Crypto),
            "fx" => Ok(Self::Fx),
            "otc" => Ok(Self::Otc),
            "indices" => Ok(Self::Indices),
            other => Err(ValidationError::InvalidMarket {
                value: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tickers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickersRequest {
    pub ticker: Vec<(Comparison, String)>,
    pub ticker_type: Option<String>,
    pub market: Option<Market>,
    pub exchange: Option<String>,
    pub cusip: Option<String>,
    pub cik: Option<String>,
    pub date: Option<Date>,
    pub search: Option<String>,
    pub active: Option<bool>,
    pub order: Option<SortOrder>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl TickersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ticker(mut self, comparison: Comparison, ticker: impl Into<String>) -> Self {
        self.ticker.push((comparison, ticker.into()));
        self
    }

    pub fn with_type(mut self, ticker_type: impl Into<String>) -> Self {
        self.ticker_type = Some(ticker_type.into());
        self
    }

    pub fn with_market(mut self, market: Market) -> Self {
        self.market = Some(market);
        self
    }

    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    pub fn with_cusip(mut self, cusip: impl Into<String>) -> Self {
        self.cusip = Some(cusip.into());
        self
    }

    pub fn with_cik(mut self, cik: impl Into<String>) -> Self {
        self.cik = Some(cik.into());
        self
    }

    pub fn with_date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl ApiRequest for TickersRequest {
    type Response = ListResponse<TickerInfo>;

    fn path(&self) -> String {
        String::from("/v3/reference/tickers")
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_filters("ticker", &self.ticker)
            .push_opt("type", self.ticker_type.as_deref())
            .push_opt("market", self.market)
            .push_opt("exchange", self.exchange.as_deref())
            .push_opt("cusip", self.cusip.as_deref())
            .push_opt("cik", self.cik.as_deref())
            .push_opt("date", self.date.map(format_iso_date))
            .push_opt("search", self.search.as_deref())
            .push_opt("active", self.active)
            .push_opt("order", self.order)
            .push_opt("sort", self.sort.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("cursor", self.cursor.as_deref());
        params
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.search.as_deref().is_some_and(|text| text.trim().is_empty()) {
            return Err(ValidationError::EmptySearch);
        }
        validate_limit(self.limit, MAX_REFERENCE_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerInfo {
    pub ticker: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub primary_exchange: Option<String>,
    #[serde(rename = "type", default)]
    pub ticker_type: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub currency_name: Option<String>,
    #[serde(default)]
    pub cik: Option<String>,
    #[serde(default)]
    pub composite_figi: Option<String>,
    #[serde(default)]
    pub share_class_figi: Option<String>,
    #[serde(default)]
    pub last_updated_utc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delisted_utc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerDetailsRequest {
    pub ticker: Symbol,
    pub date: Option<Date>,
}

impl TickerDetailsRequest {
    pub fn new(ticker: Symbol) -> Self {
        Self { ticker, date: None }
    }

    pub fn with_date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }
}

impl ApiRequest for TickerDetailsRequest {
    type Response = SingleResponse<TickerDetails>;

    fn path(&self) -> String {
        format!("/v3/reference/tickers/{}", path_segment(self.ticker.as_str()))
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("date", self.date.map(format_iso_date));
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branding {
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerDetails {
    pub ticker: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub primary_exchange: Option<String>,
    #[serde(rename = "type", default)]
    pub ticker_type: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub currency_name: Option<String>,
    #[serde(default)]
    pub cik: Option<String>,
    #[serde(default)]
    pub composite_figi: Option<String>,
    #[serde(default)]
    pub share_class_figi: Option<String>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sic_code: Option<String>,
    #[serde(default)]
    pub sic_description: Option<String>,
    #[serde(default)]
    pub ticker_root: Option<String>,
    #[serde(default)]
    pub homepage_url: Option<String>,
    #[serde(default)]
    pub total_employees: Option<u64>,
    #[serde(default)]
    pub list_date: Option<String>,
    #[serde(default)]
    pub branding: Option<Branding>,
    #[serde(default)]
    pub share_class_shares_outstanding: Option<f64>,
    #[serde(default)]
    pub weighted_shares_outstanding: Option<f64>,
    #[serde(default)]
    pub round_lot: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerTypesRequest {
    pub asset_class: Option<String>,
    pub locale: Option<String>,
}

impl TickerTypesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = Some(asset_class.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

impl ApiRequest for TickerTypesRequest {
    type Response = ListResponse<TickerType>;

    fn path(&self) -> String {
        String::from("/v3/reference/tickers/types")
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("asset_class", self.asset_class.as_deref())
            .push_opt("locale", self.locale.as_deref());
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerType {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub asset_class: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedCompaniesRequest {
    pub ticker: Symbol,
}

impl RelatedCompaniesRequest {
    pub fn new(ticker: Symbol) -> Self {
        Self { ticker }
    }
}

impl ApiRequest for RelatedCompaniesRequest {
    type Response = RelatedCompaniesResponse;

    fn path(&self) -> String {
        format!("/v1/related-companies/{}", path_segment(self.ticker.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedCompany {
    pub ticker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedCompaniesResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub stock_symbol: Option<String>,
    #[serde(default)]
    pub results: Vec<RelatedCompany>,
}

// ---------------------------------------------------------------------------
// Exchanges and conditions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangesRequest {
    pub asset_class: Option<String>,
    pub locale: Option<String>,
}

impl ExchangesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = Some(asset_class.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

impl ApiRequest for ExchangesRequest {
    type Response = ListResponse<Exchange>;

    fn path(&self) -> String {
        String::from("/v3/reference/exchanges")
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("asset_class", self.asset_class.as_deref())
            .push_opt("locale", self.locale.as_deref());
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub exchange_type: Option<String>,
    #[serde(default)]
    pub asset_class: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub acronym: Option<String>,
    #[serde(default)]
    pub mic: Option<String>,
    #[serde(default)]
    pub operating_mic: Option<String>,
    #[serde(default)]
    pub participant_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionsRequest {
    pub asset_class: Option<String>,
    pub data_type: Option<String>,
    pub id: Option<i64>,
    pub sip: Option<String>,
    pub order: Option<SortOrder>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl ConditionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = Some(asset_class.into());
        self
    }

    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_sip(mut self, sip: impl Into<String>) -> Self {
        self.sip = Some(sip.into());
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl ApiRequest for ConditionsRequest {
    type Response = ListResponse<Condition>;

    fn path(&self) -> String {
        String::from("/v3/reference/conditions")
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("asset_class", self.asset_class.as_deref())
            .push_opt("data_type", self.data_type.as_deref())
            .push_opt("id", self.id)
            .push_opt("sip", self.sip.as_deref())
            .push_opt("order", self.order)
            .push_opt("sort", self.sort.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("cursor", self.cursor.as_deref());
        params
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_limit(self.limit, MAX_REFERENCE_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub condition_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub asset_class: Option<String>,
    #[serde(default)]
    pub data_types: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub exchange: Option<i64>,
    #[serde(default)]
    pub legacy: Option<bool>,
    #[serde(default)]
    pub sip_mapping: Option<BTreeMap<String, String>>,
}

// ---------------------------------------------------------------------------
// Market calendar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarketStatusRequest;

impl ApiRequest for MarketStatusRequest {
    type Response = MarketStatus;

    fn path(&self) -> String {
        String::from("/v1/marketstatus/now")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketStatus {
    pub market: String,
    #[serde(rename = "serverTime", default)]
    pub server_time: Option<String>,
    #[serde(rename = "earlyHours", default)]
    pub early_hours: Option<bool>,
    #[serde(rename = "afterHours", default)]
    pub after_hours: Option<bool>,
    #[serde(default)]
    pub exchanges: BTreeMap<String, String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, String>,
    #[serde(rename = "indicesGroups", default)]
    pub indices_groups: BTreeMap<String, String>,
}

impl MarketStatus {
    pub fn is_open(&self) -> bool {
        self.market == "open"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarketHolidaysRequest;

impl ApiRequest for MarketHolidaysRequest {
    type Response = Vec<MarketHoliday>;

    fn path(&self) -> String {
        String::from("/v1/marketstatus/upcoming")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketHoliday {
    pub exchange: String,
    pub name: String,
    pub date: String,
    pub status: String,
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
}

// ---------------------------------------------------------------------------
// Corporate actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DividendsRequest {
    pub ticker: Option<Symbol>,
    pub ex_dividend_date: Vec<(Comparison, Date)>,
    pub pay_date: Vec<(Comparison, Date)>,
    pub frequency: Option<u32>,
    pub dividend_type: Option<String>,
    pub order: Option<SortOrder>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl DividendsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_ticker(ticker: Symbol) -> Self {
        Self {
            ticker: Some(ticker),
            ..Self::default()
        }
    }

    pub fn with_ex_dividend_date(mut self, comparison: Comparison, date: Date) -> Self {
        self.ex_dividend_date.push((comparison, date));
        self
    }

    pub fn with_pay_date(mut self, comparison: Comparison, date: Date) -> Self {
        self.pay_date.push((comparison, date));
        self
    }

    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_dividend_type(mut self, dividend_type: impl Into<String>) -> Self {
        self.dividend_type = Some(dividend_type.into());
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl ApiRequest for DividendsRequest {
    type Response = ListResponse<Dividend>;

    fn path(&self) -> String {
        String::from("/v3/reference/dividends")
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("ticker", self.ticker.as_ref())
            .push_filters("ex_dividend_date", &iso_filters(&self.ex_dividend_date))
            .push_filters("pay_date", &iso_filters(&self.pay_date))
            .push_opt("frequency", self.frequency)
            .push_opt("dividend_type", self.dividend_type.as_deref())
            .push_opt("order", self.order)
            .push_opt("sort", self.sort.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("cursor", self.cursor.as_deref());
        params
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_limit(self.limit, MAX_REFERENCE_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dividend {
    #[serde(default)]
    pub id: Option<String>,
    pub ticker: String,
    pub cash_amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub dividend_type: Option<String>,
    #[serde(default)]
    pub frequency: Option<u32>,
    #[serde(default)]
    pub declaration_date: Option<String>,
    #[serde(default)]
    pub ex_dividend_date: Option<String>,
    #[serde(default)]
    pub record_date: Option<String>,
    #[serde(default)]
    pub pay_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitsRequest {
    pub ticker: Option<Symbol>,
    pub execution_date: Vec<(Comparison, Date)>,
    pub reverse_split: Option<bool>,
    pub order: Option<SortOrder>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl SplitsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_ticker(ticker: Symbol) -> Self {
        Self {
            ticker: Some(ticker),
            ..Self::default()
        }
    }

    pub fn with_execution_date(mut self, comparison: Comparison, date: Date) -> Self {
        self.execution_date.push((comparison, date));
        self
    }

    pub fn with_reverse_split(mut self, reverse_split: bool) -> Self {
        self.reverse_split = Some(reverse_split);
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl ApiRequest for SplitsRequest {
    type Response = ListResponse<Split>;

    fn path(&self) -> String {
        String::from("/v3/reference/splits")
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("ticker", self.ticker.as_ref())
            .push_filters("execution_date", &iso_filters(&self.execution_date))
            .push_opt("reverse_split", self.reverse_split)
            .push_opt("order", self.order)
            .push_opt("sort", self.sort.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("cursor", self.cursor.as_deref());
        params
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_limit(self.limit, MAX_REFERENCE_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    #[serde(default)]
    pub id: Option<String>,
    pub ticker: String,
    pub execution_date: String,
    pub split_from: f64,
    pub split_to: f64,
}

impl Split {
    /// New shares per old share.
    pub fn ratio(&self) -> Option<f64> {
        (self.split_from != 0.0).then(|| self.split_to / self.split_from)
    }
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsRequest {
    pub ticker: Option<Symbol>,
    /// Filters on `published_utc`; values are dates or RFC 3339 timestamps.
    pub published_utc: Vec<(Comparison, String)>,
    pub order: Option<SortOrder>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl NewsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_ticker(ticker: Symbol) -> Self {
        Self {
            ticker: Some(ticker),
            ..Self::default()
        }
    }

    pub fn with_published(mut self, comparison: Comparison, value: impl Into<String>) -> Self {
        self.published_utc.push((comparison, value.into()));
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl ApiRequest for NewsRequest {
    type Response = ListResponse<NewsArticle>;

    fn path(&self) -> String {
        String::from("/v2/reference/news")
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("ticker", self.ticker.as_ref())
            .push_filters("published_utc", &self.published_utc)
            .push_opt("order", self.order)
            .push_opt("sort", self.sort.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("cursor", self.cursor.as_deref());
        params
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_limit(self.limit, MAX_REFERENCE_LIMIT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub homepage_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub ticker: String,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub sentiment_reasoning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub published_utc: String,
    pub article_url: String,
    #[serde(default)]
    pub tickers: Vec<String>,
    #[serde(default)]
    pub publisher: Publisher,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub amp_url: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<Vec<Insight>>,
}
