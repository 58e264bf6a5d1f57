//! Aggregates, trades, quotes, snapshots and technical indicators.
//!
//! The aggregate, trade, quote and indicator requests take a [`Ticker`], so
//! the same types serve the options endpoints with an `O:` contract.
//!
//! | Request | Path | Response |
//! |---------|------|----------|
//! | [`AggregatesRequest`] | `/v2/aggs/ticker/{ticker}/range/{multiplier}/{timespan}/{from}/{to}` | [`AggregatesResponse`] |
//! | [`PreviousCloseRequest`] | `/v2/aggs/ticker/{ticker}/prev` | [`AggregatesResponse`] |
//! | [`GroupedDailyRequest`] | `/v2/aggs/grouped/locale/us/market/stocks/{date}` | [`AggregatesResponse`] |
//! | [`DailyOpenCloseRequest`] | `/v1/open-close/{ticker}/{date}` | [`DailyOpenClose`] |
//! | [`TradesRequest`] | `/v3/trades/{ticker}` | [`ListResponse<Trade>`] |
//! | [`QuotesRequest`] | `/v3/quotes/{ticker}` | [`ListResponse<Quote>`] |
//! | [`LastTradeRequest`] | `/v2/last/trade/{ticker}` | [`SingleResponse<LastTrade>`] |
//! | [`LastQuoteRequest`] | `/v2/last/nbbo/{ticker}` | [`SingleResponse<LastQuote>`] |
//! | [`SnapshotRequest`] | `/v2/snapshot/locale/us/markets/stocks/tickers/{ticker}` | [`SnapshotResponse`] |
//! | [`AllSnapshotsRequest`] | `/v2/snapshot/locale/us/markets/stocks/tickers` | [`SnapshotListResponse`] |
//! | [`GainersLosersRequest`] | `/v2/snapshot/locale/us/markets/stocks/{direction}` | [`SnapshotListResponse`] |
//! | [`IndicatorRequest`] | `/v1/indicators/{sma,ema,rsi,macd}/{ticker}` | [`IndicatorResponse`] |

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::common::{datetime_from_millis, datetime_from_nanos, ListResponse, SingleResponse};
use crate::domain::{format_iso_date, Symbol, Ticker, Timespan};
use crate::endpoint::{
    path_segment, validate_limit, ApiRequest, Comparison, Paginated, QueryParams, SortOrder,
};
use crate::ValidationError;

pub const MAX_AGGREGATES_LIMIT: u32 = 50_000;
pub const MAX_TICK_LIMIT: u32 = 50_000;
pub const MAX_INDICATOR_LIMIT: u32 = 5_000;

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatesRequest {
    pub ticker: Ticker,
    pub multiplier: u32,
    pub timespan: Timespan,
    pub from: Date,
    pub to: Date,
    pub adjusted: Option<bool>,
    pub sort: Option<SortOrder>,
    pub limit: Option<u32>,
}

impl AggregatesRequest {
    pub fn new(
        ticker: impl Into<Ticker>,
        multiplier: u32,
        timespan: Timespan,
        from: Date,
        to: Date,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            multiplier,
            timespan,
            from,
            to,
            adjusted: None,
            sort: None,
            limit: None,
        }
    }

    pub fn with_adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = Some(adjusted);
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl ApiRequest for AggregatesRequest {
    type Response = AggregatesResponse;

    fn path(&self) -> String {
        format!(
            "/v2/aggs/ticker/{}/range/{}/{}/{}/{}",
            path_segment(&self.ticker.to_string()),
            self.multiplier,
            self.timespan,
            format_iso_date(self.from),
            format_iso_date(self.to)
        )
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("adjusted", self.adjusted)
            .push_opt("sort", self.sort)
            .push_opt("limit", self.limit);
        params
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.multiplier == 0 {
            return Err(ValidationError::ZeroValue { field: "multiplier" });
        }
        if self.from > self.to {
            return Err(ValidationError::InvalidDateRange {
                from: format_iso_date(self.from),
                to: format_iso_date(self.to),
            });
        }
        validate_limit(self.limit, MAX_AGGREGATES_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousCloseRequest {
    pub ticker: Ticker,
    pub adjusted: Option<bool>,
}

impl PreviousCloseRequest {
    pub fn new(ticker: impl Into<Ticker>) -> Self {
        Self {
            ticker: ticker.into(),
            adjusted: None,
        }
    }

    pub fn with_adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = Some(adjusted);
        self
    }
}

impl ApiRequest for PreviousCloseRequest {
    type Response = AggregatesResponse;

    fn path(&self) -> String {
        format!("/v2/aggs/ticker/{}/prev", path_segment(&self.ticker.to_string()))
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("adjusted", self.adjusted);
        params
    }
}

/// Daily bars for every US stock on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedDailyRequest {
    pub date: Date,
    pub adjusted: Option<bool>,
    pub include_otc: Option<bool>,
}

impl GroupedDailyRequest {
    pub fn new(date: Date) -> Self {
        Self {
            date,
            adjusted: None,
            include_otc: None,
        }
    }

    pub fn with_adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = Some(adjusted);
        self
    }

    pub fn with_include_otc(mut self, include_otc: bool) -> Self {
        self.include_otc = Some(include_otc);
        self
    }
}

impl ApiRequest for GroupedDailyRequest {
    type Response = AggregatesResponse;

    fn path(&self) -> String {
        format!(
            "/v2/aggs/grouped/locale/us/market/stocks/{}",
            format_iso_date(self.date)
        )
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("adjusted", self.adjusted)
            .push_opt("include_otc", self.include_otc);
        params
    }
}

/// One OHLCV bar. Timestamps are Unix milliseconds at the window start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateBar {
    #[serde(rename = "T", default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "c")]
    pub close: f64,
    #[serde(rename = "v")]
    pub volume: f64,
    #[serde(rename = "vw", default)]
    pub vwap: Option<f64>,
    #[serde(rename = "t")]
    pub timestamp: i64,
    #[serde(rename = "n", default)]
    pub transactions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otc: Option<bool>,
}

impl AggregateBar {
    pub fn start_time(&self) -> Option<OffsetDateTime> {
        datetime_from_millis(self.timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatesResponse {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub adjusted: Option<bool>,
    #[serde(rename = "queryCount", default)]
    pub query_count: Option<u64>,
    #[serde(rename = "resultsCount", default)]
    pub results_count: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(default)]
    pub results: Vec<AggregateBar>,
}

impl Paginated for AggregatesResponse {
    fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Daily open/close
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyOpenCloseRequest {
    pub ticker: Ticker,
    pub date: Date,
    pub adjusted: Option<bool>,
}

impl DailyOpenCloseRequest {
    pub fn new(ticker: impl Into<Ticker>, date: Date) -> Self {
        Self {
            ticker: ticker.into(),
            date,
            adjusted: None,
        }
    }

    pub fn with_adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = Some(adjusted);
        self
    }
}

impl ApiRequest for DailyOpenCloseRequest {
    type Response = DailyOpenClose;

    fn path(&self) -> String {
        format!(
            "/v1/open-close/{}/{}",
            path_segment(&self.ticker.to_string()),
            format_iso_date(self.date)
        )
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("adjusted", self.adjusted);
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOpenClose {
    #[serde(default)]
    pub status: Option<String>,
    pub symbol: String,
    pub from: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(rename = "preMarket", default)]
    pub pre_market: Option<f64>,
    #[serde(rename = "afterHours", default)]
    pub after_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otc: Option<bool>,
}

// ---------------------------------------------------------------------------
// Trades and quotes
// ---------------------------------------------------------------------------

/// Tick-level listing shared by `/v3/trades` and `/v3/quotes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickQuery {
    pub ticker: Ticker,
    /// Filters on `timestamp`; values are dates or Unix nanoseconds.
    pub timestamp: Vec<(Comparison, String)>,
    pub order: Option<SortOrder>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl TickQuery {
    fn new(ticker: Ticker) -> Self {
        Self {
            ticker,
            timestamp: Vec::new(),
            order: None,
            sort: None,
            limit: None,
            cursor: None,
        }
    }

    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_filters("timestamp", &self.timestamp)
            .push_opt("order", self.order)
            .push_opt("sort", self.sort.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("cursor", self.cursor.as_deref());
        params
    }
}

macro_rules! tick_request {
    ($name:ident, $segment:literal, $item:ty) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(pub TickQuery);

        impl $name {
            pub fn new(ticker: impl Into<Ticker>) -> Self {
                Self(TickQuery::new(ticker.into()))
            }

            pub fn ticker(&self) -> &Ticker {
                &self.0.ticker
            }

            pub fn with_timestamp(mut self, comparison: Comparison, value: impl Into<String>) -> Self {
                self.0.timestamp.push((comparison, value.into()));
                self
            }

            pub fn with_order(mut self, order: SortOrder) -> Self {
                self.0.order = Some(order);
                self
            }

            pub fn with_sort(mut self, field: impl Into<String>) -> Self {
                self.0.sort = Some(field.into());
                self
            }

            pub fn with_limit(mut self, limit: u32) -> Self {
                self.0.limit = Some(limit);
                self
            }

            pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
                self.0.cursor = Some(cursor.into());
                self
            }
        }

        impl ApiRequest for $name {
            type Response = ListResponse<$item>;

            fn path(&self) -> String {
                format!(
                    concat!("/v3/", $segment, "/{}"),
                    path_segment(&self.0.ticker.to_string())
                )
            }

            fn query(&self) -> QueryParams {
                self.0.params()
            }

            fn validate(&self) -> Result<(), ValidationError> {
                validate_limit(self.0.limit, MAX_TICK_LIMIT)
            }
        }
    };
}

tick_request!(TradesRequest, "trades", Trade);
tick_request!(QuotesRequest, "quotes", Quote);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(default)]
    pub id: Option<String>,
    pub price: f64,
    pub size: f64,
    #[serde(default)]
    pub exchange: Option<i32>,
    #[serde(default)]
    pub conditions: Option<Vec<i32>>,
    #[serde(default)]
    pub correction: Option<i32>,
    #[serde(default)]
    pub tape: Option<i32>,
    #[serde(default)]
    pub trf_id: Option<i32>,
    #[serde(default)]
    pub sequence_number: Option<i64>,
    pub sip_timestamp: i64,
    #[serde(default)]
    pub participant_timestamp: Option<i64>,
    #[serde(default)]
    pub trf_timestamp: Option<i64>,
}

impl Trade {
    pub fn sip_time(&self) -> Option<OffsetDateTime> {
        datetime_from_nanos(self.sip_timestamp)
    }
}

/// NBBO quote tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub ask_price: Option<f64>,
    #[serde(default)]
    pub ask_size: Option<f64>,
    #[serde(default)]
    pub ask_exchange: Option<i32>,
    #[serde(default)]
    pub bid_price: Option<f64>,
    #[serde(default)]
    pub bid_size: Option<f64>,
    #[serde(default)]
    pub bid_exchange: Option<i32>,
    #[serde(default)]
    pub conditions: Option<Vec<i32>>,
    #[serde(default)]
    pub indicators: Option<Vec<i32>>,
    #[serde(default)]
    pub tape: Option<i32>,
    #[serde(default)]
    pub sequence_number: Option<i64>,
    pub sip_timestamp: i64,
    #[serde(default)]
    pub participant_timestamp: Option<i64>,
}

impl Quote {
    pub fn sip_time(&self) -> Option<OffsetDateTime> {
        datetime_from_nanos(self.sip_timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastTradeRequest {
    pub ticker: Ticker,
}

impl LastTradeRequest {
    pub fn new(ticker: impl Into<Ticker>) -> Self {
        Self {
            ticker: ticker.into(),
        }
    }
}

impl ApiRequest for LastTradeRequest {
    type Response = SingleResponse<LastTrade>;

    fn path(&self) -> String {
        format!("/v2/last/trade/{}", path_segment(&self.ticker.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastTrade {
    #[serde(rename = "T", default)]
    pub ticker: Option<String>,
    #[serde(rename = "i", default)]
    pub id: Option<String>,
    #[serde(rename = "p")]
    pub price: f64,
    #[serde(rename = "s")]
    pub size: f64,
    #[serde(rename = "x", default)]
    pub exchange: Option<i32>,
    #[serde(rename = "c", default)]
    pub conditions: Option<Vec<i32>>,
    #[serde(rename = "t")]
    pub sip_timestamp: i64,
    #[serde(rename = "y", default)]
    pub participant_timestamp: Option<i64>,
    #[serde(rename = "q", default)]
    pub sequence_number: Option<i64>,
    #[serde(rename = "z", default)]
    pub tape: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastQuoteRequest {
    pub ticker: Symbol,
}

impl LastQuoteRequest {
    pub fn new(ticker: Symbol) -> Self {
        Self { ticker }
    }
}

impl ApiRequest for LastQuoteRequest {
    type Response = SingleResponse<LastQuote>;

    fn path(&self) -> String {
        format!("/v2/last/nbbo/{}", path_segment(self.ticker.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastQuote {
    #[serde(rename = "T", default)]
    pub ticker: Option<String>,
    #[serde(rename = "P")]
    pub ask_price: f64,
    #[serde(rename = "S", default)]
    pub ask_size: Option<f64>,
    #[serde(rename = "X", default)]
    pub ask_exchange: Option<i32>,
    #[serde(rename = "p")]
    pub bid_price: f64,
    #[serde(rename = "s", default)]
    pub bid_size: Option<f64>,
    #[serde(rename = "x", default)]
    pub bid_exchange: Option<i32>,
    #[serde(rename = "t")]
    pub sip_timestamp: i64,
    #[serde(rename = "y", default)]
    pub participant_timestamp: Option<i64>,
    #[serde(rename = "q", default)]
    pub sequence_number: Option<i64>,
    #[serde(rename = "z", default)]
    pub tape: Option<i32>,
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRequest {
    pub ticker: Symbol,
}

impl SnapshotRequest {
    pub fn new(ticker: Symbol) -> Self {
        Self { ticker }
    }
}

impl ApiRequest for SnapshotRequest {
    type Response = SnapshotResponse;

    fn path(&self) -> String {
        format!(
            "/v2/snapshot/locale/us/markets/stocks/tickers/{}",
            path_segment(self.ticker.as_str())
        )
    }
}

/// All tickers, or the subset named in `tickers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllSnapshotsRequest {
    pub tickers: Vec<Symbol>,
    pub include_otc: Option<bool>,
}

impl AllSnapshotsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tickers(mut self, tickers: Vec<Symbol>) -> Self {
        self.tickers = tickers;
        self
    }

    pub fn with_include_otc(mut self, include_otc: bool) -> Self {
        self.include_otc = Some(include_otc);
        self
    }
}

impl ApiRequest for AllSnapshotsRequest {
    type Response = SnapshotListResponse;

    fn path(&self) -> String {
        String::from("/v2/snapshot/locale/us/markets/stocks/tickers")
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if !self.tickers.is_empty() {
            let joined = self
                .tickers
                .iter()
                .map(Symbol::as_str)
                .collect::<Vec<_>>()
                .join(",");
            params.push("tickers", joined);
        }
        params.push_opt("include_otc", self.include_otc);
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketDirection {
    Gainers,
    Losers,
}

impl MarketDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gainers => "gainers",
            Self::Losers => "losers",
        }
    }
}

impl Display for MarketDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GainersLosersRequest {
    pub direction: MarketDirection,
    pub include_otc: Option<bool>,
}

impl GainersLosersRequest {
    pub fn new(direction: MarketDirection) -> Self {
        Self {
            direction,
            include_otc: None,
        }
    }

    pub fn with_include_otc(mut self, include_otc: bool) -> Self {
        self.include_otc = Some(include_otc);
        self
    }
}

impl ApiRequest for GainersLosersRequest {
    type Response = SnapshotListResponse;

    fn path(&self) -> String {
        format!("/v2/snapshot/locale/us/markets/stocks/{}", self.direction)
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("include_otc", self.include_otc);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotBar {
    #[serde(rename = "o", default)]
    pub open: Option<f64>,
    #[serde(rename = "h", default)]
    pub high: Option<f64>,
    #[serde(rename = "l", default)]
    pub low: Option<f64>,
    #[serde(rename = "c", default)]
    pub close: Option<f64>,
    #[serde(rename = "v", default)]
    pub volume: Option<f64>,
    #[serde(rename = "vw", default)]
    pub vwap: Option<f64>,
    /// Accumulated volume; minute bars only.
    #[serde(rename = "av", default, skip_serializing_if = "Option::is_none")]
    pub accumulated_volume: Option<f64>,
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(rename = "n", default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotQuote {
    #[serde(rename = "P", default)]
    pub ask_price: Option<f64>,
    #[serde(rename = "S", default)]
    pub ask_size: Option<f64>,
    #[serde(rename = "p", default)]
    pub bid_price: Option<f64>,
    #[serde(rename = "s", default)]
    pub bid_size: Option<f64>,
    #[serde(rename = "t", default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotTrade {
    #[serde(rename = "i", default)]
    pub id: Option<String>,
    #[serde(rename = "p", default)]
    pub price: Option<f64>,
    #[serde(rename = "s", default)]
    pub size: Option<f64>,
    #[serde(rename = "x", default)]
    pub exchange: Option<i32>,
    #[serde(rename = "c", default)]
    pub conditions: Option<Vec<i32>>,
    #[serde(rename = "t", default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    pub ticker: String,
    #[serde(default)]
    pub day: Option<SnapshotBar>,
    #[serde(default)]
    pub min: Option<SnapshotBar>,
    #[serde(rename = "prevDay", default)]
    pub prev_day: Option<SnapshotBar>,
    #[serde(rename = "lastQuote", default)]
    pub last_quote: Option<SnapshotQuote>,
    #[serde(rename = "lastTrade", default)]
    pub last_trade: Option<SnapshotTrade>,
    #[serde(rename = "todaysChange", default)]
    pub todays_change: Option<f64>,
    #[serde(rename = "todaysChangePerc", default)]
    pub todays_change_percent: Option<f64>,
    #[serde(default)]
    pub updated: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    pub ticker: TickerSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotListResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub tickers: Vec<TickerSnapshot>,
}

// ---------------------------------------------------------------------------
// Technical indicators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Sma { window: u32 },
    Ema { window: u32 },
    Rsi { window: u32 },
    Macd { short: u32, long: u32, signal: u32 },
}

impl Indicator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sma { .. } => "sma",
            Self::Ema { .. } => "ema",
            Self::Rsi { .. } => "rsi",
            Self::Macd { .. } => "macd",
        }
    }
}

/// Price field an indicator is computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Open,
    High,
    Low,
    Close,
}

impl SeriesType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
        }
    }
}

impl Display for SeriesType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorRequest {
    pub ticker: Ticker,
    pub indicator: Indicator,
    pub timestamp: Vec<(Comparison, String)>,
    pub timespan: Option<Timespan>,
    pub adjusted: Option<bool>,
    pub series_type: Option<SeriesType>,
    pub expand_underlying: Option<bool>,
    pub order: Option<SortOrder>,
    pub limit: Option<u32>,
}

impl IndicatorRequest {
    pub fn new(ticker: impl Into<Ticker>, indicator: Indicator) -> Self {
        Self {
            ticker: ticker.into(),
            indicator,
            timestamp: Vec::new(),
            timespan: None,
            adjusted: None,
            series_type: None,
            expand_underlying: None,
            order: None,
            limit: None,
        }
    }

    pub fn sma(ticker: impl Into<Ticker>, window: u32) -> Self {
        Self::new(ticker, Indicator::Sma { window })
    }

    pub fn ema(ticker: impl Into<Ticker>, window: u32) -> Self {
        Self::new(ticker, Indicator::Ema { window })
    }

    pub fn rsi(ticker: impl Into<Ticker>, window: u32) -> Self {
        Self::new(ticker, Indicator::Rsi { window })
    }

    pub fn macd(ticker: impl Into<Ticker>, short: u32, long: u32, signal: u32) -> Self {
        Self::new(ticker, Indicator::Macd { short, long, signal })
    }

    pub fn with_timestamp(mut self, comparison: Comparison, value: impl Into<String>) -> Self {
        self.timestamp.push((comparison, value.into()));
        self
    }

    pub fn with_timespan(mut self, timespan: Timespan) -> Self {
        self.timespan = Some(timespan);
        self
    }

    pub fn with_adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = Some(adjusted);
        self
    }

    pub fn with_series_type(mut self, series_type: SeriesType) -> Self {
        self.series_type = Some(series_type);
        self
    }

    pub fn with_expand_underlying(mut self, expand: bool) -> Self {
        self.expand_underlying = Some(expand);
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
}

impl ApiRequest for IndicatorRequest {
    type Response = IndicatorResponse;

    fn path(&self) -> String {
        format!(
            "/v1/indicators/{}/{}",
            self.indicator.as_str(),
            path_segment(&self.ticker.to_string())
        )
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_filters("timestamp", &self.timestamp)
            .push_opt("timespan", self.timespan)
            .push_opt("adjusted", self.adjusted);
        match self.indicator {
            Indicator::Sma { window } | Indicator::Ema { window } | Indicator::Rsi { window } => {
                params.push("window", window);
            }
            Indicator::Macd {
                short,
                long,
                signal,
            } => {
                params
                    .push("short_window", short)
                    .push("long_window", long)
                    .push("signal_window", signal);
            }
        }
        params
            .push_opt("series_type", self.series_type)
            .push_opt("expand_underlying", self.expand_underlying)
            .push_opt("order", self.order)
            .push_opt("limit", self.limit);
        params
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self.indicator {
            Indicator::Sma { window } | Indicator::Ema { window } | Indicator::Rsi { window } => {
                if window == 0 {
                    return Err(ValidationError::ZeroValue { field: "window" });
                }
            }
            Indicator::Macd {
                short,
                long,
                signal,
            } => {
                if short == 0 {
                    return Err(ValidationError::ZeroValue { field: "short_window" });
                }
                if signal == 0 {
                    return Err(ValidationError::ZeroValue { field: "signal_window" });
                }
                if short >= long {
                    return Err(ValidationError::InvalidMacdWindows { short, long });
                }
            }
        }
        validate_limit(self.limit, MAX_INDICATOR_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub timestamp: i64,
    pub value: f64,
    /// MACD only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<f64>,
    /// MACD only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histogram: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorUnderlying {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregates: Option<Vec<AggregateBar>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResults {
    #[serde(default)]
    pub underlying: Option<IndicatorUnderlying>,
    #[serde(default)]
    pub values: Vec<IndicatorValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(default)]
    pub results: IndicatorResults,
}

impl Paginated for IndicatorResponse {
    fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }
}
