//! Request builders and response DTOs, one module per endpoint family.
//!
//! Response structs mirror the upstream JSON field for field; short keys such
//! as `o`/`h`/`l`/`c` are renamed to readable Rust names but serialize back
//! under their original names.

pub mod common;
pub mod options;
pub mod reference;
pub mod stocks;

pub use common::{datetime_from_millis, datetime_from_nanos, ListResponse, SingleResponse};
pub use options::{
    AdditionalUnderlying, Greeks, OptionContractSnapshot, OptionContractSnapshotRequest,
    OptionDay, OptionDetails, OptionLastQuote, OptionLastTrade, OptionsChainRequest,
    OptionsContract, OptionsContractRequest, OptionsContractsRequest, UnderlyingAsset,
};
pub use reference::{
    Address, Branding, Condition, ConditionsRequest, Dividend, DividendsRequest, Exchange,
    ExchangesRequest, Insight, Market, MarketHoliday, MarketHolidaysRequest, MarketStatus,
    MarketStatusRequest, NewsArticle, NewsRequest, Publisher, RelatedCompaniesRequest,
    RelatedCompaniesResponse, RelatedCompany, Split, SplitsRequest, TickerDetails,
    TickerDetailsRequest, TickerInfo, TickerType, TickerTypesRequest, TickersRequest,
};
pub use stocks::{
    AggregateBar, AggregatesRequest, AggregatesResponse, AllSnapshotsRequest, DailyOpenClose,
    DailyOpenCloseRequest, GainersLosersRequest, GroupedDailyRequest, Indicator,
    IndicatorRequest, IndicatorResponse, IndicatorResults, IndicatorUnderlying, IndicatorValue,
    LastQuote, LastQuoteRequest, LastTrade, LastTradeRequest, MarketDirection,
    PreviousCloseRequest, Quote, QuotesRequest, SeriesType, SnapshotBar, SnapshotListResponse,
    SnapshotQuote, SnapshotRequest, SnapshotResponse, SnapshotTrade, TickQuery, TickerSnapshot,
    Trade, TradesRequest,
};
