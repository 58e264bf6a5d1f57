//! Options contracts reference data and options snapshots.
//!
//! Option aggregates, trades, quotes and last trade reuse the request types
//! from [`super::stocks`] with an [`OptionsTicker`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use super::common::{iso_filters, ListResponse, SingleResponse};
use crate::domain::{format_iso_date, ContractKind, OptionsTicker, Symbol};
use crate::endpoint::{
    path_segment, validate_limit, ApiRequest, Comparison, QueryParams, SortOrder,
};
use crate::{OptionsTickerError, ValidationError};

pub const MAX_CONTRACTS_LIMIT: u32 = 1_000;
pub const MAX_CHAIN_LIMIT: u32 = 250;

/// Lists contracts, optionally narrowed to one underlying, expiry window or
/// strike range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsContractsRequest {
    pub underlying: Option<Symbol>,
    pub contract_type: Option<ContractKind>,
    pub expiration_date: Vec<(Comparison, Date)>,
    pub strike_price: Vec<(Comparison, Decimal)>,
    pub as_of: Option<Date>,
    pub expired: Option<bool>,
    pub order: Option<SortOrder>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl OptionsContractsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_underlying(underlying: Symbol) -> Self {
        Self {
            underlying: Some(underlying),
            ..Self::default()
        }
    }

    pub fn with_contract_type(mut self, kind: ContractKind) -> Self {
        self.contract_type = Some(kind);
        self
    }

    pub fn with_expiration(mut self, comparison: Comparison, date: Date) -> Self {
        self.expiration_date.push((comparison, date));
        self
    }

    pub fn with_strike(mut self, comparison: Comparison, strike: Decimal) -> Self {
        self.strike_price.push((comparison, strike));
        self
    }

    pub fn with_as_of(mut self, date: Date) -> Self {
        self.as_of = Some(date);
        self
    }

    pub fn with_expired(mut self, expired: bool) -> Self {
        self.expired = Some(expired);
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

impl ApiRequest for OptionsContractsRequest {
    type Response = ListResponse<OptionsContract>;

    fn path(&self) -> String {
        String::from("/v3/reference/options/contracts")
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("underlying_ticker", self.underlying.as_ref())
            .push_opt("contract_type", self.contract_type)
            .push_filters("expiration_date", &iso_filters(&self.expiration_date))
            .push_opt("as_of", self.as_of.map(format_iso_date))
            .push_filters("strike_price", &self.strike_price)
            .push_opt("expired", self.expired)
            .push_opt("order", self.order)
            .push_opt("sort", self.sort.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("cursor", self.cursor.as_deref());
        params
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_strikes(&self.strike_price)?;
        validate_limit(self.limit, MAX_CONTRACTS_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsContractRequest {
    pub ticker: OptionsTicker,
    pub as_of: Option<Date>,
}

impl OptionsContractRequest {
    pub fn new(ticker: OptionsTicker) -> Self {
        Self {
            ticker,
            as_of: None,
        }
    }

    pub fn with_as_of(mut self, date: Date) -> Self {
        self.as_of = Some(date);
        self
    }
}

impl ApiRequest for OptionsContractRequest {
    type Response = SingleResponse<OptionsContract>;

    fn path(&self) -> String {
        format!(
            "/v3/reference/options/contracts/{}",
            path_segment(&self.ticker.encode())
        )
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("as_of", self.as_of.map(format_iso_date));
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalUnderlying {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub underlying: Option<String>,
}

/// Reference data for one contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsContract {
    pub ticker: String,
    #[serde(default)]
    pub underlying_ticker: Option<String>,
    #[serde(default)]
    pub contract_type: Option<ContractKind>,
    #[serde(default)]
    pub exercise_style: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub strike_price: Option<f64>,
    #[serde(default)]
    pub shares_per_contract: Option<f64>,
    #[serde(default)]
    pub primary_exchange: Option<String>,
    #[serde(default)]
    pub cfi: Option<String>,
    #[serde(default)]
    pub correction: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_underlyings: Option<Vec<AdditionalUnderlying>>,
}

impl OptionsContract {
    /// Decodes the contract's `ticker` field.
    pub fn options_ticker(&self) -> Result<OptionsTicker, OptionsTickerError> {
        OptionsTicker::parse(&self.ticker)
    }
}

/// Snapshot of every contract on an underlying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsChainRequest {
    pub underlying: Symbol,
    pub contract_type: Option<ContractKind>,
    pub expiration_date: Vec<(Comparison, Date)>,
    pub strike_price: Vec<(Comparison, Decimal)>,
    pub order: Option<SortOrder>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl OptionsChainRequest {
    pub fn new(underlying: Symbol) -> Self {
        Self {
            underlying,
            contract_type: None,
            expiration_date: Vec::new(),
            strike_price: Vec::new(),
            order: None,
            sort: None,
            limit: None,
            cursor: None,
        }
    }

    pub fn with_contract_type(mut self, kind: ContractKind) -> Self {
        self.contract_type = Some(kind);
        self
    }

    pub fn with_expiration(mut self, comparison: Comparison, date: Date) -> Self {
        self.expiration_date.push((comparison, date));
        self
    }

    pub fn with_strike(mut self, comparison: Comparison, strike: Decimal) -> Self {
        self.strike_price.push((comparison, strike));
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

impl ApiRequest for OptionsChainRequest {
    type Response = ListResponse<OptionContractSnapshot>;

    fn path(&self) -> String {
        format!("/v3/snapshot/options/{}", path_segment(self.underlying.as_str()))
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_filters("strike_price", &self.strike_price)
            .push_filters("expiration_date", &iso_filters(&self.expiration_date))
            .push_opt("contract_type", self.contract_type)
            .push_opt("order", self.order)
            .push_opt("sort", self.sort.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("cursor", self.cursor.as_deref());
        params
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_strikes(&self.strike_price)?;
        validate_limit(self.limit, MAX_CHAIN_LIMIT)
    }
}

/// Snapshot of a single contract on its underlying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionContractSnapshotRequest {
    pub underlying: Symbol,
    pub contract: OptionsTicker,
}

impl OptionContractSnapshotRequest {
    pub fn new(underlying: Symbol, contract: OptionsTicker) -> Self {
        Self {
            underlying,
            contract,
        }
    }

    /// Uses the contract's own root symbol as the underlying.
    pub fn for_contract(contract: OptionsTicker) -> Result<Self, ValidationError> {
        let underlying = Symbol::parse(contract.underlying())?;
        Ok(Self::new(underlying, contract))
    }
}

impl ApiRequest for OptionContractSnapshotRequest {
    type Response = SingleResponse<OptionContractSnapshot>;

    fn path(&self) -> String {
        format!(
            "/v3/snapshot/options/{}/{}",
            path_segment(self.underlying.as_str()),
            path_segment(&self.contract.encode())
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionDay {
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub vwap: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDetails {
    pub ticker: String,
    #[serde(default)]
    pub contract_type: Option<ContractKind>,
    #[serde(default)]
    pub exercise_style: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub shares_per_contract: Option<f64>,
    #[serde(default)]
    pub strike_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    #[serde(default)]
    pub delta: Option<f64>,
    #[serde(default)]
    pub gamma: Option<f64>,
    #[serde(default)]
    pub theta: Option<f64>,
    #[serde(default)]
    pub vega: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionLastQuote {
    #[serde(default)]
    pub ask: Option<f64>,
    #[serde(default)]
    pub ask_size: Option<f64>,
    #[serde(default)]
    pub bid: Option<f64>,
    #[serde(default)]
    pub bid_size: Option<f64>,
    #[serde(default)]
    pub midpoint: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<i64>,
    #[serde(default)]
    pub timeframe: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionLastTrade {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub exchange: Option<i32>,
    #[serde(default)]
    pub conditions: Option<Vec<i32>>,
    #[serde(default)]
    pub sip_timestamp: Option<i64>,
    #[serde(default)]
    pub timeframe: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnderlyingAsset {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub change_to_break_even: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<i64>,
    #[serde(default)]
    pub timeframe: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContractSnapshot {
    #[serde(default)]
    pub details: Option<OptionDetails>,
    #[serde(default)]
    pub day: Option<OptionDay>,
    #[serde(default)]
    pub greeks: Option<Greeks>,
    #[serde(default)]
    pub implied_volatility: Option<f64>,
    #[serde(default)]
    pub open_interest: Option<f64>,
    #[serde(default)]
    pub break_even_price: Option<f64>,
    #[serde(default)]
    pub last_quote: Option<OptionLastQuote>,
    #[serde(default)]
    pub last_trade: Option<OptionLastTrade>,
    #[serde(default)]
    pub underlying_asset: Option<UnderlyingAsset>,
}

impl OptionContractSnapshot {
    /// Decodes `details.ticker` when present.
    pub fn options_ticker(&self) -> Option<Result<OptionsTicker, OptionsTickerError>> {
        self.details
            .as_ref()
            .map(|details| OptionsTicker::parse(&details.ticker))
    }
}

fn validate_strikes(filters: &[(Comparison, Decimal)]) -> Result<(), ValidationError> {
    match filters.iter().find(|(_, strike)| strike.is_sign_negative()) {
        Some((_, strike)) => Err(ValidationError::NegativeStrike { value: *strike }),
        None => Ok(()),
    }
}
