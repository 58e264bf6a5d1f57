use rust_decimal::Decimal;
use thiserror::Error;

/// Validation and contract errors exposed by `marketwire-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("underlying symbol cannot be empty")]
    EmptyUnderlying,
    #[error("underlying symbol must contain only letters, found '{ch}' at index {index}")]
    UnderlyingInvalidChar { ch: char, index: usize },
    #[error("strike price must be non-negative: {value}")]
    NegativeStrike { value: Decimal },
    #[error("strike price {value} exceeds the encodable maximum of 99999.999")]
    StrikeOutOfRange { value: Decimal },
    #[error("options ticker field '{field}' was never set")]
    MissingField { field: &'static str },
    #[error("'{value}' is not a valid options contract ticker")]
    NotAnOptionsTicker { value: String },

    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },
    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    DateFormat { value: String },
    #[error("date range start {from} is after end {to}")]
    InvalidDateRange { from: String, to: String },

    #[error("invalid timespan '{value}', expected one of second, minute, hour, day, week, month, quarter, year")]
    InvalidTimespan { value: String },
    #[error("invalid contract kind '{value}', expected call or put")]
    InvalidContractKind { value: String },
    #[error("invalid market '{value}', expected one of stocks, crypto, fx, otc, indices")]
    InvalidMarket { value: String },

    #[error("field '{field}' must be greater than zero")]
    ZeroValue { field: &'static str },
    #[error("limit {value} is outside the accepted range 1..={max}")]
    LimitOutOfRange { value: u32, max: u32 },
    #[error("MACD short window {short} must be below long window {long}")]
    InvalidMacdWindows { short: u32, long: u32 },
    #[error("search text cannot be empty")]
    EmptySearch,

    #[error("API key is not configured (set MARKETWIRE_API_KEY or POLYGON_API_KEY)")]
    MissingApiKey,
    #[error("invalid configuration for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

/// Errors raised when decoding an encoded options ticker.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsTickerError {
    #[error(
        "invalid options ticker '{input}': {reason}; expected O:<UNDERLYING><YYMMDD><C|P><STRIKE8>, e.g. O:SPY251219C00650000"
    )]
    Format { input: String, reason: String },

    #[error(transparent)]
    InvalidArgument(#[from] ValidationError),
}

impl OptionsTickerError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
