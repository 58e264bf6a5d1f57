//! # Domain Types
//!
//! Validated value types shared by requests, responses and the CLI.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`OptionsTicker`] | Options contract identifier with its `O:` ticker codec |
//! | [`OptionsTickerBuilder`] | Incremental assembly of an [`OptionsTicker`] |
//! | [`ContractKind`] | Call or put |
//! | [`Symbol`] | Validated stock/index/crypto/forex ticker |
//! | [`Ticker`] | Either a [`Symbol`] or an [`OptionsTicker`] |
//! | [`Timespan`] | Aggregate window size |
//!
//! All types validate on construction, so a value that exists is valid:
//!
//! ```rust
//! use marketwire_core::{ContractKind, OptionsTicker, ValidationError};
//! use rust_decimal::Decimal;
//! use time::{Date, Month};
//!
//! let expiration = Date::from_calendar_date(2022, Month::January, 21).unwrap();
//! let err = OptionsTicker::new("SP1", expiration, ContractKind::Call, Decimal::ONE);
//! assert!(matches!(err, Err(ValidationError::UnderlyingInvalidChar { .. })));
//! ```

mod dates;
mod options_ticker;
mod options_ticker_builder;
mod symbol;
mod ticker;
mod timespan;

pub use dates::{calendar_date, format_iso_date, parse_iso_date};
pub use options_ticker::{ContractKind, IntoExpirationDate, OptionsTicker};
pub use options_ticker_builder::OptionsTickerBuilder;
pub use symbol::Symbol;
pub use ticker::Ticker;
pub use timespan::Timespan;
