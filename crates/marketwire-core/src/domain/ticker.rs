use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{OptionsTicker, Symbol};
use crate::ValidationError;

/// Any ticker accepted by the shared market-data endpoints (aggregates,
/// trades, quotes, indicators): a plain symbol or an options contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ticker {
    Symbol(Symbol),
    Option(OptionsTicker),
}

impl Ticker {
    /// `O:`-prefixed input is decoded as an options contract, anything else
    /// as a symbol.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.starts_with("O:") {
            return OptionsTicker::parse(trimmed)
                .map(Self::Option)
                .map_err(|_| ValidationError::NotAnOptionsTicker {
                    value: trimmed.to_owned(),
                });
        }
        Symbol::parse(trimmed).map(Self::Symbol)
    }

    pub fn as_option(&self) -> Option<&OptionsTicker> {
        match self {
            Self::Option(ticker) => Some(ticker),
            Self::Symbol(_) => None,
        }
    }

    pub fn is_option(&self) -> bool {
        matches!(self, Self::Option(_))
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbol(symbol) => Display::fmt(symbol, f),
            Self::Option(ticker) => Display::fmt(ticker, f),
        }
    }
}

impl From<Symbol> for Ticker {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<OptionsTicker> for Ticker {
    fn from(value: OptionsTicker) -> Self {
        Self::Option(value)
    }
}

impl TryFrom<String> for Ticker {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_prefix() {
        let option = Ticker::parse("O:SPY251219C00650000").expect("option ticker");
        assert!(option.is_option());
        assert_eq!(option.to_string(), "O:SPY251219C00650000");

        let stock = Ticker::parse("aapl").expect("symbol");
        assert_eq!(stock, Ticker::Symbol(Symbol::parse("AAPL").expect("symbol")));
        assert!(stock.as_option().is_none());
    }

    #[test]
    fn malformed_option_is_rejected() {
        assert_eq!(
            Ticker::parse("O:SPY"),
            Err(ValidationError::NotAnOptionsTicker {
                value: String::from("O:SPY")
            })
        );
    }
}
