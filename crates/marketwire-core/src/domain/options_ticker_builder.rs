use rust_decimal::Decimal;
use time::Date;

use super::dates::calendar_date;
use super::{ContractKind, IntoExpirationDate, OptionsTicker};
use crate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingExpiration {
    Date(Date),
    Calendar { year: i32, month: u8, day: u8 },
}

/// Step-by-step assembly of an [`OptionsTicker`].
///
/// Setters never fail; every rule is checked once by [`build`](Self::build),
/// which goes through [`OptionsTicker::new`]. Building leaves the builder
/// untouched so it can be tweaked and built again; call [`reset`](Self::reset)
/// to start over.
///
/// ```rust
/// use marketwire_core::OptionsTicker;
/// use rust_decimal::Decimal;
///
/// let mut builder = OptionsTicker::builder();
/// builder
///     .underlying("spy")
///     .expiration_ymd(2025, 12, 19)
///     .call()
///     .strike(Decimal::from(650));
///
/// assert_eq!(builder.build_string().unwrap(), "O:SPY251219C00650000");
///
/// builder.put();
/// assert_eq!(builder.build_string().unwrap(), "O:SPY251219P00650000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsTickerBuilder {
    underlying: Option<String>,
    expiration: Option<PendingExpiration>,
    kind: Option<ContractKind>,
    strike: Option<Decimal>,
}

impl OptionsTickerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn underlying(&mut self, underlying: impl Into<String>) -> &mut Self {
        self.underlying = Some(underlying.into());
        self
    }

    pub fn expiration(&mut self, expiration: impl IntoExpirationDate) -> &mut Self {
        self.expiration = Some(PendingExpiration::Date(expiration.into_expiration_date()));
        self
    }

    /// Sets the expiration from calendar components; an impossible date is
    /// reported by `build`.
    pub fn expiration_ymd(&mut self, year: i32, month: u8, day: u8) -> &mut Self {
        self.expiration = Some(PendingExpiration::Calendar { year, month, day });
        self
    }

    pub fn kind(&mut self, kind: ContractKind) -> &mut Self {
        self.kind = Some(kind);
        self
    }

    pub fn call(&mut self) -> &mut Self {
        self.kind(ContractKind::Call)
    }

    pub fn put(&mut self) -> &mut Self {
        self.kind(ContractKind::Put)
    }

    pub fn strike(&mut self, strike: Decimal) -> &mut Self {
        self.strike = Some(strike);
        self
    }

    pub fn build(&self) -> Result<OptionsTicker, ValidationError> {
        // A blank builder reports the same error as an empty symbol.
        let underlying = self.underlying.as_deref().unwrap_or_default();
        if underlying.trim().is_empty() {
            return Err(ValidationError::EmptyUnderlying);
        }

        let expiration = match self.expiration {
            Some(PendingExpiration::Date(date)) => Some(date),
            Some(PendingExpiration::Calendar { year, month, day }) => {
                Some(calendar_date(year, month, day)?)
            }
            None => None,
        };

        OptionsTicker::new(
            underlying,
            expiration.ok_or(ValidationError::MissingField {
                field: "expiration",
            })?,
            self.kind
                .ok_or(ValidationError::MissingField { field: "kind" })?,
            self.strike
                .ok_or(ValidationError::MissingField { field: "strike" })?,
        )
    }

    pub fn build_string(&self) -> Result<String, ValidationError> {
        self.build().map(|ticker| ticker.encode())
    }

    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }
}
