use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use super::dates::calendar_date;
use super::OptionsTickerBuilder;
use crate::{OptionsTickerError, ValidationError};

const PREFIX: &str = "O:";
const DATE_DIGITS: usize = 6;
const STRIKE_DIGITS: usize = 8;
const STRIKE_SCALE: u32 = 3;
const MAX_STRIKE_THOUSANDTHS: u64 = 99_999_999;

/// Whether a contract is a call or a put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractKind {
    Call,
    Put,
}

impl ContractKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }

    /// Single-letter code used inside encoded tickers.
    pub const fn code(self) -> char {
        match self {
            Self::Call => 'C',
            Self::Put => 'P',
        }
    }

    const fn from_code(code: u8) -> Option<Self> {
        match code {
            b'C' => Some(Self::Call),
            b'P' => Some(Self::Put),
            _ => None,
        }
    }
}

impl Display for ContractKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(Self::Call),
            "put" | "p" => Ok(Self::Put),
            other => Err(ValidationError::InvalidContractKind {
                value: other.to_owned(),
            }),
        }
    }
}

/// Values that can serve as an expiration. Time-of-day is dropped.
pub trait IntoExpirationDate {
    fn into_expiration_date(self) -> Date;
}

impl IntoExpirationDate for Date {
    fn into_expiration_date(self) -> Date {
        self
    }
}

impl IntoExpirationDate for PrimitiveDateTime {
    fn into_expiration_date(self) -> Date {
        self.date()
    }
}

impl IntoExpirationDate for OffsetDateTime {
    fn into_expiration_date(self) -> Date {
        self.date()
    }
}

/// Identifier of a single listed options contract.
///
/// Encodes to and decodes from the OCC-style ticker used by the upstream API:
///
/// ```text
/// O:<UNDERLYING><YYMMDD><C|P><STRIKE8>
/// ```
///
/// where `STRIKE8` is the strike multiplied by 1000 and left-padded to eight
/// digits. The two-digit year is always read back as `20YY`.
///
/// ```rust
/// use marketwire_core::{ContractKind, OptionsTicker};
/// use rust_decimal::Decimal;
///
/// let ticker = OptionsTicker::parse("O:UBER220121C00050000").unwrap();
/// assert_eq!(ticker.underlying(), "UBER");
/// assert_eq!(ticker.kind(), ContractKind::Call);
/// assert_eq!(ticker.strike(), Decimal::from(50));
/// assert_eq!(ticker.to_string(), "O:UBER220121C00050000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionsTicker {
    underlying: String,
    expiration: Date,
    kind: ContractKind,
    strike: Decimal,
}

impl OptionsTicker {
    /// Validates the components and builds a ticker.
    ///
    /// The underlying is uppercased; any time component of `expiration` is
    /// discarded.
    pub fn new(
        underlying: &str,
        expiration: impl IntoExpirationDate,
        kind: ContractKind,
        strike: Decimal,
    ) -> Result<Self, ValidationError> {
        let underlying = normalize_underlying(underlying)?;

        if strike < Decimal::ZERO {
            return Err(ValidationError::NegativeStrike { value: strike });
        }
        if strike_thousandths(strike).is_none() {
            return Err(ValidationError::StrikeOutOfRange { value: strike });
        }

        Ok(Self {
            underlying,
            expiration: expiration.into_expiration_date(),
            kind,
            strike: strike.normalize(),
        })
    }

    pub fn builder() -> OptionsTickerBuilder {
        OptionsTickerBuilder::default()
    }

    /// Strictly decodes an encoded ticker.
    pub fn parse(input: &str) -> Result<Self, OptionsTickerError> {
        let body = input
            .strip_prefix(PREFIX)
            .ok_or_else(|| OptionsTickerError::format(input, "missing 'O:' prefix"))?;

        let letters = body
            .bytes()
            .take_while(|byte| byte.is_ascii_alphabetic())
            .count();
        if letters == 0 {
            return Err(OptionsTickerError::format(
                input,
                "missing alphabetic underlying symbol",
            ));
        }

        let (underlying, tail) = body.split_at(letters);
        let tail = tail.as_bytes();
        let expected = DATE_DIGITS + 1 + STRIKE_DIGITS;
        if tail.len() != expected {
            return Err(OptionsTickerError::format(
                input,
                format!(
                    "expected {expected} characters after the underlying, found {}",
                    tail.len()
                ),
            ));
        }

        let (date_digits, tail) = tail.split_at(DATE_DIGITS);
        let (kind_code, strike_digits) = tail.split_at(1);

        let yymmdd = parse_digits(date_digits).ok_or_else(|| {
            OptionsTickerError::format(input, "expiration must be six digits (YYMMDD)")
        })?;
        let kind = ContractKind::from_code(kind_code[0])
            .ok_or_else(|| OptionsTickerError::format(input, "contract kind must be 'C' or 'P'"))?;
        let thousandths = parse_digits(strike_digits)
            .ok_or_else(|| OptionsTickerError::format(input, "strike must be eight digits"))?;

        // YYMMDD fits in u64 with six digits, so the casts below cannot truncate.
        let year = 2000 + (yymmdd / 10_000) as i32;
        let month = (yymmdd / 100 % 100) as u8;
        let day = (yymmdd % 100) as u8;
        let expiration = calendar_date(year, month, day).map_err(|_| {
            OptionsTickerError::format(
                input,
                format!("{year:04}-{month:02}-{day:02} is not a valid calendar date"),
            )
        })?;

        let strike = Decimal::from_i128_with_scale(i128::from(thousandths), STRIKE_SCALE);
        Ok(Self::new(underlying, expiration, kind, strike)?)
    }

    /// Decodes without an error path; `None` means the input was rejected.
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Encodes the ticker as `O:<UNDERLYING><YYMMDD><C|P><STRIKE8>`.
    pub fn encode(&self) -> String {
        let thousandths = strike_thousandths(self.strike).unwrap_or(MAX_STRIKE_THOUSANDTHS);
        format!(
            "{PREFIX}{}{:02}{:02}{:02}{}{:08}",
            self.underlying,
            self.expiration.year().rem_euclid(100),
            u8::from(self.expiration.month()),
            self.expiration.day(),
            self.kind.code(),
            thousandths
        )
    }

    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    pub const fn expiration(&self) -> Date {
        self.expiration
    }

    pub const fn kind(&self) -> ContractKind {
        self.kind
    }

    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    pub fn is_call(&self) -> bool {
        self.kind == ContractKind::Call
    }

    pub fn is_put(&self) -> bool {
        self.kind == ContractKind::Put
    }
}

fn normalize_underlying(input: &str) -> Result<String, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::EmptyUnderlying);
    }

    if let Some((index, ch)) = input
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_alphabetic())
    {
        return Err(ValidationError::UnderlyingInvalidChar { ch, index });
    }

    Ok(input.to_ascii_uppercase())
}

/// Strike in thousandths of a unit, or `None` when it does not fit eight digits.
fn strike_thousandths(strike: Decimal) -> Option<u64> {
    let scaled = strike.checked_mul(Decimal::ONE_THOUSAND)?.round();
    scaled
        .to_u64()
        .filter(|value| *value <= MAX_STRIKE_THOUSANDTHS)
}

fn parse_digits(bytes: &[u8]) -> Option<u64> {
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(
        bytes
            .iter()
            .fold(0_u64, |acc, byte| acc * 10 + u64::from(byte - b'0')),
    )
}

impl Display for OptionsTicker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for OptionsTicker {
    type Err = OptionsTickerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for OptionsTicker {
    type Error = OptionsTickerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for OptionsTicker {
    type Error = OptionsTickerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<OptionsTicker> for String {
    fn from(value: OptionsTicker) -> Self {
        value.encode()
    }
}
