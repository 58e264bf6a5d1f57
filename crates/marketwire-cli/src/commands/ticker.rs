use marketwire_core::{format_iso_date, ContractKind, OptionsTicker};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::{DecodeArgs, EncodeArgs, TickerCommand};
use crate::error::CliError;

use super::{parse_date, parse_kind, parse_strike, CommandResult};

#[derive(Debug, Serialize)]
struct TickerParts {
    ticker: String,
    underlying: String,
    expiration: String,
    kind: ContractKind,
    strike: Decimal,
}

impl From<&OptionsTicker> for TickerParts {
    fn from(ticker: &OptionsTicker) -> Self {
        Self {
            ticker: ticker.encode(),
            underlying: ticker.underlying().to_owned(),
            expiration: format_iso_date(ticker.expiration()),
            kind: ticker.kind(),
            strike: ticker.strike(),
        }
    }
}

pub fn run(command: &TickerCommand) -> Result<CommandResult, CliError> {
    let ticker = match command {
        TickerCommand::Encode(args) => encode(args)?,
        TickerCommand::Decode(args) => decode(args)?,
    };

    let mut result = CommandResult::ok(serde_json::to_value(TickerParts::from(&ticker))?);
    if ticker.strike().scale() > 3 {
        result = result.with_warning(format!(
            "strike {} has more than three decimals and was rounded in the encoded ticker",
            ticker.strike()
        ));
    }
    Ok(result)
}

fn encode(args: &EncodeArgs) -> Result<OptionsTicker, CliError> {
    let ticker = OptionsTicker::builder()
        .underlying(args.underlying.as_str())
        .expiration(parse_date(&args.expiration)?)
        .kind(parse_kind(&args.kind)?)
        .strike(parse_strike("strike", &args.strike)?)
        .build()?;
    Ok(ticker)
}

fn decode(args: &DecodeArgs) -> Result<OptionsTicker, CliError> {
    Ok(OptionsTicker::parse(args.ticker.trim())?)
}
