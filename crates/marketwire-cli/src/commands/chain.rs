use marketwire_core::{Comparison, MarketDataClient, OptionsChainRequest, Symbol};

use crate::cli::ChainArgs;
use crate::error::CliError;

use super::{parse_date, parse_kind, parse_strike, CommandResult};

pub async fn run(args: &ChainArgs, client: &MarketDataClient) -> Result<CommandResult, CliError> {
    let mut request = OptionsChainRequest::new(Symbol::parse(&args.underlying)?);

    if let Some(kind) = &args.kind {
        request = request.with_contract_type(parse_kind(kind)?);
    }
    if let Some(expiration) = &args.expiration {
        request = request.with_expiration(Comparison::Eq, parse_date(expiration)?);
    }
    if let Some(strike) = &args.strike_min {
        request = request.with_strike(Comparison::Gte, parse_strike("strike-min", strike)?);
    }
    if let Some(strike) = &args.strike_max {
        request = request.with_strike(Comparison::Lte, parse_strike("strike-max", strike)?);
    }
    if let Some(limit) = args.limit {
        request = request.with_limit(limit);
    }
    if let Some(cursor) = &args.cursor {
        request = request.with_cursor(cursor.as_str());
    }

    let response = client.options().chain(&request).await?;
    Ok(CommandResult::ok(serde_json::to_value(&response)?).with_page_hint(&response))
}
