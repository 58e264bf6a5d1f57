use marketwire_core::{Comparison, MarketDataClient, OptionsContractsRequest, Symbol};

use crate::cli::ContractsArgs;
use crate::error::CliError;

use super::{parse_date, parse_kind, parse_strike, CommandResult};

pub async fn run(
    args: &ContractsArgs,
    client: &MarketDataClient,
) -> Result<CommandResult, CliError> {
    let request = build_request(args)?;
    let response = client.options().contracts(&request).await?;

    // Contracts whose ticker does not decode are still returned, flagged once each.
    let undecodable = response
        .results
        .iter()
        .filter(|contract| contract.options_ticker().is_err())
        .map(|contract| format!("contract ticker '{}' could not be decoded", contract.ticker))
        .collect::<Vec<_>>();

    let mut result = CommandResult::ok(serde_json::to_value(&response)?).with_page_hint(&response);
    for warning in undecodable {
        result = result.with_warning(warning);
    }
    Ok(result)
}

fn build_request(args: &ContractsArgs) -> Result<OptionsContractsRequest, CliError> {
    let mut request = match &args.underlying {
        Some(underlying) => OptionsContractsRequest::for_underlying(Symbol::parse(underlying)?),
        None => OptionsContractsRequest::new(),
    };

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
    if args.expired {
        request = request.with_expired(true);
    }
    if let Some(limit) = args.limit {
        request = request.with_limit(limit);
    }
    if let Some(cursor) = &args.cursor {
        request = request.with_cursor(cursor.as_str());
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use marketwire_core::ApiRequest;

    use super::*;

    #[test]
    fn flags_map_to_query_filters() {
        let args = ContractsArgs {
            underlying: Some(String::from("spy")),
            kind: Some(String::from("put")),
            expiration: Some(String::from("2025-12-19")),
            strike_min: Some(String::from("600")),
            strike_max: None,
            expired: false,
            limit: Some(25),
            cursor: None,
        };

        let request = build_request(&args).expect("valid flags");

        assert_eq!(
            request.query().encode(),
            "underlying_ticker=SPY&contract_type=put&expiration_date=2025-12-19\
             &strike_price.gte=600&limit=25"
        );
    }
}
