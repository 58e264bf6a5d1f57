use marketwire_core::{Market, MarketDataClient, TickersRequest};

use crate::cli::TickersArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn run(args: &TickersArgs, client: &MarketDataClient) -> Result<CommandResult, CliError> {
    let mut request = TickersRequest::new();
    if let Some(search) = &args.search {
        request = request.with_search(search.as_str());
    }
    if let Some(market) = &args.market {
        request = request.with_market(market.parse::<Market>()?);
    }
    if let Some(ticker_type) = &args.ticker_type {
        request = request.with_type(ticker_type.as_str());
    }
    if args.inactive {
        request = request.with_active(false);
    }
    if let Some(limit) = args.limit {
        request = request.with_limit(limit);
    }
    if let Some(cursor) = &args.cursor {
        request = request.with_cursor(cursor.as_str());
    }

    let response = client.reference().tickers(&request).await?;
    Ok(CommandResult::ok(serde_json::to_value(&response)?).with_page_hint(&response))
}
