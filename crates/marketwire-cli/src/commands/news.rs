use marketwire_core::{MarketDataClient, NewsRequest, SortOrder, Symbol};

use crate::cli::NewsArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn run(args: &NewsArgs, client: &MarketDataClient) -> Result<CommandResult, CliError> {
    let mut request = match &args.ticker {
        Some(ticker) => NewsRequest::for_ticker(Symbol::parse(ticker)?),
        None => NewsRequest::new(),
    }
    .with_order(SortOrder::Desc)
    .with_sort("published_utc");

    if let Some(limit) = args.limit {
        request = request.with_limit(limit);
    }
    if let Some(cursor) = &args.cursor {
        request = request.with_cursor(cursor.as_str());
    }

    let response = client.reference().news(&request).await?;
    Ok(CommandResult::ok(serde_json::to_value(&response)?).with_page_hint(&response))
}
