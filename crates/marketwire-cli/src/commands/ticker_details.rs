use marketwire_core::{MarketDataClient, Symbol, TickerDetailsRequest};

use crate::cli::SymbolArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn run(args: &SymbolArgs, client: &MarketDataClient) -> Result<CommandResult, CliError> {
    let request = TickerDetailsRequest::new(Symbol::parse(&args.symbol)?);
    let response = client.reference().ticker_details(&request).await?;
    Ok(CommandResult::ok(serde_json::to_value(&response)?))
}
