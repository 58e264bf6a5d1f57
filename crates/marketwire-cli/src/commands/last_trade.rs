use marketwire_core::{MarketDataClient, Ticker};

use crate::cli::TickerArgs;
use crate::error::CliError;

use super::{parse_ticker, CommandResult};

pub async fn run(args: &TickerArgs, client: &MarketDataClient) -> Result<CommandResult, CliError> {
    let response = match parse_ticker(&args.ticker)? {
        Ticker::Option(contract) => client.options().last_trade(&contract).await?,
        Ticker::Symbol(symbol) => client.stocks().last_trade(&symbol).await?,
    };

    Ok(CommandResult::ok(serde_json::to_value(&response)?))
}
