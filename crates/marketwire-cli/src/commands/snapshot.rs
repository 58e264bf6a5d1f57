use marketwire_core::{MarketDataClient, Ticker};

use crate::cli::TickerArgs;
use crate::error::CliError;

use super::{parse_ticker, CommandResult};

pub async fn run(args: &TickerArgs, client: &MarketDataClient) -> Result<CommandResult, CliError> {
    let data = match parse_ticker(&args.ticker)? {
        Ticker::Option(contract) => serde_json::to_value(client.options().snapshot(&contract).await?)?,
        Ticker::Symbol(symbol) => serde_json::to_value(client.stocks().snapshot(&symbol).await?)?,
    };

    Ok(CommandResult::ok(data))
}
