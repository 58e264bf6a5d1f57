use marketwire_core::MarketDataClient;

use crate::error::CliError;

use super::CommandResult;

pub async fn run(client: &MarketDataClient) -> Result<CommandResult, CliError> {
    let status = client.reference().market_status().await?;
    Ok(CommandResult::ok(serde_json::to_value(&status)?))
}
