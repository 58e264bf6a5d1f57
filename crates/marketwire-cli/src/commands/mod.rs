mod aggs;
mod chain;
mod contracts;
mod last_trade;
mod market_status;
mod news;
mod prev_close;
mod snapshot;
mod ticker;
mod ticker_details;
mod tickers;

use std::str::FromStr;
use std::time::{Duration, Instant};

use marketwire_core::{
    parse_iso_date, ClientConfig, ContractKind, MarketDataClient, OptionsTicker, Paginated, Symbol,
    Ticker,
};
use rust_decimal::Decimal;
use serde_json::Value;
use time::Date;

use crate::cli::{Cli, Command};
use crate::envelope::Envelope;
use crate::error::CliError;

#[derive(Debug)]
pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Adds a warning with the resume cursor when the page is not the last one.
    pub fn with_page_hint<P: Paginated>(self, page: &P) -> Self {
        match page.next_cursor() {
            Some(cursor) => {
                self.with_warning(format!("more results available; rerun with --cursor {cursor}"))
            }
            None => self,
        }
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope, CliError> {
    let started = Instant::now();

    let result = match &cli.command {
        Command::Ticker(command) => ticker::run(command)?,
        Command::Aggs(args) => aggs::run(args, &connect(cli)?).await?,
        Command::PrevClose(args) => prev_close::run(args, &connect(cli)?).await?,
        Command::LastTrade(args) => last_trade::run(args, &connect(cli)?).await?,
        Command::Snapshot(args) => snapshot::run(args, &connect(cli)?).await?,
        Command::Contracts(args) => contracts::run(args, &connect(cli)?).await?,
        Command::Chain(args) => chain::run(args, &connect(cli)?).await?,
        Command::Tickers(args) => tickers::run(args, &connect(cli)?).await?,
        Command::TickerDetails(args) => ticker_details::run(args, &connect(cli)?).await?,
        Command::MarketStatus => market_status::run(&connect(cli)?).await?,
        Command::News(args) => news::run(args, &connect(cli)?).await?,
    };

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    Envelope::new(result.data, result.warnings, latency_ms)
}

fn connect(cli: &Cli) -> Result<MarketDataClient, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout(Duration::from_millis(timeout_ms));
    }
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "client configured");
    Ok(MarketDataClient::new(config)?)
}

/// `O:` input goes through the options codec so decode errors keep their detail.
pub(crate) fn parse_ticker(raw: &str) -> Result<Ticker, CliError> {
    let raw = raw.trim();
    if raw.starts_with("O:") {
        return Ok(Ticker::Option(OptionsTicker::parse(raw)?));
    }
    Ok(Ticker::Symbol(Symbol::parse(raw)?))
}

pub(crate) fn parse_date(raw: &str) -> Result<Date, CliError> {
    Ok(parse_iso_date(raw)?)
}

pub(crate) fn parse_strike(name: &'static str, raw: &str) -> Result<Decimal, CliError> {
    Decimal::from_str(raw.trim()).map_err(|error| CliError::invalid_argument(name, error))
}

pub(crate) fn parse_kind(raw: &str) -> Result<ContractKind, CliError> {
    Ok(ContractKind::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_tickers_keep_decode_errors() {
        let error = parse_ticker("O:SPY2512").expect_err("truncated ticker");
        assert!(matches!(error, CliError::OptionsTicker(_)));
        assert_eq!(error.exit_code(), 2);

        assert!(matches!(parse_ticker(" aapl "), Ok(Ticker::Symbol(_))));
    }

    #[test]
    fn strike_parse_failure_names_the_flag() {
        let error = parse_strike("strike-min", "six").expect_err("not a number");
        assert!(error.to_string().starts_with("invalid value for --strike-min"));
        assert_eq!(parse_strike("strike", "650.5").expect("decimal"), Decimal::new(6505, 1));
    }
}
