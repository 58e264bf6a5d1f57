//! CLI argument definitions for marketwire.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ticker encode` | Build an `O:` options ticker from its parts (offline) |
//! | `ticker decode` | Split an `O:` options ticker into its parts (offline) |
//! | `aggs` | Aggregate bars for a stock or option |
//! | `prev-close` | Previous day bar |
//! | `last-trade` | Most recent trade |
//! | `snapshot` | Stock or option contract snapshot |
//! | `contracts` | List options contracts |
//! | `chain` | Options chain snapshot for an underlying |
//! | `tickers` | Search reference tickers |
//! | `ticker-details` | Reference details for one ticker |
//! | `market-status` | Current market status |
//! | `news` | Recent news articles |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `-v`, `--verbose` | off | Log transport activity to stderr |
//! | `--timeout-ms` | config | Per-attempt request timeout |
//!
//! Network commands read `MARKETWIRE_API_KEY` (or `POLYGON_API_KEY`).
//!
//! # Examples
//!
//! ```bash
//! marketwire ticker encode --underlying SPY --expiration 2025-12-19 --kind call --strike 650
//! marketwire ticker decode O:SPY251219C00650000 --pretty
//! marketwire aggs AAPL --from 2024-01-02 --to 2024-01-31 --timespan day
//! marketwire chain SPY --kind put --strike-min 600 --limit 50 --format table
//! ```

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// marketwire - stocks, options and reference market data from the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "marketwire",
    author,
    version,
    about = "Market-data REST client with an options ticker codec"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace). Overrides MARKETWIRE_LOG.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Per-attempt request timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary followed by the data block.
    Table,
    /// Single JSON object.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode or decode options tickers without calling the API.
    #[command(subcommand)]
    Ticker(TickerCommand),

    /// Aggregate (OHLCV) bars over a date range.
    ///
    ///   marketwire aggs AAPL --from 2024-01-02 --to 2024-01-31
    ///   marketwire aggs O:SPY251219C00650000 --timespan hour --from 2025-12-01 --to 2025-12-05
    Aggs(AggsArgs),

    /// Previous trading day bar.
    PrevClose(TickerArgs),

    /// Most recent trade for a stock or option contract.
    LastTrade(TickerArgs),

    /// Current snapshot; `O:` tickers return the option contract snapshot.
    Snapshot(TickerArgs),

    /// List options contracts.
    Contracts(ContractsArgs),

    /// Options chain snapshot for an underlying.
    Chain(ChainArgs),

    /// Search reference tickers.
    Tickers(TickersArgs),

    /// Reference details for one ticker.
    TickerDetails(SymbolArgs),

    /// Current market status.
    MarketStatus,

    /// Recent news, optionally for one ticker.
    News(NewsArgs),
}

#[derive(Debug, Subcommand)]
pub enum TickerCommand {
    /// Build an options ticker from its components.
    Encode(EncodeArgs),
    /// Split an options ticker into its components.
    Decode(DecodeArgs),
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Underlying root symbol, letters only (e.g. SPY).
    #[arg(long)]
    pub underlying: String,

    /// Expiration date (YYYY-MM-DD).
    #[arg(long)]
    pub expiration: String,

    /// Contract kind: call or put.
    #[arg(long)]
    pub kind: String,

    /// Strike price, at most three decimals are encoded.
    #[arg(long)]
    pub strike: String,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Encoded ticker (e.g. O:SPY251219C00650000).
    pub ticker: String,
}

#[derive(Debug, Args)]
pub struct TickerArgs {
    /// Stock symbol or `O:` options ticker.
    pub ticker: String,
}

#[derive(Debug, Args)]
pub struct SymbolArgs {
    /// Stock symbol.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct AggsArgs {
    /// Stock symbol or `O:` options ticker.
    pub ticker: String,

    /// First date (YYYY-MM-DD), inclusive.
    #[arg(long)]
    pub from: String,

    /// Last date (YYYY-MM-DD), inclusive.
    #[arg(long)]
    pub to: String,

    /// Window size (second, minute, hour, day, week, month, quarter, year).
    #[arg(long, default_value = "day")]
    pub timespan: String,

    /// Number of timespans per bar.
    #[arg(long, default_value_t = 1)]
    pub multiplier: u32,

    /// Return prices not adjusted for splits.
    #[arg(long, default_value_t = false)]
    pub unadjusted: bool,

    /// Maximum number of base aggregates.
    #[arg(long)]
    pub limit: Option<u32>,

    /// Newest bars first.
    #[arg(long, default_value_t = false)]
    pub desc: bool,
}

#[derive(Debug, Args)]
pub struct ContractsArgs {
    /// Underlying symbol.
    #[arg(long)]
    pub underlying: Option<String>,

    /// Contract kind: call or put.
    #[arg(long)]
    pub kind: Option<String>,

    /// Exact expiration date (YYYY-MM-DD).
    #[arg(long)]
    pub expiration: Option<String>,

    /// Minimum strike price.
    #[arg(long)]
    pub strike_min: Option<String>,

    /// Maximum strike price.
    #[arg(long)]
    pub strike_max: Option<String>,

    /// Include expired contracts.
    #[arg(long, default_value_t = false)]
    pub expired: bool,

    #[arg(long)]
    pub limit: Option<u32>,

    /// Resume from a cursor returned in a previous warning.
    #[arg(long)]
    pub cursor: Option<String>,
}

#[derive(Debug, Args)]
pub struct ChainArgs {
    /// Underlying symbol.
    pub underlying: String,

    /// Contract kind: call or put.
    #[arg(long)]
    pub kind: Option<String>,

    /// Exact expiration date (YYYY-MM-DD).
    #[arg(long)]
    pub expiration: Option<String>,

    /// Minimum strike price.
    #[arg(long)]
    pub strike_min: Option<String>,

    /// Maximum strike price.
    #[arg(long)]
    pub strike_max: Option<String>,

    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub cursor: Option<String>,
}

#[derive(Debug, Args)]
pub struct TickersArgs {
    /// Free-text search over ticker and name.
    #[arg(long)]
    pub search: Option<String>,

    /// Market: stocks, crypto, fx, otc, indices.
    #[arg(long)]
    pub market: Option<String>,

    /// Ticker type code (e.g. CS, ETF).
    #[arg(long = "type")]
    pub ticker_type: Option<String>,

    /// Include delisted tickers.
    #[arg(long, default_value_t = false)]
    pub inactive: bool,

    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub cursor: Option<String>,
}

#[derive(Debug, Args)]
pub struct NewsArgs {
    /// Only articles mentioning this symbol.
    #[arg(long)]
    pub ticker: Option<String>,

    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub cursor: Option<String>,
}
