use marketwire_core::{AggregatesRequest, MarketDataClient, SortOrder, Ticker, Timespan};

use crate::cli::AggsArgs;
use crate::error::CliError;

use super::{parse_date, parse_ticker, CommandResult};

pub async fn run(args: &AggsArgs, client: &MarketDataClient) -> Result<CommandResult, CliError> {
    let mut request = AggregatesRequest::new(
        parse_ticker(&args.ticker)?,
        args.multiplier,
        args.timespan.parse::<Timespan>()?,
        parse_date(&args.from)?,
        parse_date(&args.to)?,
    );
    if args.unadjusted {
        request = request.with_adjusted(false);
    }
    if args.desc {
        request = request.with_sort(SortOrder::Desc);
    }
    if let Some(limit) = args.limit {
        request = request.with_limit(limit);
    }

    let response = match &request.ticker {
        Ticker::Option(_) => client.options().aggregates(&request).await?,
        Ticker::Symbol(_) => client.stocks().aggregates(&request).await?,
    };

    let mut result = CommandResult::ok(serde_json::to_value(&response)?).with_page_hint(&response);
    if response.results.is_empty() {
        result = result.with_warning(format!(
            "no bars returned for {} between {} and {}",
            request.ticker, args.from, args.to
        ));
    }
    Ok(result)
}
