use anyhow::{Context, Result};
use time::format_description::well_known::Rfc3339;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use trade_journal::config::Config;
use trade_journal::journal::normalize_all;
use trade_journal::reporting::JournalReport;
use trade_journal::source;

const USAGE: &str = "usage: trade-journal <trades.json | http(s)://journal-host> [--json]";

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::new(Rfc3339))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let location = args.iter().find(|a| !a.starts_with("--")).context(USAGE)?;

    let mut trades_source = source::from_location(location, cfg.api_token.clone());
    info!("Loading trades from {}", trades_source.describe());
    let records = trades_source.fetch_trades().await?;

    let trades = normalize_all(&records);
    let analytics = cfg.analytics();
    let report = JournalReport::build(&trades, &analytics);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_summary();
    }

    Ok(())
}
