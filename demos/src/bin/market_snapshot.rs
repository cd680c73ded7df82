//! Demo 1: Market Snapshot
//!
//! Showcases: public endpoints, concurrent requests, passthrough JSON
//!
//! Run: cargo run --bin market_snapshot -- BTC_ETH

use colored::*;
use poloniex_rest::{exchange_error, ChartPeriod, Poloniex};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pair = std::env::args().nth(1).unwrap_or_else(|| "BTC_ETH".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  MARKET SNAPSHOT: {}", pair).cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = Poloniex::new()?;
    let public = client.public();

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let day_ago = now.saturating_sub(86_400);

    let (ticker, book, candles) = tokio::try_join!(
        public.return_ticker(),
        public.return_order_book(&pair, 5),
        public.return_chart_data(&pair, day_ago, now, ChartPeriod::H2),
    )?;

    for (label, value) in [("ticker", &ticker), ("order book", &book), ("candles", &candles)] {
        if let Some(message) = exchange_error(value) {
            println!("{} {} rejected: {}", "✗".red(), label, message);
            return Ok(());
        }
    }

    if let Some(entry) = ticker.get(&pair) {
        println!("  {} {}", "LAST:".yellow(), field(entry, "last"));
        println!("  {} {}", "BID: ".yellow(), field(entry, "highestBid"));
        println!("  {} {}", "ASK: ".yellow(), field(entry, "lowestAsk"));
        println!("  {} {}", "24h: ".yellow(), field(entry, "percentChange"));
    } else {
        println!("{} {} not in ticker", "✗".red(), pair);
    }

    println!();
    println!("{}", "  Top of book".bold());
    let asks = book["asks"].as_array().cloned().unwrap_or_default();
    let bids = book["bids"].as_array().cloned().unwrap_or_default();
    for (ask, bid) in asks.iter().zip(bids.iter()) {
        println!(
            "  {:>14} {:>14}   │ {:>14} {:>14}",
            level(bid, 0),
            level(bid, 1),
            level(ask, 0),
            level(ask, 1)
        );
    }

    println!();
    let count = candles.as_array().map(Vec::len).unwrap_or(0);
    println!("{} {} two-hour candles over the last day", "✓".green(), count);

    Ok(())
}

fn field<'a>(entry: &'a Value, name: &str) -> &'a str {
    entry.get(name).and_then(Value::as_str).unwrap_or("-")
}

fn level(entry: &Value, index: usize) -> String {
    match &entry[index] {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
