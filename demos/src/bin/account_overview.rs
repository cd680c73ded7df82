//! Demo 2: Account Overview
//!
//! Showcases: signed trading endpoints, concurrent private calls
//!
//! Requires POLONIEX_API_KEY and POLONIEX_SECRET.
//!
//! Run: cargo run --bin account_overview

use colored::*;
use poloniex_rest::{exchange_error, Account, Poloniex, RestError, ALL_MARKETS};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = match Poloniex::from_env() {
        Ok(client) => client,
        Err(RestError::EnvVarNotSet(var)) => {
            println!("{} {} is not set", "✗".red(), var);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let trading = client.trading();

    let balances = trading.return_balances().await?;
    if let Some(message) = exchange_error(&balances) {
        println!("{} {}", "✗".red(), message);
        return Ok(());
    }

    println!("{}", "  Non-zero balances".bold());
    if let Some(map) = balances.as_object() {
        for (currency, amount) in map {
            let amount = amount
                .as_str()
                .and_then(|s| Decimal::from_str(s).ok())
                .unwrap_or_default();
            if !amount.is_zero() {
                println!("  {:<8} {:>20}", currency.yellow(), amount);
            }
        }
    }

    // Issued together; each call already holds its own nonce
    println!();
    let (orders, fees, margin) = tokio::try_join!(
        trading.return_open_orders(ALL_MARKETS),
        trading.return_fee_info(),
        trading.return_available_account_balances(Some(Account::Margin)),
    )?;

    println!("  {} {}", "Open orders:".dimmed(), count_open_orders(&orders));
    println!(
        "  {} maker {} / taker {}",
        "Fees:".dimmed(),
        fees.get("makerFee").and_then(Value::as_str).unwrap_or("-"),
        fees.get("takerFee").and_then(Value::as_str).unwrap_or("-"),
    );
    println!("  {} {}", "Margin account:".dimmed(), margin);

    Ok(())
}

fn count_open_orders(orders: &Value) -> usize {
    orders
        .as_object()
        .map(|markets| markets.values().filter_map(Value::as_array).map(Vec::len).sum())
        .unwrap_or(0)
}
