//! Margin trading endpoints
//!
//! These endpoints require authentication.

use poloniex_auth::Params;
use rust_decimal::Decimal;

use super::TradingClient;
use crate::http::ApiFuture;

impl TradingClient {
    /// Summary of the margin account
    pub fn return_margin_account_summary(&self) -> ApiFuture {
        self.command("returnMarginAccountSummary", Params::new())
    }

    /// Place a margin buy order, optionally capping the lending rate
    pub fn margin_buy(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
        lending_rate: Option<Decimal>,
    ) -> ApiFuture {
        self.command(
            "marginBuy",
            margin_order_params(currency_pair, rate, amount, lending_rate),
        )
    }

    /// Place a margin sell order; parameters as for [`margin_buy`](Self::margin_buy)
    pub fn margin_sell(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
        lending_rate: Option<Decimal>,
    ) -> ApiFuture {
        self.command(
            "marginSell",
            margin_order_params(currency_pair, rate, amount, lending_rate),
        )
    }

    /// Margin position in a market, or in all markets with `"all"`
    pub fn get_margin_position(&self, currency_pair: &str) -> ApiFuture {
        self.command(
            "getMarginPosition",
            Params::new().with("currencyPair", currency_pair),
        )
    }

    /// Close the margin position in a market with a market order
    pub fn close_margin_position(&self, currency_pair: &str) -> ApiFuture {
        self.command(
            "closeMarginPosition",
            Params::new().with("currencyPair", currency_pair),
        )
    }
}

fn margin_order_params(
    currency_pair: &str,
    rate: Decimal,
    amount: Decimal,
    lending_rate: Option<Decimal>,
) -> Params {
    Params::new()
        .with("currencyPair", currency_pair)
        .with("rate", rate)
        .with("amount", amount)
        .with_opt("lendingRate", lending_rate)
}
