//! Public market data endpoints
//!
//! These endpoints don't require authentication. Each one is a single
//! `GET <base>/public?command=<name>&...` request.

use futures::FutureExt;
use poloniex_auth::Params;
use reqwest::Client;
use tracing::{debug, debug_span, Instrument};

use crate::http::{failed, read_json, ApiFuture};
use crate::types::ChartPeriod;

/// Public market data client
#[derive(Debug, Clone)]
pub struct PublicClient {
    client: Client,
    url: String,
}

impl PublicClient {
    pub(crate) fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}/public", base_url),
        }
    }

    /// Endpoint URL without query string
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build the full request URL for `command`
    pub fn command_url(&self, command: &str, params: &Params) -> crate::RestResult<String> {
        let mut url = format!("{}?{}", self.url, encode_command(command)?);

        if !params.is_empty() {
            url.push('&');
            url.push_str(&params.encode()?);
        }

        Ok(url)
    }

    /// Issue an arbitrary public command
    pub fn get(&self, command: &str, params: Params) -> ApiFuture {
        let url = match self.command_url(command, &params) {
            Ok(url) => url,
            Err(e) => return failed(e),
        };

        let client = self.client.clone();
        let span = debug_span!("poloniex.public", command = %command);

        async move {
            debug!("Sending public request");
            let response = client.get(&url).send().await?;
            read_json(response).await
        }
        .instrument(span)
        .boxed()
    }

    /// Ticker for all markets
    pub fn return_ticker(&self) -> ApiFuture {
        self.get("returnTicker", Params::new())
    }

    /// 24-hour volume for all markets, plus totals for primary currencies
    pub fn return_24h_volume(&self) -> ApiFuture {
        self.get("return24hVolume", Params::new())
    }

    /// Order book for a market
    ///
    /// `currency_pair` may be [`ALL_MARKETS`](crate::types::ALL_MARKETS) to
    /// get the books of every market.
    pub fn return_order_book(&self, currency_pair: &str, depth: u32) -> ApiFuture {
        self.get(
            "returnOrderBook",
            Params::new()
                .with("currencyPair", currency_pair)
                .with("depth", depth),
        )
    }

    /// Public trade history for a market
    ///
    /// Without a range the exchange returns the last 200 trades; with `start`
    /// and `end` (UNIX seconds) up to 50,000 trades in that range.
    pub fn return_trade_history(
        &self,
        currency_pair: &str,
        start: Option<u64>,
        end: Option<u64>,
    ) -> ApiFuture {
        self.get(
            "returnTradeHistory",
            Params::new()
                .with("currencyPair", currency_pair)
                .with_opt("start", start)
                .with_opt("end", end),
        )
    }

    /// Candlestick data between `start` and `end` (UNIX seconds)
    pub fn return_chart_data(
        &self,
        currency_pair: &str,
        start: u64,
        end: u64,
        period: ChartPeriod,
    ) -> ApiFuture {
        self.get(
            "returnChartData",
            Params::new()
                .with("currencyPair", currency_pair)
                .with("start", start)
                .with("end", end)
                .with("period", period),
        )
    }

    /// Currency metadata
    pub fn return_currencies(&self) -> ApiFuture {
        self.get("returnCurrencies", Params::new())
    }

    /// Loan offers and demands for a currency
    pub fn return_loan_orders(&self, currency: &str) -> ApiFuture {
        self.get("returnLoanOrders", Params::new().with("currency", currency))
    }
}

fn encode_command(command: &str) -> crate::RestResult<String> {
    serde_urlencoded::to_string([("command", command)])
        .map_err(|e| crate::RestError::InvalidParameter(e.to_string()))
}
