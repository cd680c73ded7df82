//! Trading endpoints for order management
//!
//! These endpoints require authentication. Every call is a
//! `POST <base>/tradingApi` whose form body carries the command, a nonce and
//! the command's parameters, signed with HMAC-SHA512 of that exact body.

use futures::FutureExt;
use poloniex_auth::{Credentials, Params, SecretString, SignedRequest, Signer};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, debug_span, Instrument};

use crate::error::RestResult;
use crate::http::{failed, read_json, ApiFuture};
use crate::types::{MoveOrderOptions, OrderOptions};

/// Header carrying the API key
pub const KEY_HEADER: &str = "Key";

/// Header carrying the signature
pub const SIGN_HEADER: &str = "Sign";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Authenticated trading client
///
/// Clones share the same credentials and nonce sequence.
#[derive(Debug, Clone)]
pub struct TradingClient {
    client: Client,
    url: String,
    signer: Arc<Signer>,
}

impl TradingClient {
    pub(crate) fn new(client: Client, base_url: &str, credentials: Option<Credentials>) -> Self {
        Self {
            client,
            url: format!("{}/tradingApi", base_url),
            signer: Arc::new(Signer::new(credentials)),
        }
    }

    /// Endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    // ========================================================================
    // Credentials
    // ========================================================================

    /// Current API key
    pub fn api_key(&self) -> Option<String> {
        self.signer.api_key()
    }

    /// Current secret
    pub fn secret(&self) -> Option<SecretString> {
        self.signer.secret()
    }

    /// Replace the API key used by subsequent calls
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.signer.set_api_key(api_key);
    }

    /// Replace the secret used by subsequent calls
    pub fn set_secret(&self, secret: impl Into<String>) {
        self.signer.set_secret(secret);
    }

    /// Replace both API key and secret at once
    pub fn set_credentials(&self, credentials: Credentials) {
        self.signer.set_credentials(credentials);
    }

    /// Whether both API key and secret are configured
    pub fn has_credentials(&self) -> bool {
        self.signer.has_credentials()
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Build the signed request for `command` without sending it
    pub fn prepare(&self, command: &str, params: Params) -> RestResult<SignedRequest> {
        Ok(self.signer.sign_params(command, params)?)
    }

    /// Issue an arbitrary trading command
    ///
    /// The request is signed before this returns, so calls issued back to
    /// back carry increasing nonces in issue order.
    pub fn command(&self, command: &str, params: Params) -> ApiFuture {
        let request = match self.prepare(command, params) {
            Ok(request) => request,
            Err(e) => return failed(e),
        };

        let client = self.client.clone();
        let url = self.url.clone();
        let span = debug_span!("poloniex.trading", command = %command, nonce = request.nonce);

        async move {
            debug!("Sending trading request");
            let response = client
                .post(&url)
                .header(KEY_HEADER, request.api_key)
                .header(SIGN_HEADER, request.signature)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(request.body)
                .send()
                .await?;

            read_json(response).await
        }
        .instrument(span)
        .boxed()
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Open orders for a market, or for all markets with `"all"`
    pub fn return_open_orders(&self, currency_pair: &str) -> ApiFuture {
        self.command(
            "returnOpenOrders",
            Params::new().with("currencyPair", currency_pair),
        )
    }

    /// Own trade history for a market, or for all markets with `"all"`
    ///
    /// Without a range the exchange limits results to one day; without a
    /// `limit` to 500 entries (maximum 10,000).
    pub fn return_trade_history(
        &self,
        currency_pair: &str,
        start: Option<u64>,
        end: Option<u64>,
        limit: Option<u32>,
    ) -> ApiFuture {
        self.command(
            "returnTradeHistory",
            Params::new()
                .with("currencyPair", currency_pair)
                .with_opt("start", start)
                .with_opt("end", end)
                .with_opt("limit", limit),
        )
    }

    /// All trades involving an order
    pub fn return_order_trades(&self, order_number: u64) -> ApiFuture {
        self.command(
            "returnOrderTrades",
            Params::new().with("orderNumber", order_number),
        )
    }

    /// Place a limit buy order
    pub fn buy(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
        options: OrderOptions,
    ) -> ApiFuture {
        self.command("buy", order_params(currency_pair, rate, amount, options))
    }

    /// Place a limit sell order
    pub fn sell(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
        options: OrderOptions,
    ) -> ApiFuture {
        self.command("sell", order_params(currency_pair, rate, amount, options))
    }

    /// Cancel an order
    pub fn cancel_order(&self, order_number: u64) -> ApiFuture {
        self.command("cancelOrder", Params::new().with("orderNumber", order_number))
    }

    /// Atomically cancel an order and place a new one of the same type at `rate`
    pub fn move_order(&self, order_number: u64, rate: Decimal, options: MoveOrderOptions) -> ApiFuture {
        self.command(
            "moveOrder",
            Params::new()
                .with("orderNumber", order_number)
                .with("rate", rate)
                .with_opt("amount", options.amount)
                .with_opt("postOnly", options.post_only)
                .with_opt("immediateOrCancel", options.immediate_or_cancel),
        )
    }
}

fn order_params(currency_pair: &str, rate: Decimal, amount: Decimal, options: OrderOptions) -> Params {
    Params::new()
        .with("currencyPair", currency_pair)
        .with("rate", rate)
        .with("amount", amount)
        .with("fillOrKill", options.fill_or_kill)
        .with("immediateOrCancel", options.immediate_or_cancel)
        .with("postOnly", options.post_only)
}
