//! REST API client for the Poloniex cryptocurrency exchange
//!
//! This crate provides an async client for both halves of the Poloniex HTTP
//! API: public market data and authenticated trading.
//!
//! # Features
//!
//! - **Market Data**: Ticker, 24h volume, order book, trade history, candlesticks,
//!   currencies, loan orders
//! - **Account**: Balances, deposit addresses, deposit/withdrawal history, fees,
//!   transfers between accounts
//! - **Trading**: Buy, sell, cancel and move orders, withdrawals
//! - **Margin**: Margin orders, positions and account summary
//! - **Lending**: Loan offers, active loans, lending history
//!
//! Responses are returned as decoded [`serde_json::Value`]s, untouched.
//!
//! # Authentication
//!
//! Trading endpoints sign the form-encoded body with HMAC-SHA512 keyed by the
//! secret, sending the API key and hex signature in the `Key` and `Sign`
//! headers. Each call carries a nonce that is strictly greater than any
//! previous nonce from the same client; it is drawn when the method is
//! called, before the returned future is first polled.
//!
//! # Example
//!
//! ```no_run
//! use poloniex_rest::{OrderOptions, Poloniex};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = Poloniex::new()?;
//!     let book = client.public().return_order_book("BTC_ETH", 10).await?;
//!     println!("BTC_ETH: {}", book);
//!
//!     // Trading endpoints (auth required)
//!     let auth_client = Poloniex::from_env()?;
//!     let order = auth_client
//!         .trading()
//!         .buy("BTC_ETH", dec!(0.03), dec!(1), OrderOptions::new().post_only())
//!         .await?;
//!
//!     if let Some(message) = poloniex_rest::exchange_error(&order) {
//!         eprintln!("Rejected: {}", message);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failures
//!
//! Transport failures and non-JSON bodies are returned as [`RestError`].
//! Exchange-reported errors arrive as successful results; there are no
//! retries, rate limiting or caching.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, Poloniex, DEFAULT_BASE_URL};
pub use endpoints::{PublicClient, TradingClient};
pub use error::{RestError, RestResult};
pub use http::ApiFuture;
pub use types::{exchange_error, Account, ChartPeriod, MoveOrderOptions, OrderOptions, ALL_MARKETS};

// Re-export auth types used in the public API
pub use poloniex_auth::{Credentials, ExposeSecret, ParamValue, Params, SecretString, SignedRequest};
