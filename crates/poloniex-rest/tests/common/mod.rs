//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use hmac::{Hmac, Mac};
use poloniex_rest::{ClientConfig, Credentials, Params, Poloniex};
use sha2::Sha512;
use std::collections::BTreeMap;
use wiremock::{MockServer, Request};

/// Sample `returnTicker` body
pub const TICKER_BODY: &str = r#"{
    "BTC_LTC": {"id": 50, "last": "0.0251", "lowestAsk": "0.02589999", "highestBid": "0.0251",
                "percentChange": "0.02390438", "baseVolume": "6.16485315", "quoteVolume": "245.82513926",
                "isFrozen": "0", "high24hr": "0.0258", "low24hr": "0.02440001"},
    "BTC_NXT": {"id": 69, "last": "0.00005730", "lowestAsk": "0.00005710", "highestBid": "0.00004903",
                "percentChange": "0.16701570", "baseVolume": "0.45347489", "quoteVolume": "9094",
                "isFrozen": "0", "high24hr": "0.00005800", "low24hr": "0.00004750"}
}"#;

/// Exchange-reported failure
pub const EXCHANGE_ERROR_BODY: &str = r#"{"error": "Invalid API key/secret pair."}"#;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer, credentials: Option<(&str, &str)>) -> Poloniex {
    let mut config = ClientConfig::new().with_base_url(server.uri()).with_timeout(5);
    if let Some((key, secret)) = credentials {
        config = config.with_credentials(Credentials::new(key, secret));
    }
    Poloniex::with_config(config).expect("client should build")
}

/// Decode a form-encoded request body
pub fn form_fields(request: &Request) -> BTreeMap<String, String> {
    let body = std::str::from_utf8(&request.body).expect("body should be UTF-8");
    Params::decode(body)
        .expect("body should be form-encoded")
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Header value as a string
pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

/// Reference HMAC-SHA512 hex signature
pub fn expected_signature(secret: &str, payload: &str) -> String {
    let mut mac = Hmac::<Sha512>::new_from_slice(secret.as_bytes()).expect("any key size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// All requests the server has seen
pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
}
