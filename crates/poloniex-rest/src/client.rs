//! Facade over the public and trading clients

use poloniex_auth::Credentials;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use crate::endpoints::{PublicClient, TradingClient};
use crate::error::{RestError, RestResult};

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://poloniex.com";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Poloniex API client
///
/// Exposes the public market data operations through [`public`](Self::public)
/// and the authenticated operations through [`trading`](Self::trading). Both
/// share one connection pool.
///
/// # Example
///
/// ```no_run
/// use poloniex_rest::Poloniex;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = Poloniex::new()?;
///     let ticker = client.public().return_ticker().await?;
///
///     // With authentication for trading endpoints
///     let auth_client = Poloniex::with_credentials("api-key", "secret")?;
///     let balances = auth_client.trading().return_balances().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Poloniex {
    public: PublicClient,
    trading: TradingClient,
}

impl Poloniex {
    /// Create a client without credentials
    ///
    /// Trading calls fail with [`RestError::AuthRequired`] until credentials
    /// are set on [`trading`](Self::trading).
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with an API key and secret
    pub fn with_credentials(api_key: impl Into<String>, secret: impl Into<String>) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(Credentials::new(api_key, secret)))
    }

    /// Create a client with credentials read from `POLONIEX_API_KEY` / `POLONIEX_SECRET`
    pub fn from_env() -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(Credentials::from_env()?))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("poloniex-rest/{}", env!("CARGO_PKG_VERSION")));

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(user_agent)
            .build()?;

        let base_url = config.base_url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(RestError::InvalidParameter("empty base URL".to_string()));
        }

        info!(base_url, has_credentials = config.credentials.is_some(), "Created Poloniex client");

        Ok(Self {
            public: PublicClient::new(http_client.clone(), base_url),
            trading: TradingClient::new(http_client, base_url, config.credentials),
        })
    }

    /// Public market data operations
    pub fn public(&self) -> &PublicClient {
        &self.public
    }

    /// Authenticated trading operations
    pub fn trading(&self) -> &TradingClient {
        &self.trading
    }

    /// Split into the two clients
    pub fn into_parts(self) -> (PublicClient, TradingClient) {
        (self.public, self.trading)
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Scheme and host, without the `/public` or `/tradingApi` path
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = Poloniex::new().unwrap();
        assert!(!client.trading().has_credentials());
        assert_eq!(client.public().url(), "https://poloniex.com/public");
        assert_eq!(client.trading().url(), "https://poloniex.com/tradingApi");
    }

    #[test]
    fn test_client_with_credentials() {
        let client = Poloniex::with_credentials("K", "S").unwrap();
        assert!(client.trading().has_credentials());
        assert_eq!(client.trading().api_key().as_deref(), Some("K"));
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://127.0.0.1:8080/")
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));

        let client = Poloniex::with_config(config).unwrap();
        assert_eq!(client.public().url(), "http://127.0.0.1:8080/public");
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let result = Poloniex::with_config(ClientConfig::new().with_base_url("/"));
        assert!(matches!(result, Err(RestError::InvalidParameter(_))));
    }

    #[test]
    fn test_into_parts() {
        let (public, trading) = Poloniex::with_credentials("K", "S").unwrap().into_parts();
        assert!(public.url().ends_with("/public"));
        assert!(trading.has_credentials());
    }
}
