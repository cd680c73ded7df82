//! Error types for REST API operations

use poloniex_auth::AuthError;

/// Errors that can occur during REST API operations
///
/// Exchange-reported errors (a JSON body such as `{"error": "..."}`) are not
/// represented here: they decode successfully and are returned to the caller
/// as-is. See [`crate::types::exchange_error`].
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed (DNS, connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("Decode error: {source}")]
    Decode {
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
        /// Leading bytes of the body, for diagnostics
        body_prefix: String,
    },

    /// Missing API key or secret for a trading endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Request could not be signed
    #[error("Auth error: {0}")]
    Auth(AuthError),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

impl From<AuthError> for RestError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingApiKey | AuthError::MissingSecret => Self::AuthRequired,
            AuthError::Encode(msg) => Self::InvalidParameter(msg),
            AuthError::EnvVarNotSet(var) => Self::EnvVarNotSet(var),
            other => Self::Auth(other),
        }
    }
}

impl RestError {
    /// Build a decode error, keeping a short prefix of the offending body
    pub(crate) fn decode(source: serde_json::Error, body: &[u8]) -> Self {
        let body_prefix = String::from_utf8_lossy(&body[..body.len().min(128)]).into_owned();
        Self::Decode { source, body_prefix }
    }

    /// Check if the failure happened in the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Check if the response body could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Check if this error was caused by absent credentials
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired)
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
