//! API credentials for Poloniex private endpoints
//!
//! Implements HMAC-SHA512 signing as required by the trading API.
//!
//! # Security
//!
//! Secrets are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha512;

use crate::error::{AuthError, AuthResult};

type HmacSha512 = Hmac<Sha512>;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "POLONIEX_API_KEY";

/// Environment variable holding the secret
pub const SECRET_ENV: &str = "POLONIEX_SECRET";

/// API key and secret pair
///
/// The secret is only ever used as an HMAC key; it is never transmitted.
pub struct Credentials {
    /// API key (sent in the `Key` header)
    api_key: String,
    /// Secret (zeroized on drop)
    secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// No format validation is performed on either value.
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `POLONIEX_API_KEY` and `POLONIEX_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let secret = std::env::var(SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(SECRET_ENV.to_string()))?;

        Ok(Self::new(api_key, secret))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the secret
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// Sign a payload with this secret
    ///
    /// Returns the lowercase hex HMAC-SHA512 digest.
    pub fn sign(&self, payload: &str) -> AuthResult<String> {
        sign_payload(self.secret.expose_secret().as_bytes(), payload)
    }
}

/// HMAC-SHA512 of `payload` keyed by `secret`, rendered as lowercase hex
pub fn sign_payload(secret: &[u8], payload: &str) -> AuthResult<String> {
    let mut mac =
        HmacSha512::new_from_slice(secret).map_err(|e| AuthError::InvalidSecret(e.to_string()))?;
    mac.update(payload.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretString::from(self.secret.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &redact_key(&self.api_key))
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Keep the first 8 characters of a key for log output
pub(crate) fn redact_key(api_key: &str) -> String {
    format!("{}...", api_key.chars().take(8).collect::<String>())
}
