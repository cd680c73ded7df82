//! Request signer for the trading API
//!
//! Holds the (mutable) credential pair and the nonce source of one trading
//! client. Building a signed request is fully synchronous: the credentials are
//! read once, the nonce is drawn, the body is encoded and signed, and the
//! result is handed back before any network I/O starts.

use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};
use tracing::trace;

use crate::credentials::{redact_key, sign_payload, Credentials};
use crate::error::{AuthError, AuthResult};
use crate::nonce::NonceGenerator;
use crate::params::Params;

/// Credential slot; either half may be absent for public-only usage
#[derive(Default)]
struct Slot {
    api_key: Option<String>,
    secret: Option<SecretString>,
}

/// A request ready to be sent
#[derive(Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Value of the `Key` header
    pub api_key: String,
    /// Form-encoded body, byte-identical to what was signed
    pub body: String,
    /// Value of the `Sign` header
    pub signature: String,
    /// Nonce embedded in the body
    pub nonce: u64,
}

impl std::fmt::Debug for SignedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedRequest")
            .field("api_key", &redact_key(&self.api_key))
            .field("body", &self.body)
            .field("nonce", &self.nonce)
            .finish_non_exhaustive()
    }
}

/// Signs trading requests with the current credentials
pub struct Signer {
    slot: RwLock<Slot>,
    nonces: NonceGenerator,
}

impl Signer {
    /// Create a signer, optionally with credentials
    pub fn new(credentials: Option<Credentials>) -> Self {
        let slot = match credentials {
            Some(creds) => Slot {
                api_key: Some(creds.api_key().to_string()),
                secret: Some(SecretString::from(creds.secret().expose_secret().to_string())),
            },
            None => Slot::default(),
        };

        Self {
            slot: RwLock::new(slot),
            nonces: NonceGenerator::new(),
        }
    }

    /// Current API key
    pub fn api_key(&self) -> Option<String> {
        self.slot.read().api_key.clone()
    }

    /// Current secret
    pub fn secret(&self) -> Option<SecretString> {
        self.slot
            .read()
            .secret
            .as_ref()
            .map(|s| SecretString::from(s.expose_secret().to_string()))
    }

    /// Replace the API key; requests signed afterwards use the new value
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.slot.write().api_key = Some(api_key.into());
    }

    /// Replace the secret; requests signed afterwards use the new value
    pub fn set_secret(&self, secret: impl Into<String>) {
        self.slot.write().secret = Some(SecretString::from(secret.into()));
    }

    /// Replace both halves under a single lock
    pub fn set_credentials(&self, credentials: Credentials) {
        let mut slot = self.slot.write();
        slot.api_key = Some(credentials.api_key().to_string());
        slot.secret = Some(SecretString::from(credentials.secret().expose_secret().to_string()));
    }

    /// Whether both the API key and the secret are set
    pub fn has_credentials(&self) -> bool {
        let slot = self.slot.read();
        slot.api_key.is_some() && slot.secret.is_some()
    }

    /// The nonce source backing this signer
    pub fn nonces(&self) -> &NonceGenerator {
        &self.nonces
    }

    /// Add `command` and a fresh `nonce` to `params`, encode and sign
    pub fn sign_params(&self, command: &str, mut params: Params) -> AuthResult<SignedRequest> {
        let slot = self.slot.read();
        let api_key = slot.api_key.as_ref().ok_or(AuthError::MissingApiKey)?;
        let secret = slot.secret.as_ref().ok_or(AuthError::MissingSecret)?;

        let nonce = self.nonces.generate();
        params.insert("command", command);
        params.insert("nonce", nonce);

        let body = params.encode()?;
        let signature = sign_payload(secret.expose_secret().as_bytes(), &body)?;

        trace!(command, nonce, "Signed trading request");

        Ok(SignedRequest {
            api_key: api_key.clone(),
            body,
            signature,
            nonce,
        })
    }
}

impl Default for Signer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = self.slot.read();
        f.debug_struct("Signer")
            .field("api_key", &slot.api_key.as_deref().map(redact_key))
            .field("has_secret", &slot.secret.is_some())
            .field("last_nonce", &self.nonces.last())
            .finish()
    }
}
