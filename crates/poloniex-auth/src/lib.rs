//! Request signing for the Poloniex trading API
//!
//! This crate provides everything needed to authenticate a private request,
//! without doing any networking itself:
//!
//! - [`Params`]: ordered parameter mapping, form-encoded deterministically
//! - [`NonceGenerator`]: strictly increasing, lock-free nonce source
//! - [`Credentials`]: API key + secret, with the secret zeroized on drop
//! - [`Signer`]: mutable credential slot that turns a command and its
//!   parameters into a [`SignedRequest`] (body + `Key`/`Sign` header values)
//!
//! # Example
//!
//! ```
//! use poloniex_auth::{Credentials, Params, Signer};
//!
//! let signer = Signer::new(Some(Credentials::new("my-key", "my-secret")));
//! let request = signer
//!     .sign_params("returnOpenOrders", Params::new().with("currencyPair", "all"))
//!     .unwrap();
//!
//! assert!(request.body.starts_with("command=returnOpenOrders&currencyPair=all&nonce="));
//! assert_eq!(request.signature.len(), 128);
//! ```

mod credentials;
mod error;
mod nonce;
mod params;
mod signer;

pub use credentials::{sign_payload, Credentials, API_KEY_ENV, SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use nonce::NonceGenerator;
pub use params::{ParamValue, Params};
pub use signer::{SignedRequest, Signer};

// Re-exported so callers can read `Signer::secret()` without a direct dependency
pub use secrecy::{ExposeSecret, SecretString};
