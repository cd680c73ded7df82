//! Error types for authentication operations

/// Errors that can occur while preparing a signed request
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No API key configured
    #[error("Missing API key")]
    MissingApiKey,

    /// No secret configured
    #[error("Missing secret")]
    MissingSecret,

    /// Secret could not be used as an HMAC key
    #[error("Invalid secret: {0}")]
    InvalidSecret(String),

    /// Parameters could not be form-encoded
    #[error("Failed to encode parameters: {0}")]
    Encode(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

impl AuthError {
    /// Check if this error is caused by absent credentials
    pub fn is_missing_credentials(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::MissingSecret)
    }
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
