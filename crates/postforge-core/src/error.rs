//! Domain-level error types.

use thiserror::Error;

/// Domain errors - pipeline failures reported to the caller.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Text generation failed. The message stays generic; the cause is kept
    /// as the error source for logging.
    #[error("failed to generate post text")]
    Generation(#[source] ProviderError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Export failed: {0}")]
    Export(String),
}

/// Errors raised by a `ProviderGateway` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No credential available. Only surfaced when a call is attempted.
    #[error("Provider not configured: {0}")]
    Configuration(String),

    /// The remote service answered with a non-success status.
    #[error("Provider API error ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("Provider request failed: {0}")]
    Transport(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Provider returned no image payload")]
    MissingImage,
}

impl ProviderError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, ProviderError::Configuration(_))
    }
}

/// Post store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O failed: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
