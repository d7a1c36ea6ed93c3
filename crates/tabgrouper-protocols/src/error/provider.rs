//! AI backend errors.
//!
//! All variants are chunk-scoped: a failing call marks that chunk as
//! failed and the run continues with whatever succeeded.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Completion contained no text payload")]
    EmptyCompletion,
}

impl ProviderError {
    /// Map an HTTP error response onto the taxonomy.
    pub fn from_api_response(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => ProviderError::AuthenticationFailed(message),
            _ => ProviderError::Api { status, message },
        }
    }
}
