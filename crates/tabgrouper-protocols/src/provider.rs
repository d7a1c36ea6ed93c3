//! AI completion backend protocol.
//!
//! Providers connect to AI APIs (Gemini, OpenRouter) behind one narrow
//! text-in/text-out contract; the gateway owns parsing and validation of
//! the returned payload.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// A model available from a provider, as shown in the options UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Provider-side model identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl ModelDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Core trait for AI completion backends.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Returns the backend ID.
    fn id(&self) -> &str;

    /// List models usable for content generation.
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, ProviderError>;

    /// Send one prompt and return the raw text payload of the completion.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError>;
}
