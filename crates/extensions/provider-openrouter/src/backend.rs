//! OpenRouter completion backend.

use async_trait::async_trait;
use tracing::debug;

use tabgrouper_protocols::error::ProviderError;
use tabgrouper_protocols::provider::{CompletionBackend, ModelDescriptor};

use crate::client::OpenRouterClient;
use crate::types::ChatCompletionRequest;

/// OpenRouter completion backend.
pub struct OpenRouterBackend {
    client: OpenRouterClient,
}

impl OpenRouterBackend {
    /// Create a backend against the production endpoint.
    pub fn new(api_key: String) -> Self {
        Self {
            client: OpenRouterClient::new(api_key),
        }
    }

    /// Create a backend against a custom endpoint.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: OpenRouterClient::with_base_url(api_key, base_url),
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenRouterBackend {
    fn id(&self) -> &str {
        "openrouter"
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, ProviderError> {
        let response = self.client.list_models().await?;
        Ok(response
            .data
            .into_iter()
            .map(|model| {
                let name = model.name.unwrap_or_else(|| model.id.clone());
                ModelDescriptor::new(model.id, name)
            })
            .collect())
    }

    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        debug!("OpenRouter complete: model={}", model);

        let request = ChatCompletionRequest::from_prompt(model, prompt);
        let response = self.client.chat_completion(&request).await?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or(ProviderError::EmptyCompletion)
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
