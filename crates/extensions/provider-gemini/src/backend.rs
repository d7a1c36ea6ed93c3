//! Gemini completion backend.

use async_trait::async_trait;
use tracing::debug;

use tabgrouper_protocols::error::ProviderError;
use tabgrouper_protocols::provider::{CompletionBackend, ModelDescriptor};

use crate::client::GeminiClient;
use crate::types::GenerateContentRequest;

/// Gemini completion backend.
pub struct GeminiBackend {
    client: GeminiClient,
}

impl GeminiBackend {
    /// Create a backend against the production endpoint.
    pub fn new(api_key: String) -> Self {
        Self {
            client: GeminiClient::new(api_key),
        }
    }

    /// Create a backend against a custom endpoint.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: GeminiClient::with_base_url(api_key, base_url),
        }
    }

    /// Canonicalize a stored model identifier to exactly one `models/`
    /// prefix. Stored settings may carry a doubled prefix from older
    /// versions, or a bare model name.
    fn normalize_model_id(model: &str) -> String {
        let mut id = model.trim();
        while let Some(stripped) = id.strip_prefix("models/models/") {
            id = stripped;
        }
        let id = id.strip_prefix("models/").unwrap_or(id);
        format!("models/{id}")
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    fn id(&self) -> &str {
        "gemini"
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, ProviderError> {
        let response = self.client.list_models().await?;
        Ok(response
            .models
            .into_iter()
            .filter(|model| model.supports_generation())
            .map(|model| {
                // Fall back to the bare model id when no display name is set.
                let name = model.display_name.clone().unwrap_or_else(|| {
                    model
                        .name
                        .rsplit('/')
                        .next()
                        .unwrap_or(&model.name)
                        .to_string()
                });
                ModelDescriptor::new(model.name, name)
            })
            .collect())
    }

    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let model = Self::normalize_model_id(model);
        debug!("Gemini complete: model={}", model);

        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self.client.generate_content(&model, &request).await?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or(ProviderError::EmptyCompletion)
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
