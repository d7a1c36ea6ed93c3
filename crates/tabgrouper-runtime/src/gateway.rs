//! AI gateway: prompt construction, chunk dispatch, response validation.

use std::sync::Arc;
use std::time::Duration;

use futures::{stream, StreamExt};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use tabgrouper_config::TABS_PLACEHOLDER;
use tabgrouper_protocols::error::ProviderError;
use tabgrouper_protocols::provider::CompletionBackend;
use tabgrouper_protocols::types::{AiProvider, StatusUpdate, Suggestion, TabRecord};

use crate::error::ChunkError;
use crate::validate::{strip_code_fence, validate_suggestions};

/// Selects a concrete completion backend for a provider and credential.
///
/// Implemented by the wiring crate, which knows the provider extensions.
pub trait BackendFactory: Send + Sync {
    fn backend(&self, provider: AiProvider, api_key: &str) -> Arc<dyn CompletionBackend>;
}

/// Dispatch tuning for AI gateway calls.
#[derive(Debug, Clone)]
pub struct GatewayOptions {
    /// Maximum in-flight chunk requests. 1 reproduces strictly sequential
    /// dispatch.
    pub concurrency: usize,

    /// Per-call deadline; an elapsed call marks its chunk as failed.
    pub timeout: Duration,
}

impl Default for GatewayOptions {
    fn default() -> Self {
        Self {
            concurrency: 1,
            timeout: Duration::from_secs(120),
        }
    }
}

/// What happened to one chunk.
#[derive(Debug)]
pub struct ChunkOutcome {
    /// Zero-based position of the chunk in dispatch order.
    pub index: usize,
    /// The tabs that were submitted in this chunk.
    pub tabs: Vec<TabRecord>,
    pub result: Result<Vec<Suggestion>, ChunkError>,
}

#[derive(Serialize)]
struct PromptTab<'a> {
    id: i64,
    title: &'a str,
    url: &'a str,
}

/// Substitute the serialized tab list into the prompt template at its
/// placeholder.
pub fn build_prompt(template: &str, tabs: &[TabRecord]) -> String {
    let data: Vec<PromptTab<'_>> = tabs
        .iter()
        .map(|tab| PromptTab {
            id: tab.id.0,
            title: &tab.title,
            url: &tab.url,
        })
        .collect();
    let json = serde_json::to_string_pretty(&data).expect("tab list serializes to JSON");
    template.replacen(TABS_PLACEHOLDER, &json, 1)
}

/// Per-chunk AI invocation with response validation.
pub struct AiGateway {
    backend: Arc<dyn CompletionBackend>,
    options: GatewayOptions,
}

impl AiGateway {
    pub fn new(backend: Arc<dyn CompletionBackend>, options: GatewayOptions) -> Self {
        Self { backend, options }
    }

    /// Submit one chunk and return its validated suggestions.
    pub async fn suggest_for_chunk(
        &self,
        model: &str,
        template: &str,
        tabs: &[TabRecord],
    ) -> Result<Vec<Suggestion>, ChunkError> {
        let prompt = build_prompt(template, tabs);
        debug!(
            backend = self.backend.id(),
            model,
            tabs = tabs.len(),
            "requesting grouping suggestions"
        );

        let completion =
            match tokio::time::timeout(self.options.timeout, self.backend.complete(model, &prompt))
                .await
            {
                Ok(result) => result.map_err(ChunkError::Service)?,
                Err(_) => {
                    return Err(ChunkError::Service(ProviderError::Timeout(
                        self.options.timeout.as_secs(),
                    )));
                }
            };

        let payload = strip_code_fence(&completion);
        let value: serde_json::Value = serde_json::from_str(payload)
            .map_err(|e| ChunkError::Service(ProviderError::MalformedResponse(e.to_string())))?;

        Ok(validate_suggestions(&value)?)
    }

    /// Submit all chunks with bounded concurrency and collect every outcome
    /// in dispatch order. No retry; a failed chunk is final for the run.
    pub async fn dispatch(
        &self,
        model: &str,
        template: &str,
        chunks: Vec<Vec<TabRecord>>,
        status: Option<&broadcast::Sender<StatusUpdate>>,
    ) -> Vec<ChunkOutcome> {
        let total = chunks.len();
        let concurrency = self.options.concurrency.max(1);

        stream::iter(chunks.into_iter().enumerate().map(|(index, tabs)| {
            async move {
                if let Some(tx) = status {
                    let _ = tx.send(StatusUpdate::info(format!(
                        "Processing batch {} of {} ({} tabs)...",
                        index + 1,
                        total,
                        tabs.len()
                    )));
                }

                let result = self.suggest_for_chunk(model, template, &tabs).await;
                if let Err(error) = &result {
                    warn!(chunk = index + 1, %error, "chunk failed");
                }
                ChunkOutcome {
                    index,
                    tabs,
                    result,
                }
            }
        }))
        .buffered(concurrency)
        .collect()
        .await
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
