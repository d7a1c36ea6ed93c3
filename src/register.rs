//! Provider backend selection.

use std::sync::Arc;

use tracing::debug;

use tabgrouper_config::Settings;
use tabgrouper_protocols::browser::TabSurface;
use tabgrouper_protocols::provider::CompletionBackend;
use tabgrouper_protocols::types::AiProvider;
use tabgrouper_provider_gemini::GeminiBackend;
use tabgrouper_provider_openrouter::OpenRouterBackend;
use tabgrouper_runtime::{BackendFactory, GroupingSession};

/// Maps each supported [`AiProvider`] to its production backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderSelector;

impl BackendFactory for ProviderSelector {
    fn backend(&self, provider: AiProvider, api_key: &str) -> Arc<dyn CompletionBackend> {
        debug!("Selecting backend for provider: {}", provider);
        match provider {
            AiProvider::Gemini => Arc::new(GeminiBackend::new(api_key.to_string())),
            AiProvider::OpenRouter => Arc::new(OpenRouterBackend::new(api_key.to_string())),
        }
    }
}

/// Build a session against the production provider backends.
pub fn new_session(surface: Arc<dyn TabSurface>, settings: Settings) -> GroupingSession {
    GroupingSession::new(surface, Arc::new(ProviderSelector), settings)
}
