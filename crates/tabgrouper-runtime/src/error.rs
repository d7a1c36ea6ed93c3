//! Runtime error taxonomy.

use thiserror::Error;

use tabgrouper_config::ConfigError;
use tabgrouper_protocols::error::{BrowserError, ProviderError, SuggestionError};

/// Fatal errors that abort an entire grouping run.
#[derive(Debug, Error)]
pub enum GroupingError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid exclusion pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("Tab query failed: {0}")]
    TabQuery(#[from] BrowserError),

    #[error("A grouping run is already in progress")]
    RunInProgress,
}

/// Failure while listing models for the options UI.
#[derive(Debug, Error)]
pub enum ModelListError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model listing failed: {0}")]
    Provider(#[from] ProviderError),
}

/// Why one chunk failed. Chunk-scoped; the run continues without it.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// Transport, HTTP, or payload-level failure of the AI service call.
    #[error("AI service call failed: {0}")]
    Service(#[from] ProviderError),

    /// The service answered, but the suggestions failed schema validation.
    #[error("AI response rejected: {0}")]
    Response(#[from] SuggestionError),
}
