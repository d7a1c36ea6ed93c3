//! # Tabgrouper
//!
//! AI-assisted browser tab grouping. Given a tab surface (the host's view
//! of tabs and groups) and an API credential, a [`GroupingSession`] fetches
//! the open tabs, asks an AI backend to organize them, applies the
//! suggested groups, and can undo the whole operation.
//!
//! This crate wires the pieces together: it selects the concrete provider
//! backend for the configured [`AiProvider`] and re-exports the public
//! surface of the workspace crates.

mod register;
mod telemetry;

pub use register::{new_session, ProviderSelector};
pub use telemetry::init_tracing;

pub use tabgrouper_config::{
    ConfigError, Settings, SettingsLoader, DEFAULT_GROUPING_PROMPT, TABS_PLACEHOLDER,
};
pub use tabgrouper_protocols::browser::TabSurface;
pub use tabgrouper_protocols::error::{BrowserError, ProviderError, SuggestionError};
pub use tabgrouper_protocols::notify::{Notifier, NullNotifier};
pub use tabgrouper_protocols::provider::{CompletionBackend, ModelDescriptor};
pub use tabgrouper_protocols::types::{
    AiProvider, GroupId, MergedPlan, StatusUpdate, TabId, TabRecord, UndoSnapshot,
};
pub use tabgrouper_runtime::{
    handle_request, status_event, undo_state_event, BackendFactory, ChunkError, GatewayOptions,
    GroupingError, GroupingSession, RestoreReport, RunOutcome, UiRequest, UiResponse, UndoOutcome,
};
