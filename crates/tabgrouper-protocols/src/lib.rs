//! # Tabgrouper Protocols
//!
//! Core protocol definitions for the tab grouping pipeline.
//! Contains the data model, error taxonomy, and the capability traits
//! the pipeline is built against - no implementations.
//!
//! ## Core Traits
//!
//! - [`TabSurface`] - Browser tab/group capability surface
//! - [`CompletionBackend`] - AI provider behind a narrow text contract
//! - [`Notifier`] - Fire-and-forget user notification hook

pub mod browser;
pub mod error;
pub mod notify;
pub mod provider;
pub mod types;

// Re-export core traits
pub use browser::TabSurface;
pub use notify::{Notifier, NullNotifier};
pub use provider::{CompletionBackend, ModelDescriptor};
pub use error::{BrowserError, ProviderError, SuggestionError};
pub use types::*;
