//! # Tabgrouper Config
//!
//! Settings schema, defaults, and loading for the grouping pipeline.
//! Settings are resolved once per grouping run and are immutable within it.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::SettingsLoader;
pub use schema::{Settings, DEFAULT_GROUPING_PROMPT, TABS_PLACEHOLDER};
