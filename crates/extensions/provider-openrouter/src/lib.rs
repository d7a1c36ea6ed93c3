//! # Tabgrouper Provider - OpenRouter
//!
//! OpenRouter completion backend for Tabgrouper.

mod backend;
mod client;
mod types;

pub use backend::OpenRouterBackend;
pub use types::*;
