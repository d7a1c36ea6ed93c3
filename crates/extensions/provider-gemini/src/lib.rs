//! # Tabgrouper Provider - Gemini
//!
//! Google Gemini completion backend for Tabgrouper.

mod backend;
mod client;
mod types;

pub use backend::GeminiBackend;
pub use types::*;
