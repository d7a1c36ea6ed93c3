//! Schema validation errors for AI grouping suggestions.
//!
//! A validation failure rejects the entire chunk; no partial salvage.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuggestionError {
    #[error("AI response is not a JSON array")]
    NotAnArray,

    #[error("group at position {0} is not a JSON object")]
    NotAnObject(usize),

    #[error("group at position {0} is missing a non-empty 'name' string")]
    MissingName(usize),

    #[error("group '{0}' is missing a 'tabIds' array")]
    MissingTabIds(String),

    #[error("group '{group}' contains a non-integer tab id: {value}")]
    NonIntegerTabId { group: String, value: String },
}
