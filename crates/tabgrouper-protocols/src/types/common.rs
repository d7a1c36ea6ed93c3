//! Shared enums and status types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported AI backend providers.
///
/// Serialized forms match the values the options UI persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiProvider {
    Gemini,
    OpenRouter,
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiProvider::Gemini => write!(f, "Gemini"),
            AiProvider::OpenRouter => write!(f, "OpenRouter"),
        }
    }
}

impl FromStr for AiProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gemini" => Ok(AiProvider::Gemini),
            "OpenRouter" => Ok(AiProvider::OpenRouter),
            other => Err(format!("unsupported AI provider: {other}")),
        }
    }
}

/// Progress message emitted during a grouping run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub text: String,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl StatusUpdate {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_roundtrip() {
        assert_eq!("Gemini".parse::<AiProvider>().unwrap(), AiProvider::Gemini);
        assert_eq!(
            "OpenRouter".parse::<AiProvider>().unwrap(),
            AiProvider::OpenRouter
        );
        assert_eq!(AiProvider::Gemini.to_string(), "Gemini");
    }

    #[test]
    fn test_provider_unknown() {
        assert!("Claude".parse::<AiProvider>().is_err());
    }

    #[test]
    fn test_provider_serde_matches_display() {
        let json = serde_json::to_string(&AiProvider::OpenRouter).unwrap();
        assert_eq!(json, "\"OpenRouter\"");
    }

    #[test]
    fn test_status_update_serialization() {
        let update = StatusUpdate::error("boom");
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["text"], "boom");
        assert_eq!(json["isError"], true);
    }
}
