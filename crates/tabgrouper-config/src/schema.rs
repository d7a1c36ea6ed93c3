//! Settings schema and defaults.

use serde::{Deserialize, Serialize};

use tabgrouper_protocols::types::AiProvider;

use crate::error::ConfigError;

/// Substitution marker the prompt template must contain exactly once.
pub const TABS_PLACEHOLDER: &str = "{tabs_placeholder}";

/// Default prompt sent to the AI backend when the user has not supplied one.
pub const DEFAULT_GROUPING_PROMPT: &str = r#"SYSTEM INSTRUCTION: You are an extremely precise and reliable browser tab organization assistant. Your sole output must be a perfectly formatted JSON array according to the specified schema, with absolutely no deviations, extraneous text, or conversational remarks. Your priority is strict adherence to the output format.

PROMPT:
Analyze the following list of browser tabs, each with an ID, title, and URL. Group them based on common themes, tasks, or topics found by considering BOTH the title and the URL.

Strictly adhere to the following rules:
1.  **Grouping Logic**: Create meaningful groups for related tabs. ALL tabs provided in the input MUST be assigned to a group. If a tab does not fit into any other specific, cohesive group, it MUST be placed in a group named "Miscellaneous".
2.  **Group Naming**: Provide a concise, descriptive name for each group. The name MUST NOT exceed 5 words. The group for unclassified tabs MUST be named "Miscellaneous".
3.  **Output Format (JSON)**: The entire output MUST be a single, valid JSON array. If the model cannot directly output a root-level array, wrap it in an object with a single key "groups" (e.g., `{"groups": [...]}`). Do NOT include any text, newlines, or characters before or after the JSON.
4.  **Object Structure**: Each object within the JSON array MUST represent a group and contain EXACTLY two keys:
    *   `"name"`: A string containing the group name (e.g., "Development Tools", "Miscellaneous").
    *   `"tabIds"`: An array of the actual numeric `id` values (from the input). These values MUST be integers, NOT strings (e.g., `[101, 102, 103]`, not `["101", "102"]`).
5.  **Edge Cases**:
    *   If the input list of tabs is empty, the output MUST be an empty JSON array: [].
    *   If all tabs are placed into the "Miscellaneous" group, this is acceptable.

Tabs to group:
{tabs_placeholder}"#;

/// User configuration for a grouping run.
///
/// Loaded once per run and immutable within it. Field names map onto the
/// keys the options UI persists (apiKey, aiProvider, modelName,
/// groupingPrompt, groupingSensitivity, exclusionPatterns,
/// disableNotifications, debugMode).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// API credential for the selected provider.
    pub api_key: Option<String>,

    /// Which AI backend to use.
    pub provider: Option<AiProvider>,

    /// Model identifier as stored; providers canonicalize it themselves.
    pub model: Option<String>,

    /// Custom prompt template; must contain [`TABS_PLACEHOLDER`].
    pub grouping_prompt: Option<String>,

    /// Minimum eligible tab count for a run to proceed (1..=10).
    #[serde(default = "default_sensitivity")]
    pub grouping_sensitivity: u32,

    /// Regex sources; tabs whose URL matches any pattern are skipped.
    #[serde(default)]
    pub exclusion_patterns: Vec<String>,

    /// Suppress the run-complete notification.
    #[serde(default)]
    pub disable_notifications: bool,

    /// Verbose diagnostic logging.
    #[serde(default)]
    pub debug_mode: bool,
}

fn default_sensitivity() -> u32 {
    2
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            provider: None,
            model: None,
            grouping_prompt: None,
            grouping_sensitivity: default_sensitivity(),
            exclusion_patterns: Vec::new(),
            disable_notifications: false,
            debug_mode: false,
        }
    }
}

impl Settings {
    /// Check the fields a run cannot start without.
    ///
    /// A missing credential or provider is a hard stop for the whole run,
    /// surfaced to the user and not retried.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.api_key {
            Some(key) if !key.trim().is_empty() => {}
            _ => return Err(ConfigError::MissingField("api_key".to_string())),
        }
        if self.provider.is_none() {
            return Err(ConfigError::MissingField("provider".to_string()));
        }
        if !(1..=10).contains(&self.grouping_sensitivity) {
            return Err(ConfigError::InvalidValue {
                field: "grouping_sensitivity".to_string(),
                message: "must be between 1 and 10".to_string(),
            });
        }
        if let Some(prompt) = &self.grouping_prompt {
            if prompt.matches(TABS_PLACEHOLDER).count() != 1 {
                return Err(ConfigError::InvalidValue {
                    field: "grouping_prompt".to_string(),
                    message: format!("must contain {TABS_PLACEHOLDER} exactly once"),
                });
            }
        }
        Ok(())
    }

    /// The prompt template to use: custom if configured, default otherwise.
    pub fn resolved_prompt(&self) -> &str {
        self.grouping_prompt
            .as_deref()
            .unwrap_or(DEFAULT_GROUPING_PROMPT)
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
