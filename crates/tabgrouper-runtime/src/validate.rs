//! Schema validation of AI grouping suggestions.

use serde_json::Value;

use tabgrouper_protocols::error::SuggestionError;
use tabgrouper_protocols::types::{Suggestion, TabId};

/// Strip a markdown code fence wrapping the payload, if present.
///
/// Models regularly answer with ```` ```json ... ``` ```` despite the
/// prompt asking for bare JSON.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

/// Validate a parsed AI response against the suggestion schema.
///
/// Accepts either a top-level array or the `{"groups": [...]}` wrapper the
/// default prompt permits. Rejects any group without a non-empty string
/// name, without a `tabIds` array, or with a non-integer tab id. A failure
/// rejects the whole chunk.
pub fn validate_suggestions(value: &Value) -> Result<Vec<Suggestion>, SuggestionError> {
    // Unwrap the single-key {"groups": [...]} form.
    let value = match value.as_object() {
        Some(map) if map.len() == 1 => map.get("groups").unwrap_or(value),
        _ => value,
    };

    let groups = value.as_array().ok_or(SuggestionError::NotAnArray)?;

    let mut suggestions = Vec::with_capacity(groups.len());
    for (position, group) in groups.iter().enumerate() {
        let object = group
            .as_object()
            .ok_or(SuggestionError::NotAnObject(position))?;

        let name = object
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(SuggestionError::MissingName(position))?;

        let ids = object
            .get("tabIds")
            .and_then(Value::as_array)
            .ok_or_else(|| SuggestionError::MissingTabIds(name.to_string()))?;

        let mut tab_ids = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id
                .as_i64()
                .ok_or_else(|| SuggestionError::NonIntegerTabId {
                    group: name.to_string(),
                    value: id.to_string(),
                })?;
            tab_ids.push(TabId(id));
        }

        suggestions.push(Suggestion::new(name, tab_ids));
    }

    Ok(suggestions)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
