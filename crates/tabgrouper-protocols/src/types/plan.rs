//! Group suggestions and the merged grouping plan.

use serde::{Deserialize, Serialize};

use super::TabId;

/// One proposed group returned by the AI backend for a chunk.
///
/// Only constructed after schema validation; `name` is trimmed and
/// non-empty, and every id was drawn from the submitted chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    #[serde(rename = "tabIds")]
    pub tab_ids: Vec<TabId>,
}

impl Suggestion {
    pub fn new(name: impl Into<String>, tab_ids: Vec<TabId>) -> Self {
        Self {
            name: name.into(),
            tab_ids,
        }
    }
}

/// One entry of a [`MergedPlan`]: a group name and the tabs assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub name: String,
    pub tab_ids: Vec<TabId>,
}

impl PlanEntry {
    pub fn new(name: impl Into<String>, tab_ids: Vec<TabId>) -> Self {
        Self {
            name: name.into(),
            tab_ids,
        }
    }
}

/// The consolidated, run-wide partition of all eligible tabs into named
/// groups. Entry order follows first occurrence of each group name across
/// the chunk suggestions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedPlan {
    entries: Vec<PlanEntry>,
}

impl MergedPlan {
    /// Reserved group name absorbing tabs from failed chunks.
    pub const MISCELLANEOUS: &'static str = "Miscellaneous";

    pub fn from_entries(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of tab assignments across all entries.
    pub fn tab_count(&self) -> usize {
        self.entries.iter().map(|e| e.tab_ids.len()).sum()
    }
}
