//! Tab and group handle types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle of a single browser tab.
///
/// Issued and destroyed by the external tab system; read-only to this core.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TabId(pub i64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle of a tab group.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GroupId(pub i64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A snapshot of one browser tab as reported by the tab system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabRecord {
    /// Tab identity, unique within a browser session.
    pub id: TabId,

    /// Page title.
    pub title: String,

    /// Page URL. May be empty for tabs that are still loading.
    #[serde(default)]
    pub url: String,

    /// Group membership; `None` means ungrouped.
    #[serde(default)]
    pub group_id: Option<GroupId>,

    /// Owning window.
    pub window_id: i64,

    /// Position within the window's tab strip.
    pub index: u32,

    /// Pinned tabs are never considered for grouping.
    #[serde(default)]
    pub pinned: bool,
}

impl TabRecord {
    /// Create an ungrouped, unpinned tab record.
    pub fn new(id: i64, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: TabId(id),
            title: title.into(),
            url: url.into(),
            group_id: None,
            window_id: 1,
            index: 0,
            pinned: false,
        }
    }

    /// Set the window.
    pub fn in_window(mut self, window_id: i64) -> Self {
        self.window_id = window_id;
        self
    }

    /// Set the tab strip position.
    pub fn at_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    /// Set group membership.
    pub fn grouped(mut self, group_id: GroupId) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Mark the tab as pinned.
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }
}

#[cfg(test)]
#[path = "tab_tests.rs"]
mod tests;
