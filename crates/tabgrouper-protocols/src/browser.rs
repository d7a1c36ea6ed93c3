//! Browser tab/group capability surface.
//!
//! The raw tab and group manipulation primitives live outside this core;
//! the host binds them to its extension API. Everything the pipeline does
//! to live browser state goes through this trait.

use async_trait::async_trait;

use crate::error::BrowserError;
use crate::types::{GroupId, TabId, TabRecord};

/// Abstract tab/group manipulation surface consumed by the pipeline.
#[async_trait]
pub trait TabSurface: Send + Sync {
    /// Enumerate tabs, optionally restricted to one window.
    async fn query(&self, window_id: Option<i64>) -> Result<Vec<TabRecord>, BrowserError>;

    /// Look up a single tab. Fails with [`BrowserError::TabNotFound`] if it
    /// no longer exists.
    async fn get(&self, tab: TabId) -> Result<TabRecord, BrowserError>;

    /// Create a new group containing exactly the given tabs and return its
    /// handle.
    async fn group(
        &self,
        tabs: &[TabId],
        window_id: Option<i64>,
    ) -> Result<GroupId, BrowserError>;

    /// Add tabs to an existing group.
    async fn add_to_group(&self, group: GroupId, tabs: &[TabId]) -> Result<(), BrowserError>;

    /// Remove the given tabs from whatever groups they are in.
    async fn ungroup(&self, tabs: &[TabId]) -> Result<(), BrowserError>;

    /// Move a tab to a position in its window's tab strip.
    async fn move_tab(&self, tab: TabId, index: u32) -> Result<(), BrowserError>;

    /// Set a group's display title.
    async fn set_group_title(&self, group: GroupId, title: &str) -> Result<(), BrowserError>;

    /// Delete a group. Callers tolerate [`BrowserError::GroupNotFound`] as
    /// "already gone".
    async fn remove_group(&self, group: GroupId) -> Result<(), BrowserError>;
}
