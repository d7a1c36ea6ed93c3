//! Reverts the most recent grouping application.

use std::sync::Arc;

use tracing::{debug, warn};

use tabgrouper_protocols::browser::TabSurface;
use tabgrouper_protocols::error::BrowserError;
use tabgrouper_protocols::types::{GroupId, TabId, UndoSnapshot};

/// Outcome of one restoration pass. Restoration is best-effort: the user
/// may have moved or closed tabs since the snapshot was taken, so every
/// step is independently fallible and failures never abort the rest.
#[derive(Debug, Default)]
pub struct RestoreReport {
    /// Tabs returned to their original group and position.
    pub tabs_restored: usize,
    /// Tabs that no longer existed and were skipped.
    pub tabs_skipped: usize,
    pub tab_failures: Vec<(TabId, BrowserError)>,
    /// Created groups removed, counting "already gone" as removed.
    pub groups_removed: usize,
    pub group_failures: Vec<(GroupId, BrowserError)>,
    /// The initial bulk ungroup call failed outright.
    pub bulk_ungroup_failed: bool,
}

impl RestoreReport {
    pub fn is_clean(&self) -> bool {
        self.tab_failures.is_empty() && self.group_failures.is_empty() && !self.bulk_ungroup_failed
    }
}

/// Reverts a captured [`UndoSnapshot`] against the tab surface.
pub struct UndoManager {
    surface: Arc<dyn TabSurface>,
}

impl UndoManager {
    pub fn new(surface: Arc<dyn TabSurface>) -> Self {
        Self { surface }
    }

    /// Ungroup every snapshotted tab, restore each tab's original group
    /// membership and position, then delete the groups the run created.
    pub async fn restore(&self, snapshot: UndoSnapshot) -> RestoreReport {
        let mut report = RestoreReport::default();

        let tab_ids = snapshot.tab_ids();
        if !tab_ids.is_empty() {
            if let Err(error) = self.surface.ungroup(&tab_ids).await {
                warn!(%error, "bulk ungroup failed, continuing restoration");
                report.bulk_ungroup_failed = true;
            }
        }

        for state in &snapshot.original_tab_states {
            match self.surface.get(state.id).await {
                Ok(_) => {}
                Err(error) if error.is_not_found() => {
                    debug!(tab = %state.id, "tab no longer exists, skipping restore");
                    report.tabs_skipped += 1;
                    continue;
                }
                Err(error) => {
                    report.tab_failures.push((state.id, error));
                    continue;
                }
            }

            if let Some(group) = state.group_id {
                if let Err(error) = self.surface.add_to_group(group, &[state.id]).await {
                    warn!(tab = %state.id, %error, "could not restore group membership");
                    report.tab_failures.push((state.id, error));
                    continue;
                }
            }

            match self.surface.move_tab(state.id, state.index).await {
                Ok(()) => report.tabs_restored += 1,
                Err(error) => {
                    warn!(tab = %state.id, %error, "could not restore position");
                    report.tab_failures.push((state.id, error));
                }
            }
        }

        for &group in &snapshot.created_group_ids {
            match self.surface.remove_group(group).await {
                Ok(()) => report.groups_removed += 1,
                Err(error) if error.is_not_found() => {
                    debug!(group = %group, "created group already gone");
                    report.groups_removed += 1;
                }
                Err(error) => {
                    warn!(group = %group, %error, "could not remove created group");
                    report.group_failures.push((group, error));
                }
            }
        }

        report
    }
}

#[cfg(test)]
#[path = "undo_tests.rs"]
mod tests;
