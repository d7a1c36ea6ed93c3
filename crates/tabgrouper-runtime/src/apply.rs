//! Applies a merged plan to live browser state.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use tabgrouper_protocols::browser::TabSurface;
use tabgrouper_protocols::error::BrowserError;
use tabgrouper_protocols::types::{MergedPlan, TabId, TabRecord, UndoSnapshot};

/// One plan entry the applier could not realize.
#[derive(Debug)]
pub struct ApplyFailure {
    pub group_name: String,
    pub error: BrowserError,
}

/// Summary of one application pass.
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Groups created and titled successfully.
    pub groups_created: usize,
    pub failures: Vec<ApplyFailure>,
}

/// Executes a [`MergedPlan`] against the tab surface, recording enough
/// state to reverse the whole operation.
pub struct GroupApplier {
    surface: Arc<dyn TabSurface>,
}

impl GroupApplier {
    pub fn new(surface: Arc<dyn TabSurface>) -> Self {
        Self { surface }
    }

    /// Create and title a group per plan entry.
    ///
    /// The snapshot covers every eligible tab and is captured before any
    /// mutation. Entry failures are isolated: a failing entry is recorded
    /// and the remaining entries still apply. A group that was created but
    /// could not be titled still lands in the snapshot so undo removes it.
    pub async fn apply(
        &self,
        plan: &MergedPlan,
        tabs: &[TabRecord],
    ) -> (ApplyReport, UndoSnapshot) {
        let mut snapshot = UndoSnapshot::capture(tabs);
        let mut report = ApplyReport::default();

        let by_id: HashMap<TabId, &TabRecord> = tabs.iter().map(|tab| (tab.id, tab)).collect();

        for entry in plan.entries() {
            if entry.tab_ids.is_empty() {
                continue;
            }

            // The owning window comes from the first listed tab we know.
            let window_id = entry
                .tab_ids
                .iter()
                .find_map(|id| by_id.get(id))
                .map(|tab| tab.window_id);

            match self.surface.group(&entry.tab_ids, window_id).await {
                Ok(group) => {
                    snapshot.record_created(group);
                    match self.surface.set_group_title(group, &entry.name).await {
                        Ok(()) => {
                            debug!(group = %group, name = %entry.name, "group created");
                            report.groups_created += 1;
                        }
                        Err(error) => {
                            warn!(name = %entry.name, %error, "failed to title group");
                            report.failures.push(ApplyFailure {
                                group_name: entry.name.clone(),
                                error,
                            });
                        }
                    }
                }
                Err(error) => {
                    warn!(name = %entry.name, %error, "failed to create group");
                    report.failures.push(ApplyFailure {
                        group_name: entry.name.clone(),
                        error,
                    });
                }
            }
        }

        (report, snapshot)
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
