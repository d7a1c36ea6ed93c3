//! Pre-mutation state recorded for transactional undo.

use serde::{Deserialize, Serialize};

use super::{GroupId, TabId, TabRecord};

/// Original placement of one tab before the applier touched it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabState {
    pub id: TabId,
    /// Group membership at capture time; `None` means ungrouped.
    pub group_id: Option<GroupId>,
    /// Tab strip position at capture time.
    pub index: u32,
}

/// Everything needed to reverse one grouping run.
///
/// Captured by the applier immediately before any mutation; consumed and
/// cleared by the undo manager. Single-slot: only the most recent snapshot
/// is retained by the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UndoSnapshot {
    pub original_tab_states: Vec<TabState>,
    pub created_group_ids: Vec<GroupId>,
}

impl UndoSnapshot {
    /// Record the current placement of every given tab.
    pub fn capture(tabs: &[TabRecord]) -> Self {
        Self {
            original_tab_states: tabs
                .iter()
                .map(|tab| TabState {
                    id: tab.id,
                    group_id: tab.group_id,
                    index: tab.index,
                })
                .collect(),
            created_group_ids: Vec::new(),
        }
    }

    /// Remember a group created by the applier so undo can remove it.
    pub fn record_created(&mut self, group: GroupId) {
        self.created_group_ids.push(group);
    }

    /// Ids of all tabs covered by this snapshot.
    pub fn tab_ids(&self) -> Vec<TabId> {
        self.original_tab_states.iter().map(|s| s.id).collect()
    }
}
