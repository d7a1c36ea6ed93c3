//! Cross-chunk merge of group suggestions.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use tabgrouper_protocols::types::{MergedPlan, PlanEntry, Suggestion, TabId, TabRecord};

/// Consolidate per-chunk suggestions into a single coherent plan.
///
/// Groups merge by exact trimmed-name equality, tab ids union in first-seen
/// order with no duplicates within an entry, and output order follows first
/// occurrence of each name. Tabs belonging to failed chunks land in
/// "Miscellaneous" unless some successful suggestion already claimed them.
/// Entries left without any tab are dropped.
pub fn merge_suggestions(suggestions: &[Suggestion], failed_tabs: &[TabRecord]) -> MergedPlan {
    let mut entries: Vec<PlanEntry> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut claimed: HashSet<TabId> = HashSet::new();

    let mut slot_for = |name: &str, entries: &mut Vec<PlanEntry>| -> usize {
        if let Some(&slot) = slots.get(name) {
            return slot;
        }
        entries.push(PlanEntry::new(name, Vec::new()));
        let slot = entries.len() - 1;
        slots.insert(name.to_string(), slot);
        slot
    };

    for suggestion in suggestions {
        let name = suggestion.name.trim();
        if name.is_empty() {
            continue;
        }
        let slot = slot_for(name, &mut entries);
        for &id in &suggestion.tab_ids {
            if !entries[slot].tab_ids.contains(&id) {
                entries[slot].tab_ids.push(id);
            }
            claimed.insert(id);
        }
    }

    let orphaned: Vec<TabId> = failed_tabs
        .iter()
        .map(|tab| tab.id)
        .filter(|id| !claimed.contains(id))
        .collect();

    if !orphaned.is_empty() {
        debug!(
            count = orphaned.len(),
            "routing tabs from failed chunks into {}",
            MergedPlan::MISCELLANEOUS
        );
        let slot = slot_for(MergedPlan::MISCELLANEOUS, &mut entries);
        for id in orphaned {
            if !entries[slot].tab_ids.contains(&id) {
                entries[slot].tab_ids.push(id);
            }
        }
    }

    entries.retain(|entry| !entry.tab_ids.is_empty());
    MergedPlan::from_entries(entries)
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
