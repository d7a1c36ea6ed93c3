//! Tab eligibility filtering.

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use tabgrouper_protocols::types::TabRecord;

use crate::error::GroupingError;

/// Compiled URL exclusion patterns.
///
/// Compilation happens once per run; a single bad pattern aborts the run
/// rather than being silently ignored.
#[derive(Debug, Default)]
pub struct ExclusionPatterns {
    patterns: Vec<Regex>,
}

impl ExclusionPatterns {
    /// Compile the configured regex sources, case-insensitive.
    pub fn compile(sources: &[String]) -> Result<Self, GroupingError> {
        let mut patterns = Vec::with_capacity(sources.len());
        for source in sources {
            let regex = RegexBuilder::new(source)
                .case_insensitive(true)
                .build()
                .map_err(|e| GroupingError::Pattern {
                    pattern: source.clone(),
                    message: e.to_string(),
                })?;
            patterns.push(regex);
        }
        Ok(Self { patterns })
    }

    /// Whether a URL matches any exclusion pattern.
    pub fn excludes(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(url))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Select the tabs a grouping run may touch: unpinned, ungrouped, and not
/// matching any exclusion pattern. Tabs without a URL are kept (fail-open).
pub fn eligible_tabs(tabs: &[TabRecord], exclusions: &ExclusionPatterns) -> Vec<TabRecord> {
    tabs.iter()
        .filter(|tab| {
            if tab.pinned || tab.group_id.is_some() {
                return false;
            }
            if tab.url.is_empty() {
                warn!(tab = %tab.id, "tab has no URL, keeping it");
                return true;
            }
            if exclusions.excludes(&tab.url) {
                debug!(tab = %tab.id, url = %tab.url, "excluding tab by pattern");
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
