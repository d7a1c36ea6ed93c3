//! Browser surface errors.

use thiserror::Error;

use crate::types::{GroupId, TabId};

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Tab not found: {0}")]
    TabNotFound(TabId),

    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    #[error("Tab query failed: {0}")]
    Query(String),

    #[error("Browser backend error: {0}")]
    Backend(String),
}

impl BrowserError {
    /// Whether this error means the target no longer exists.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BrowserError::TabNotFound(_) | BrowserError::GroupNotFound(_)
        )
    }
}
