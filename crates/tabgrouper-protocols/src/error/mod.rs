//! Error types for the tabgrouper protocol layer.

mod browser;
mod provider;
mod suggestion;

pub use browser::*;
pub use provider::*;
pub use suggestion::*;
