//! Data model for the grouping pipeline.

mod common;
mod plan;
mod snapshot;
mod tab;

pub use common::*;
pub use plan::*;
pub use snapshot::*;
pub use tab::*;
