//! # Tabgrouper Runtime
//!
//! The grouping pipeline: settings resolution feeds tab filtering, the
//! eligible set is split into bounded chunks, each chunk goes to the AI
//! backend, per-chunk suggestions are merged into one plan, the plan is
//! applied to live browser state, and the whole application can be undone
//! from a single-slot snapshot.
//!
//! Fatal errors (bad config, bad exclusion pattern, failed tab query) abort
//! a run. Everything downstream of chunking degrades: failed chunks land in
//! "Miscellaneous", failed plan entries are skipped and counted, failed
//! restore steps are logged and counted.

mod apply;
mod chunker;
mod error;
mod filter;
mod gateway;
mod merge;
mod messages;
mod session;
mod undo;
mod validate;

pub mod testing;

pub use apply::{ApplyFailure, ApplyReport, GroupApplier};
pub use chunker::{chunk_tabs, MAX_CHUNK_SIZE};
pub use error::{ChunkError, GroupingError, ModelListError};
pub use filter::{eligible_tabs, ExclusionPatterns};
pub use gateway::{build_prompt, AiGateway, BackendFactory, ChunkOutcome, GatewayOptions};
pub use merge::merge_suggestions;
pub use messages::{
    handle_request, status_event, undo_state_event, ActionRequest, EventRequest,
    FetchModelsPayload, UiRequest, UiResponse,
};
pub use session::{GroupingSession, RunOutcome, UndoOutcome};
pub use undo::{RestoreReport, UndoManager};
pub use validate::{strip_code_fence, validate_suggestions};
