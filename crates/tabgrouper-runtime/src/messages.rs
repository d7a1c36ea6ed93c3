//! Wire contract between the session and UI surfaces.
//!
//! UI requests come in two shapes: options-page actions tagged with
//! `action`, and popup events tagged with `type`. Responses and pushed
//! events use the field names the UI scripts read.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use tabgrouper_config::DEFAULT_GROUPING_PROMPT;
use tabgrouper_protocols::provider::ModelDescriptor;
use tabgrouper_protocols::types::{AiProvider, StatusUpdate};

use crate::session::{GroupingSession, UndoOutcome};

/// Any inbound UI message.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UiRequest {
    Action(ActionRequest),
    Event(EventRequest),
}

/// Options-page requests, discriminated by an `action` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ActionRequest {
    FetchModels { payload: FetchModelsPayload },
    GetDefaultPrompt,
}

#[derive(Debug, Deserialize)]
pub struct FetchModelsPayload {
    pub provider: AiProvider,
}

/// Popup and shortcut events, discriminated by a `type` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventRequest {
    GetUndoState,
    TriggerGroupingManually,
    UndoGrouping,
}

/// Reply to one [`UiRequest`].
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UiResponse {
    Models {
        #[serde(skip_serializing_if = "Option::is_none")]
        models: Option<Vec<ModelDescriptor>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    Prompt {
        prompt: String,
    },
    UndoState {
        #[serde(rename = "canUndo")]
        can_undo: bool,
    },
    Ack {
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

/// Dispatch one UI request against the session.
///
/// Request-level failures become error payloads, never panics: the UI
/// always gets an answer it can render.
pub async fn handle_request(session: &GroupingSession, request: UiRequest) -> UiResponse {
    match request {
        UiRequest::Action(ActionRequest::FetchModels { payload }) => {
            match session.fetch_models(payload.provider).await {
                Ok(models) => UiResponse::Models {
                    models: Some(models),
                    error: None,
                },
                Err(error) => UiResponse::Models {
                    models: None,
                    error: Some(error.to_string()),
                },
            }
        }
        UiRequest::Action(ActionRequest::GetDefaultPrompt) => UiResponse::Prompt {
            prompt: DEFAULT_GROUPING_PROMPT.to_string(),
        },
        UiRequest::Event(EventRequest::GetUndoState) => UiResponse::UndoState {
            can_undo: session.can_undo().await,
        },
        UiRequest::Event(EventRequest::TriggerGroupingManually) => match session.run().await {
            // A skipped run is still a successfully handled trigger.
            Ok(_) => UiResponse::Ack {
                success: true,
                error: None,
            },
            Err(error) => UiResponse::Ack {
                success: false,
                error: Some(error.to_string()),
            },
        },
        UiRequest::Event(EventRequest::UndoGrouping) => match session.undo().await {
            UndoOutcome::Restored(_) | UndoOutcome::NothingToUndo => UiResponse::Ack {
                success: true,
                error: None,
            },
        },
    }
}

/// Event pushed to subscribed UI surfaces for each status update.
pub fn status_event(update: &StatusUpdate) -> Value {
    json!({
        "type": "statusUpdate",
        "payload": { "text": update.text, "isError": update.is_error },
    })
}

/// Event pushed when the undo slot fills or empties.
pub fn undo_state_event(can_undo: bool) -> Value {
    json!({
        "type": "undoStateChanged",
        "payload": { "canUndo": can_undo },
    })
}

#[cfg(test)]
#[path = "messages_tests.rs"]
mod tests;
