//! Session orchestration: one object owning the run lock, the status
//! stream, and the undo slot.

use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use tabgrouper_config::{ConfigError, Settings};
use tabgrouper_protocols::browser::TabSurface;
use tabgrouper_protocols::notify::{Notifier, NullNotifier};
use tabgrouper_protocols::provider::ModelDescriptor;
use tabgrouper_protocols::types::{AiProvider, StatusUpdate, Suggestion, TabRecord, UndoSnapshot};

use crate::apply::GroupApplier;
use crate::chunker::chunk_tabs;
use crate::error::{GroupingError, ModelListError};
use crate::filter::{eligible_tabs, ExclusionPatterns};
use crate::gateway::{AiGateway, BackendFactory, GatewayOptions};
use crate::merge::merge_suggestions;
use crate::undo::{RestoreReport, UndoManager};

const STATUS_CAPACITY: usize = 64;

/// How a grouping run ended when no fatal error occurred.
#[derive(Debug)]
pub enum RunOutcome {
    /// Too few eligible tabs; nothing was sent to the AI.
    Skipped { eligible: usize, minimum: u32 },
    /// The AI produced no usable groups, so browser state is untouched.
    NoGroupsCreated { chunks_failed: usize },
    Completed {
        groups_created: usize,
        chunks_failed: usize,
        apply_failures: usize,
    },
}

/// Result of an undo request.
#[derive(Debug)]
pub enum UndoOutcome {
    /// The undo slot was empty.
    NothingToUndo,
    Restored(RestoreReport),
}

/// One grouping session.
///
/// Owns all mutable pipeline state: the run guard that rejects overlapping
/// runs, the broadcast channel UI surfaces subscribe to for progress, and
/// the single-slot undo snapshot. Cheap to share behind an [`Arc`]; every
/// method takes `&self`.
pub struct GroupingSession {
    surface: Arc<dyn TabSurface>,
    factory: Arc<dyn BackendFactory>,
    notifier: Arc<dyn Notifier>,
    settings: Settings,
    options: GatewayOptions,
    run_lock: Mutex<()>,
    undo_slot: Mutex<Option<UndoSnapshot>>,
    status_tx: broadcast::Sender<StatusUpdate>,
}

impl GroupingSession {
    pub fn new(
        surface: Arc<dyn TabSurface>,
        factory: Arc<dyn BackendFactory>,
        settings: Settings,
    ) -> Self {
        let (status_tx, _) = broadcast::channel(STATUS_CAPACITY);
        Self {
            surface,
            factory,
            notifier: Arc::new(NullNotifier),
            settings,
            options: GatewayOptions::default(),
            run_lock: Mutex::new(()),
            undo_slot: Mutex::new(None),
            status_tx,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_options(mut self, options: GatewayOptions) -> Self {
        self.options = options;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Subscribe to progress updates. Every run and undo publishes here.
    pub fn subscribe(&self) -> broadcast::Receiver<StatusUpdate> {
        self.status_tx.subscribe()
    }

    /// Whether an undo snapshot is available.
    pub async fn can_undo(&self) -> bool {
        self.undo_slot.lock().await.is_some()
    }

    fn status(&self, update: StatusUpdate) {
        let _ = self.status_tx.send(update);
    }

    async fn notify(&self, title: &str, message: &str) {
        if !self.settings.disable_notifications {
            self.notifier.notify(title, message).await;
        }
    }

    /// Execute one full grouping run.
    ///
    /// Fatal errors abort the run and are also published on the status
    /// stream; chunk and apply failures degrade the run instead.
    pub async fn run(&self) -> Result<RunOutcome, GroupingError> {
        match self.run_inner().await {
            Ok(outcome) => Ok(outcome),
            Err(error) => {
                warn!(%error, "grouping run failed");
                self.status(StatusUpdate::error(format!("Error: {error}")));
                self.notify("Tab Grouping Error", &error.to_string()).await;
                Err(error)
            }
        }
    }

    async fn run_inner(&self) -> Result<RunOutcome, GroupingError> {
        let _guard = self
            .run_lock
            .try_lock()
            .map_err(|_| GroupingError::RunInProgress)?;

        self.settings.validate()?;
        let provider = self
            .settings
            .provider
            .ok_or_else(|| ConfigError::MissingField("provider".to_string()))?;
        let api_key = self
            .settings
            .api_key
            .clone()
            .ok_or_else(|| ConfigError::MissingField("api_key".to_string()))?;
        let model = self
            .settings
            .model
            .clone()
            .ok_or_else(|| ConfigError::MissingField("model".to_string()))?;

        self.status(StatusUpdate::info("Fetching tabs..."));
        let tabs = self.surface.query(None).await?;

        let patterns = ExclusionPatterns::compile(&self.settings.exclusion_patterns)?;
        let eligible = eligible_tabs(&tabs, &patterns);
        debug!(
            total = tabs.len(),
            eligible = eligible.len(),
            "tab query complete"
        );

        let minimum = self.settings.grouping_sensitivity;
        if eligible.len() < minimum as usize {
            self.status(StatusUpdate::info(format!(
                "Skipping: Only {} tabs found (min: {}).",
                eligible.len(),
                minimum
            )));
            return Ok(RunOutcome::Skipped {
                eligible: eligible.len(),
                minimum,
            });
        }

        let chunks = chunk_tabs(&eligible);
        let backend = self.factory.backend(provider, &api_key);
        let gateway = AiGateway::new(backend, self.options.clone());
        let outcomes = gateway
            .dispatch(
                &model,
                self.settings.resolved_prompt(),
                chunks,
                Some(&self.status_tx),
            )
            .await;

        let total_chunks = outcomes.len();
        let mut suggestions: Vec<Suggestion> = Vec::new();
        let mut failed_tabs: Vec<TabRecord> = Vec::new();
        let mut chunks_failed = 0;
        for outcome in outcomes {
            match outcome.result {
                // A chunk that answers with zero groups leaves its tabs
                // unassigned; they take the fallback path like failed chunks.
                Ok(batch) if batch.is_empty() => failed_tabs.extend(outcome.tabs),
                Ok(batch) => suggestions.extend(batch),
                Err(_) => {
                    chunks_failed += 1;
                    failed_tabs.extend(outcome.tabs);
                }
            }
        }

        if chunks_failed > 0 {
            self.status(StatusUpdate::info(format!(
                "{chunks_failed} of {total_chunks} batches failed; their tabs go to \"Miscellaneous\"."
            )));
        }

        let plan = merge_suggestions(&suggestions, &failed_tabs);
        if plan.is_empty() {
            self.status(StatusUpdate::info("No groups to create."));
            return Ok(RunOutcome::NoGroupsCreated { chunks_failed });
        }

        self.status(StatusUpdate::info(format!(
            "Applying {} tab groups...",
            plan.len()
        )));
        let applier = GroupApplier::new(self.surface.clone());
        let (report, snapshot) = applier.apply(&plan, &eligible).await;

        // A run that created nothing leaves the previous snapshot undoable.
        if !snapshot.created_group_ids.is_empty() {
            *self.undo_slot.lock().await = Some(snapshot);
        }

        info!(
            groups = report.groups_created,
            failed_chunks = chunks_failed,
            "grouping run complete"
        );
        let summary = format!("Created {} tab groups.", report.groups_created);
        self.status(StatusUpdate::info(summary.clone()));
        self.notify("Tab Grouper", &summary).await;

        Ok(RunOutcome::Completed {
            groups_created: report.groups_created,
            chunks_failed,
            apply_failures: report.failures.len(),
        })
    }

    /// List the models the provider offers, using the configured credential.
    pub async fn fetch_models(
        &self,
        provider: AiProvider,
    ) -> Result<Vec<ModelDescriptor>, ModelListError> {
        let api_key = self
            .settings
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField("api_key".to_string()))?;
        let backend = self.factory.backend(provider, &api_key);
        Ok(backend.list_models().await?)
    }

    /// Revert the most recent grouping, consuming the undo slot.
    pub async fn undo(&self) -> UndoOutcome {
        let snapshot = match self.undo_slot.lock().await.take() {
            Some(snapshot) => snapshot,
            None => {
                self.status(StatusUpdate::info("No previous grouping to undo."));
                return UndoOutcome::NothingToUndo;
            }
        };

        self.status(StatusUpdate::info("Undoing last grouping..."));
        let manager = UndoManager::new(self.surface.clone());
        let report = manager.restore(snapshot).await;

        if report.is_clean() {
            self.status(StatusUpdate::info("Undo complete."));
        } else {
            self.status(StatusUpdate::error(
                "Undo finished with some tabs left in place.",
            ));
        }
        self.notify("Tab Grouper", "Last grouping undone.").await;

        UndoOutcome::Restored(report)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
