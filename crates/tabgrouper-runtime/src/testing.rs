//! In-memory implementations of the capability surfaces.
//!
//! Used by the crate's own tests and by embedders that want to exercise
//! the pipeline without a live browser or AI backend.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use tabgrouper_protocols::browser::TabSurface;
use tabgrouper_protocols::error::{BrowserError, ProviderError};
use tabgrouper_protocols::provider::{CompletionBackend, ModelDescriptor};
use tabgrouper_protocols::types::{AiProvider, GroupId, TabId, TabRecord};

use crate::gateway::BackendFactory;

#[derive(Default)]
struct SurfaceState {
    tabs: Vec<TabRecord>,
    group_titles: HashMap<GroupId, String>,
    next_group_id: i64,
}

/// In-memory tab/group surface with browser-like semantics.
pub struct MemoryTabSurface {
    state: Mutex<SurfaceState>,
}

impl MemoryTabSurface {
    pub fn new(tabs: Vec<TabRecord>) -> Self {
        // Groups already referenced by the seed tabs exist with no title.
        let mut group_titles = HashMap::new();
        let mut max_group = 0;
        for tab in &tabs {
            if let Some(group) = tab.group_id {
                group_titles.entry(group).or_insert_with(String::new);
                max_group = max_group.max(group.0);
            }
        }
        Self {
            state: Mutex::new(SurfaceState {
                tabs,
                group_titles,
                next_group_id: max_group + 1,
            }),
        }
    }

    /// Snapshot of all tabs.
    pub fn tabs(&self) -> Vec<TabRecord> {
        self.state.lock().unwrap().tabs.clone()
    }

    pub fn tab(&self, id: TabId) -> Option<TabRecord> {
        self.state
            .lock()
            .unwrap()
            .tabs
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    pub fn group_title(&self, group: GroupId) -> Option<String> {
        self.state.lock().unwrap().group_titles.get(&group).cloned()
    }

    pub fn group_count(&self) -> usize {
        self.state.lock().unwrap().group_titles.len()
    }

    /// Simulate the user closing a tab mid-run.
    pub fn close_tab(&self, id: TabId) {
        self.state.lock().unwrap().tabs.retain(|t| t.id != id);
    }
}

#[async_trait]
impl TabSurface for MemoryTabSurface {
    async fn query(&self, window_id: Option<i64>) -> Result<Vec<TabRecord>, BrowserError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .tabs
            .iter()
            .filter(|t| window_id.is_none_or(|w| t.window_id == w))
            .cloned()
            .collect())
    }

    async fn get(&self, tab: TabId) -> Result<TabRecord, BrowserError> {
        self.state
            .lock()
            .unwrap()
            .tabs
            .iter()
            .find(|t| t.id == tab)
            .cloned()
            .ok_or(BrowserError::TabNotFound(tab))
    }

    async fn group(
        &self,
        tabs: &[TabId],
        _window_id: Option<i64>,
    ) -> Result<GroupId, BrowserError> {
        let mut state = self.state.lock().unwrap();
        let known: HashSet<TabId> = state.tabs.iter().map(|t| t.id).collect();
        if let Some(&missing) = tabs.iter().find(|id| !known.contains(id)) {
            return Err(BrowserError::TabNotFound(missing));
        }

        let group = GroupId(state.next_group_id);
        state.next_group_id += 1;
        state.group_titles.insert(group, String::new());
        for tab in &mut state.tabs {
            if tabs.contains(&tab.id) {
                tab.group_id = Some(group);
            }
        }
        Ok(group)
    }

    async fn add_to_group(&self, group: GroupId, tabs: &[TabId]) -> Result<(), BrowserError> {
        let mut state = self.state.lock().unwrap();
        if !state.group_titles.contains_key(&group) {
            return Err(BrowserError::GroupNotFound(group));
        }
        for tab in &mut state.tabs {
            if tabs.contains(&tab.id) {
                tab.group_id = Some(group);
            }
        }
        Ok(())
    }

    async fn ungroup(&self, tabs: &[TabId]) -> Result<(), BrowserError> {
        let mut state = self.state.lock().unwrap();
        for tab in &mut state.tabs {
            if tabs.contains(&tab.id) {
                tab.group_id = None;
            }
        }
        Ok(())
    }

    async fn move_tab(&self, tab: TabId, index: u32) -> Result<(), BrowserError> {
        let mut state = self.state.lock().unwrap();
        let record = state
            .tabs
            .iter_mut()
            .find(|t| t.id == tab)
            .ok_or(BrowserError::TabNotFound(tab))?;
        record.index = index;
        Ok(())
    }

    async fn set_group_title(&self, group: GroupId, title: &str) -> Result<(), BrowserError> {
        let mut state = self.state.lock().unwrap();
        match state.group_titles.get_mut(&group) {
            Some(slot) => {
                *slot = title.to_string();
                Ok(())
            }
            None => Err(BrowserError::GroupNotFound(group)),
        }
    }

    async fn remove_group(&self, group: GroupId) -> Result<(), BrowserError> {
        let mut state = self.state.lock().unwrap();
        if state.group_titles.remove(&group).is_none() {
            return Err(BrowserError::GroupNotFound(group));
        }
        for tab in &mut state.tabs {
            if tab.group_id == Some(group) {
                tab.group_id = None;
            }
        }
        Ok(())
    }
}

/// Completion backend answering from a queue of canned responses.
#[derive(Default)]
pub struct ScriptedBackend {
    responses: Mutex<VecDeque<Result<String, ProviderError>>>,
    prompts: Mutex<Vec<String>>,
    models: Vec<ModelDescriptor>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_models(mut self, models: Vec<ModelDescriptor>) -> Self {
        self.models = models;
        self
    }

    /// Queue a successful completion.
    pub fn respond(self, text: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queue a failing call.
    pub fn fail(self, error: ProviderError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    fn id(&self) -> &str {
        "scripted"
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, ProviderError> {
        Ok(self.models.clone())
    }

    async fn complete(&self, _model: &str, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Network("no scripted response".to_string())))
    }
}

/// Factory that hands out the same backend for every provider.
pub struct SingleBackendFactory {
    backend: Arc<dyn CompletionBackend>,
}

impl SingleBackendFactory {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }
}

impl BackendFactory for SingleBackendFactory {
    fn backend(&self, _provider: AiProvider, _api_key: &str) -> Arc<dyn CompletionBackend> {
        self.backend.clone()
    }
}
