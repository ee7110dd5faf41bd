use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::{ApiError, ExplorerApi};
use crate::dispatch::clock::{Clock, SystemClock};
use crate::dispatch::error::DispatchError;
use crate::model::{ModelEvent, ModelIntent, RelevancyMap};
use crate::storage::{KeyValueStore, PersistedState};

/// Turns intents into events, performing remote effects on the way.
///
/// Owns the relevancy map; it is only reachable through
/// [`ModelIntent::SetRelevancy`] and the event that intent produces.
pub struct IntentDispatcher {
    api: Arc<dyn ExplorerApi>,
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    relevancy: Mutex<RelevancyMap>,
}

impl IntentDispatcher {
    pub fn new(api: Arc<dyn ExplorerApi>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            api,
            storage,
            clock: Arc::new(SystemClock),
            relevancy: Mutex::new(RelevancyMap::new()),
        }
    }

    /// Replace the time source used by [`ModelIntent::RefreshClock`].
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    /// Execute one intent.
    ///
    /// Events are returned in the order they must be reduced. For
    /// [`ModelIntent::Search`] that is the results first, then the cleared
    /// in-progress flag; neither is produced until the search has answered.
    ///
    /// # Errors
    /// Only intents with a surfaced failure policy return an error; see
    /// [`crate::model::IntentKind::failure_policy`].
    pub async fn dispatch(&self, intent: ModelIntent) -> Result<Vec<ModelEvent>, DispatchError> {
        let kind = intent.kind();
        tracing::debug!(intent = %kind, "Dispatching intent");

        let outcome = self.perform(intent).await;
        kind.failure_policy().resolve(kind, outcome)
    }

    async fn perform(&self, intent: ModelIntent) -> Result<Vec<ModelEvent>, ApiError> {
        match intent {
            ModelIntent::CreateModel { name } => {
                self.api.create_model(&name).await?;
                Ok(vec![ModelEvent::ModelCreated(name)])
            }
            ModelIntent::UpdateModel { name, annotations } => {
                let stats = self.api.update_model(&name, &annotations).await?;
                Ok(vec![ModelEvent::ModelStatsUpdated(stats)])
            }
            ModelIntent::ListModels => {
                let models = self.api.list_models().await?;
                Ok(vec![ModelEvent::ModelListUpdated(models)])
            }
            ModelIntent::EnableModel { name } => {
                self.persist_current_model(&name);
                Ok(vec![ModelEvent::ModelEnabled(name)])
            }
            ModelIntent::RefreshClock => Ok(vec![ModelEvent::ClockUpdated(self.clock.now())]),
            ModelIntent::SetSearchInProgress { in_progress } => {
                Ok(vec![ModelEvent::SearchInProgressSet(in_progress)])
            }
            ModelIntent::Search { model, term } => {
                let results = self.api.search(&model, &term).await?;
                Ok(vec![
                    ModelEvent::SearchResultsUpdated(results),
                    ModelEvent::SearchInProgressSet(false),
                ])
            }
            ModelIntent::SaveSeedUrls { model, urls } => {
                self.api.upload_seed_urls(&model, &urls).await?;
                Ok(vec![ModelEvent::SeedUrlsUpdated(urls)])
            }
            ModelIntent::FetchModelStats { model } => {
                let stats = self.api.model_stats(&model).await?;
                Ok(vec![ModelEvent::ModelStatsUpdated(stats)])
            }
            ModelIntent::SetRelevancy { slot, value } => {
                Ok(vec![ModelEvent::RelevancyUpdated(self.set_relevancy(&slot, value))])
            }
        }
    }

    fn persist_current_model(&self, name: &str) {
        if let Err(err) = PersistedState::for_model(name).save(self.storage.as_ref()) {
            tracing::warn!(model = name, error = %err, "Failed to persist current model");
        }
    }

    fn set_relevancy(&self, slot: &str, value: i64) -> RelevancyMap {
        let mut relevancy = self.relevancy.lock();
        if !relevancy.set(slot, value) {
            tracing::warn!(slot, "Relevancy slot is not a known page slot");
        }
        relevancy.clone()
    }

    /// Current relevancy map.
    pub fn relevancy(&self) -> RelevancyMap {
        self.relevancy.lock().clone()
    }
}
