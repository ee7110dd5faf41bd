//! Intents accepted by the dispatcher.

use std::fmt;

use crate::model::relevancy::RelevancyMap;
use crate::mvi::Intent;

/// Requests a caller can make of the explorer service or of local state.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelIntent {
    /// Create a new, empty classification model.
    CreateModel { name: String },
    /// Post page annotations to a model and receive its updated stats.
    UpdateModel {
        name: String,
        annotations: RelevancyMap,
    },
    ListModels,
    /// Make `name` the current model and remember it across runs.
    EnableModel { name: String },
    RefreshClock,
    SetSearchInProgress { in_progress: bool },
    /// Search the web through the given model.
    Search { model: String, term: String },
    SaveSeedUrls { model: String, urls: Vec<String> },
    FetchModelStats { model: String },
    /// Record an annotation value for one page slot.
    SetRelevancy { slot: String, value: i64 },
}

impl Intent for ModelIntent {}

impl ModelIntent {
    pub fn kind(&self) -> IntentKind {
        match self {
            ModelIntent::CreateModel { .. } => IntentKind::CreateModel,
            ModelIntent::UpdateModel { .. } => IntentKind::UpdateModel,
            ModelIntent::ListModels => IntentKind::ListModels,
            ModelIntent::EnableModel { .. } => IntentKind::EnableModel,
            ModelIntent::RefreshClock => IntentKind::RefreshClock,
            ModelIntent::SetSearchInProgress { .. } => IntentKind::SetSearchInProgress,
            ModelIntent::Search { .. } => IntentKind::Search,
            ModelIntent::SaveSeedUrls { .. } => IntentKind::SaveSeedUrls,
            ModelIntent::FetchModelStats { .. } => IntentKind::FetchModelStats,
            ModelIntent::SetRelevancy { .. } => IntentKind::SetRelevancy,
        }
    }
}

/// Parameter-free discriminant of [`ModelIntent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    CreateModel,
    UpdateModel,
    ListModels,
    EnableModel,
    RefreshClock,
    SetSearchInProgress,
    Search,
    SaveSeedUrls,
    FetchModelStats,
    SetRelevancy,
}

impl IntentKind {
    pub const ALL: [IntentKind; 10] = [
        IntentKind::CreateModel,
        IntentKind::UpdateModel,
        IntentKind::ListModels,
        IntentKind::EnableModel,
        IntentKind::RefreshClock,
        IntentKind::SetSearchInProgress,
        IntentKind::Search,
        IntentKind::SaveSeedUrls,
        IntentKind::FetchModelStats,
        IntentKind::SetRelevancy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IntentKind::CreateModel => "create_model",
            IntentKind::UpdateModel => "update_model",
            IntentKind::ListModels => "list_models",
            IntentKind::EnableModel => "enable_model",
            IntentKind::RefreshClock => "refresh_clock",
            IntentKind::SetSearchInProgress => "set_search_in_progress",
            IntentKind::Search => "search",
            IntentKind::SaveSeedUrls => "save_seed_urls",
            IntentKind::FetchModelStats => "fetch_model_stats",
            IntentKind::SetRelevancy => "set_relevancy",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
