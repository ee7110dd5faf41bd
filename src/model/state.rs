//! State snapshots.

use serde::Serialize;
use serde_json::Value;

use crate::model::relevancy::RelevancyMap;
use crate::mvi::State;

/// Model slice of the snapshot.
///
/// Each field holds the payload of the most recent event that maps to it.
/// Fields no event has touched yet are `None` and omitted when serialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ModelState {
    /// Name of the most recently created model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_relevancy: Option<RelevancyMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_stats: Option<Value>,
}

impl State for ModelState {}

/// Search slice of the snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Value>,
    pub in_progress: bool,
}

impl State for SearchState {}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ClockState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl State for ClockState {}

/// Root snapshot published to observers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppState {
    pub model: ModelState,
    pub search: SearchState,
    pub clock: ClockState,
}

impl State for AppState {}
