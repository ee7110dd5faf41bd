//! Events produced by the dispatcher.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::relevancy::RelevancyMap;
use crate::mvi::Event;

/// Outcome of an intent, folded into state by the reducers.
///
/// On the wire an event is `{"type": "<KIND>", "payload": <value>}`.
/// Service responses are carried verbatim as [`Value`] payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ModelEvent {
    #[serde(rename = "NEW_MODEL")]
    ModelCreated(String),
    #[serde(rename = "MODEL_LIST")]
    ModelListUpdated(Value),
    #[serde(rename = "ENABLE_MODEL")]
    ModelEnabled(String),
    #[serde(rename = "UPDATED_RELEVANCY")]
    RelevancyUpdated(RelevancyMap),
    #[serde(rename = "UPDATE_SEED_URLS")]
    SeedUrlsUpdated(Vec<String>),
    #[serde(rename = "MODEL_STATS")]
    ModelStatsUpdated(Value),
    #[serde(rename = "SEARCH_RESULTS")]
    SearchResultsUpdated(Value),
    #[serde(rename = "SEARCH_FIRED")]
    SearchInProgressSet(bool),
    #[serde(rename = "FETCH_NEW_TIME")]
    ClockUpdated(String),
}

impl Event for ModelEvent {}

impl ModelEvent {
    /// Parse an event from its wire form.
    ///
    /// Fails for unknown kinds and for payloads of the wrong shape.
    pub fn from_wire(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Wire name of this event's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ModelEvent::ModelCreated(_) => "NEW_MODEL",
            ModelEvent::ModelListUpdated(_) => "MODEL_LIST",
            ModelEvent::ModelEnabled(_) => "ENABLE_MODEL",
            ModelEvent::RelevancyUpdated(_) => "UPDATED_RELEVANCY",
            ModelEvent::SeedUrlsUpdated(_) => "UPDATE_SEED_URLS",
            ModelEvent::ModelStatsUpdated(_) => "MODEL_STATS",
            ModelEvent::SearchResultsUpdated(_) => "SEARCH_RESULTS",
            ModelEvent::SearchInProgressSet(_) => "SEARCH_FIRED",
            ModelEvent::ClockUpdated(_) => "FETCH_NEW_TIME",
        }
    }
}
