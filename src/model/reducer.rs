//! Reducers for each snapshot slice and the root snapshot.

use crate::model::event::ModelEvent;
use crate::model::state::{AppState, ClockState, ModelState, SearchState};
use crate::mvi::Reducer;

/// Folds model events into [`ModelState`].
///
/// Every arm copies the previous fields and overwrites exactly one.
/// Events owned by other slices leave the state untouched.
pub struct ModelReducer;

impl Reducer for ModelReducer {
    type State = ModelState;
    type Event = ModelEvent;

    fn reduce(state: Self::State, event: &Self::Event) -> Self::State {
        match event {
            ModelEvent::ModelCreated(name) => ModelState {
                name: Some(name.clone()),
                ..state
            },
            ModelEvent::ModelListUpdated(models) => ModelState {
                models: Some(models.clone()),
                ..state
            },
            ModelEvent::ModelEnabled(name) => ModelState {
                current_model: Some(name.clone()),
                ..state
            },
            ModelEvent::RelevancyUpdated(relevancy) => ModelState {
                updated_relevancy: Some(relevancy.clone()),
                ..state
            },
            ModelEvent::SeedUrlsUpdated(urls) => ModelState {
                seed_urls: Some(urls.clone()),
                ..state
            },
            ModelEvent::ModelStatsUpdated(stats) => ModelState {
                model_stats: Some(stats.clone()),
                ..state
            },
            ModelEvent::SearchResultsUpdated(_)
            | ModelEvent::SearchInProgressSet(_)
            | ModelEvent::ClockUpdated(_) => state,
        }
    }
}

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Event = ModelEvent;

    fn reduce(state: Self::State, event: &Self::Event) -> Self::State {
        match event {
            ModelEvent::SearchResultsUpdated(results) => SearchState {
                results: Some(results.clone()),
                ..state
            },
            ModelEvent::SearchInProgressSet(in_progress) => SearchState {
                in_progress: *in_progress,
                ..state
            },
            _ => state,
        }
    }
}

pub struct ClockReducer;

impl Reducer for ClockReducer {
    type State = ClockState;
    type Event = ModelEvent;

    fn reduce(state: Self::State, event: &Self::Event) -> Self::State {
        match event {
            ModelEvent::ClockUpdated(time) => ClockState {
                time: Some(time.clone()),
            },
            _ => state,
        }
    }
}

/// Feeds each event through every slice reducer.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Event = ModelEvent;

    fn reduce(state: Self::State, event: &Self::Event) -> Self::State {
        AppState {
            model: ModelReducer::reduce(state.model, event),
            search: SearchReducer::reduce(state.search, event),
            clock: ClockReducer::reduce(state.clock, event),
        }
    }
}
