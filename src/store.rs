//! Mediator between callers, the dispatcher and the reducers.
//!
//! The current snapshot lives in a `tokio::sync::watch` channel: readers get
//! an `Arc` to an immutable [`AppState`], writers replace it wholesale.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;

use crate::dispatch::{DispatchError, IntentDispatcher};
use crate::model::{AppReducer, AppState, ModelEvent, ModelIntent};
use crate::mvi::Reducer;

/// Owns the snapshot and republishes it after every reduction.
///
/// `Store` is `Send + Sync`; share it behind an `Arc` to run several
/// intents concurrently. Each intent's events are applied together once
/// its effect completes.
pub struct Store {
    dispatcher: IntentDispatcher,
    publisher: watch::Sender<Arc<AppState>>,
}

impl Store {
    pub fn new(dispatcher: IntentDispatcher) -> Self {
        let (publisher, _) = watch::channel(Arc::new(AppState::default()));
        Self {
            dispatcher,
            publisher,
        }
    }

    pub fn dispatcher(&self) -> &IntentDispatcher {
        &self.dispatcher
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> Arc<AppState> {
        self.publisher.borrow().clone()
    }

    /// Receiver that is notified whenever the snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.publisher.subscribe()
    }

    /// Dispatch an intent and reduce whatever events it produces.
    ///
    /// Returns the snapshot as of right after this intent's events were
    /// applied.
    pub async fn dispatch(&self, intent: ModelIntent) -> Result<Arc<AppState>, DispatchError> {
        let events = self.dispatcher.dispatch(intent).await?;
        Ok(self.apply_all(&events))
    }

    /// Reduce a single event into the snapshot.
    pub fn apply(&self, event: &ModelEvent) -> Arc<AppState> {
        self.apply_all(std::slice::from_ref(event))
    }

    /// Reduce events in order under one write, publishing once.
    ///
    /// Observers are only woken if the snapshot actually changed.
    pub fn apply_all(&self, events: &[ModelEvent]) -> Arc<AppState> {
        let mut published = None;
        self.publisher.send_if_modified(|current| {
            let next = events.iter().fold((**current).clone(), |state, event| {
                tracing::trace!(event = event.kind_name(), "Reducing event");
                AppReducer::reduce(state, event)
            });
            let changed = next != **current;
            if changed {
                *current = Arc::new(next);
            }
            published = Some(current.clone());
            changed
        });
        published.unwrap_or_else(|| self.snapshot())
    }

    /// Reduce an event given in wire form (`{"type": ..., "payload": ...}`).
    ///
    /// Unknown kinds and malformed payloads leave the snapshot unchanged.
    /// Returns whether the event was recognized.
    pub fn apply_raw(&self, value: Value) -> bool {
        match ModelEvent::from_wire(value) {
            Ok(event) => {
                self.apply(&event);
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "Ignoring unrecognized event");
                false
            }
        }
    }
}
