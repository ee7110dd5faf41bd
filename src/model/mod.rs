//! Explorer domain model: intents, events, snapshots and their reducers.

mod event;
mod intent;
mod reducer;
mod relevancy;
mod state;

pub use event::ModelEvent;
pub use intent::{IntentKind, ModelIntent};
pub use reducer::{AppReducer, ClockReducer, ModelReducer, SearchReducer};
pub use relevancy::{RelevancyMap, SLOT_COUNT};
pub use state::{AppState, ClockState, ModelState, SearchState};
