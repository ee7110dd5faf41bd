//! Model-View-Intent primitives.
//!
//! Unidirectional data flow between callers, the dispatcher and the reducers:
//!
//! ```text
//! Intent ──→ Dispatcher ──→ Event ──→ Reducer ──→ State ──→ Observers
//!    ↑                                                        │
//!    └────────────────────────────────────────────────────────┘
//! ```
//!
//! - **Intent**: a caller's request, consumed once by the dispatcher
//! - **Event**: the outcome of an intent, consumed once by a reducer
//! - **State**: immutable snapshot, replaced on every event
//! - **Reducer**: pure function `(State, Event) -> State`

mod event;
mod intent;
mod reducer;
mod state;

pub use event::Event;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
