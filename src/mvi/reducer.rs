//! Reducer trait.

use super::event::Event;
use super::state::State;

/// Reducer transforms state based on events.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Event) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The event type this reducer handles.
    type Event: Event;

    /// Fold an event into the state and return the next state.
    ///
    /// Must not fail and must not perform side effects.
    fn reduce(state: Self::State, event: &Self::Event) -> Self::State;
}
