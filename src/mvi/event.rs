//! Base trait for events.

/// Marker trait for event objects.
///
/// Events are produced by the dispatcher once an intent's effect has
/// completed and are folded into state by reducers.
pub trait Event: Clone + Send + 'static {}
