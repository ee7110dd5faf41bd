//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent caller requests: fetch data, change a remote model,
/// or record a value that is already known locally. They are consumed by
/// the dispatcher, which turns them into events.
pub trait Intent: Send + 'static {}
