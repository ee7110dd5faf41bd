//! Durable key-value side-store.
//!
//! Only the enabled model name is persisted, under [`STATE_KEY`]. Writes
//! are best effort: callers log and discard failures.

mod file;
mod memory;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key under which [`PersistedState`] is stored.
pub const STATE_KEY: &str = "state";

/// Errors that can occur while reading or writing the side-store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode or decode stored value: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String-keyed store for serialized values.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The part of the snapshot that survives restarts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub current_model: Option<String>,
}

impl PersistedState {
    pub fn for_model(name: &str) -> Self {
        Self {
            current_model: Some(name.to_string()),
        }
    }

    /// Write this state under [`STATE_KEY`].
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(self)?;
        store.set(STATE_KEY, &serialized)
    }

    /// Read back the persisted state.
    ///
    /// Best effort: missing, unreadable or corrupt entries yield `None`.
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        let raw = match store.get(STATE_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read persisted state");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring corrupt persisted state");
                None
            }
        }
    }
}
