use thiserror::Error;

use crate::api::ApiError;
use crate::model::IntentKind;

/// Failure reported back to the caller of an intent.
///
/// Only intents with a surfaced failure policy produce this error.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{intent} failed: {source}")]
    Effect {
        intent: IntentKind,
        #[source]
        source: ApiError,
    },
}

impl DispatchError {
    pub fn intent(&self) -> IntentKind {
        match self {
            DispatchError::Effect { intent, .. } => *intent,
        }
    }
}
