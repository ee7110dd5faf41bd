//! Per-intent failure policy.

use crate::api::ApiError;
use crate::dispatch::error::DispatchError;
use crate::model::{IntentKind, ModelEvent};

/// What happens to the caller when an intent's remote effect fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// No remote effect; the intent cannot fail.
    Infallible,
    /// Failure drops the intent: no events, nothing returned to the caller.
    Silent,
    /// Failure is returned to the caller, no events are produced.
    Surfaced,
}

impl IntentKind {
    pub fn failure_policy(self) -> FailurePolicy {
        match self {
            IntentKind::EnableModel
            | IntentKind::RefreshClock
            | IntentKind::SetSearchInProgress
            | IntentKind::SetRelevancy => FailurePolicy::Infallible,
            IntentKind::CreateModel
            | IntentKind::UpdateModel
            | IntentKind::ListModels
            | IntentKind::FetchModelStats => FailurePolicy::Silent,
            IntentKind::Search | IntentKind::SaveSeedUrls => FailurePolicy::Surfaced,
        }
    }
}

impl FailurePolicy {
    /// Turn the raw effect outcome into what the caller sees.
    pub fn resolve(
        self,
        intent: IntentKind,
        outcome: Result<Vec<ModelEvent>, ApiError>,
    ) -> Result<Vec<ModelEvent>, DispatchError> {
        let source = match outcome {
            Ok(events) => return Ok(events),
            Err(source) => source,
        };

        match self {
            FailurePolicy::Surfaced => {
                tracing::debug!(intent = %intent, error = %source, "Surfacing effect failure");
                Err(DispatchError::Effect { intent, source })
            }
            FailurePolicy::Silent | FailurePolicy::Infallible => {
                tracing::warn!(
                    intent = %intent,
                    error_type = source.error_type(),
                    error = %source,
                    "Remote effect failed, dropping intent"
                );
                Ok(Vec::new())
            }
        }
    }
}
