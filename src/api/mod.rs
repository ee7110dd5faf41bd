//! Client side of the remote explorer service.

mod client;
mod endpoint;
mod error;

use async_trait::async_trait;
use serde_json::Value;

use crate::model::RelevancyMap;

pub use client::ExplorerClient;
pub use endpoint::Endpoint;
pub use error::ApiError;

/// Remote operations the dispatcher depends on.
///
/// Response payloads are opaque: they are passed through verbatim as
/// event payloads and never validated here.
#[async_trait]
pub trait ExplorerApi: Send + Sync {
    /// Create a named model. The acknowledgement body is ignored.
    async fn create_model(&self, name: &str) -> Result<(), ApiError>;

    /// Post annotations for a model and return its updated stats.
    async fn update_model(&self, name: &str, annotations: &RelevancyMap)
        -> Result<Value, ApiError>;

    async fn list_models(&self) -> Result<Value, ApiError>;

    async fn search(&self, model: &str, term: &str) -> Result<Value, ApiError>;

    /// Upload seed URLs for a model. The acknowledgement body is ignored.
    async fn upload_seed_urls(&self, model: &str, urls: &[String]) -> Result<(), ApiError>;

    async fn model_stats(&self, model: &str) -> Result<Value, ApiError>;
}
