use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Serialize;
use serde_json::Value;

use crate::api::endpoint::Endpoint;
use crate::api::error::ApiError;
use crate::api::ExplorerApi;
use crate::config::ServiceConfig;
use crate::model::RelevancyMap;

/// HTTP client for the explorer service.
///
/// One attempt per call: no retries, timeouts come from [`ServiceConfig`].
pub struct ExplorerClient {
    client: Client,
    base_url: Url,
    api_prefix: String,
}

impl ExplorerClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url,
            api_prefix: config.api_prefix.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get(&self, endpoint: Endpoint<'_>) -> Result<Response, ApiError> {
        let url = endpoint.url(&self.base_url, &self.api_prefix)?;
        self.execute(endpoint, self.client.get(url)).await
    }

    async fn post<B>(&self, endpoint: Endpoint<'_>, body: &B) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = endpoint.url(&self.base_url, &self.api_prefix)?;
        self.execute(endpoint, self.client.post(url).json(body)).await
    }

    async fn execute(
        &self,
        endpoint: Endpoint<'_>,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        tracing::debug!(endpoint = %endpoint, "Sending request");

        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        tracing::trace!(endpoint = %endpoint, status = status.as_u16(), "Response received");
        Ok(response)
    }

    async fn decode(endpoint: Endpoint<'_>, response: Response) -> Result<Value, ApiError> {
        response
            .json::<Value>()
            .await
            .map_err(|source| ApiError::Decode {
                endpoint: endpoint.to_string(),
                source,
            })
    }
}

#[async_trait]
impl ExplorerApi for ExplorerClient {
    async fn create_model(&self, name: &str) -> Result<(), ApiError> {
        self.get(Endpoint::CreateModel { name }).await?;
        Ok(())
    }

    async fn update_model(
        &self,
        name: &str,
        annotations: &RelevancyMap,
    ) -> Result<Value, ApiError> {
        let endpoint = Endpoint::UpdateModel { name };
        let response = self.post(endpoint, annotations).await?;
        Self::decode(endpoint, response).await
    }

    async fn list_models(&self) -> Result<Value, ApiError> {
        let endpoint = Endpoint::ListModels;
        let response = self.get(endpoint).await?;
        Self::decode(endpoint, response).await
    }

    async fn search(&self, model: &str, term: &str) -> Result<Value, ApiError> {
        let endpoint = Endpoint::Search { model, term };
        let response = self.get(endpoint).await?;
        Self::decode(endpoint, response).await
    }

    async fn upload_seed_urls(&self, model: &str, urls: &[String]) -> Result<(), ApiError> {
        self.post(Endpoint::SeedUpload { model }, urls).await?;
        Ok(())
    }

    async fn model_stats(&self, model: &str) -> Result<Value, ApiError> {
        let endpoint = Endpoint::ModelStats { model };
        let response = self.get(endpoint).await?;
        Self::decode(endpoint, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_base_url() {
        let config = ServiceConfig {
            base_url: "not a url".to_string(),
            ..ServiceConfig::default()
        };
        assert!(matches!(
            ExplorerClient::new(&config),
            Err(ApiError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn builds_from_default_config() {
        let client = ExplorerClient::new(&ServiceConfig::default()).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    }
}
