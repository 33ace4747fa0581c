use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::retry::{retry_exchange, RetryConfig};
use crate::api::types::{
    BehaviorRequest, BehaviorResponse, ErrorBody, HeatmapRequest, HeatmapResponse,
};
use crate::api::{AnalysisBackend, ApiError};
use crate::state::Config;

/// HTTP implementation of the analysis seam.
pub struct HttpBackend {
    client: Client,
    base: String,
    retry: RetryConfig,
}

impl HttpBackend {
    pub fn new(cfg: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base: cfg.api_base.trim_end_matches('/').to_string(),
            retry: RetryConfig::from_config(cfg),
        })
    }

    /// One POST exchange with the three-way outcome classification: transport
    /// failure, structured non-2xx payload, or parsed success body.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        let resp = self.client.post(&url).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|e| e.detail)
                .filter(|d| !d.is_empty());
            return Err(ApiError::Remote { status: status.as_u16(), detail });
        }
        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    async fn fetch_heatmap(&self, req: &HeatmapRequest) -> Result<HeatmapResponse, ApiError> {
        retry_exchange(&self.retry, "heatmap", || {
            self.post_json("/api/analysis/heatmap", req)
        })
        .await
    }

    async fn fetch_behavior(&self, req: &BehaviorRequest) -> Result<BehaviorResponse, ApiError> {
        retry_exchange(&self.retry, "behavior", || {
            self.post_json("/api/analysis/behavior", req)
        })
        .await
    }

    async fn health(&self) -> Result<(), ApiError> {
        let url = format!("{}/health", self.base);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Remote { status: resp.status().as_u16(), detail: None });
        }
        Ok(())
    }
}
