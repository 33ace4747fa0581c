use async_trait::async_trait;
use thiserror::Error;

pub mod http;
pub mod retry;
pub mod types;

use self::types::{BehaviorRequest, BehaviorResponse, HeatmapRequest, HeatmapResponse};

/// Outcome taxonomy for a remote exchange. `Validation` never touches the
/// network; `Remote` carries the service's structured `{detail}` payload when
/// one was present; `Transport` is connectivity-level failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("remote error ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Remote { status: u16, detail: Option<String> },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Both endpoints are idempotent, so retry is safe for transient outcomes.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Validation(_) => false,
            ApiError::Remote { status, .. } => {
                matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            ApiError::Transport(err) => err.is_timeout() || err.is_connect() || err.is_request(),
        }
    }
}

/// Seam to the remote analysis engine. The engine computes all domain values;
/// the client only ships coordinates and renders what comes back.
#[async_trait]
pub trait AnalysisBackend {
    async fn fetch_heatmap(&self, req: &HeatmapRequest) -> Result<HeatmapResponse, ApiError>;
    async fn fetch_behavior(&self, req: &BehaviorRequest) -> Result<BehaviorResponse, ApiError>;
    async fn health(&self) -> Result<(), ApiError>;
}
