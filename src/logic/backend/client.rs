//! Backend API Client
//!
//! HTTP client for the vulnerability-analysis inference backend.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::types::{
    AnalyzeFunctionRequest, AnalyzeRequest, AnalyzeResponse, ApiInfo, FunctionPredictionResponse,
    HealthStatus, ModelsListResponse, VulnerabilitiesListResponse,
};
use crate::constants;

/// Backend connection configuration
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: constants::get_backend_url(),
            timeout_secs: constants::get_timeout_secs(),
        }
    }
}

/// Backend client errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Backend unreachable: refused connection, DNS failure, or timeout.
    #[error("backend is not reachable: {0}")]
    Unreachable(String),
    /// The backend answered with a non-success HTTP status. The payload is
    /// kept intact so callers can read FastAPI-style `detail` messages.
    #[error("backend returned HTTP {status}")]
    Http { status: u16, body: String },
    /// The backend answered 2xx but the body did not match the expected shape.
    #[error("failed to decode backend response: {0}")]
    Decode(String),
    /// A transport failure that is neither a refusal nor a timeout.
    #[error("request failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// HTTP status code, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `detail` field of a FastAPI-style error payload, if present.
    pub fn detail(&self) -> Option<String> {
        match self {
            ApiError::Http { body, .. } => serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from)),
            _ => None,
        }
    }
}

/// Typed client over the backend HTTP API.
///
/// Construct one per dashboard instance and pass it by reference; base URL
/// and timeout are injected so tests and the CLI can point it anywhere. The
/// client keeps no state across calls: no retries, no deduplication, no
/// caching.
pub struct BackendClient {
    config: BackendConfig,
    http_client: reqwest::Client,
}

impl BackendClient {
    pub fn new(mut config: BackendConfig) -> Self {
        while config.base_url.ends_with('/') {
            config.base_url.pop();
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, http_client }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Check backend health
    pub async fn get_health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health").await
    }

    /// List trained models
    pub async fn get_models(&self) -> Result<ModelsListResponse, ApiError> {
        self.get_json("/models").await
    }

    /// List vulnerability classes the backend can detect
    pub async fn get_vulnerabilities(&self) -> Result<VulnerabilitiesListResponse, ApiError> {
        self.get_json("/vulnerabilities").await
    }

    /// Backend self-description
    pub async fn get_info(&self) -> Result<ApiInfo, ApiError> {
        self.get_json("/info").await
    }

    /// Analyze a whole contract
    pub async fn analyze_contract(
        &self,
        request: &AnalyzeRequest,
    ) -> Result<AnalyzeResponse, ApiError> {
        self.post_json("/analyze", request).await
    }

    /// Analyze a single function
    pub async fn analyze_function(
        &self,
        request: &AnalyzeFunctionRequest,
    ) -> Result<FunctionPredictionResponse, ApiError> {
        self.post_json("/analyze-function", request).await
    }

    /// Optimistic connectivity probe: calls `get_health` and swallows every
    /// failure into `false`. Never use the result for correctness decisions.
    pub async fn test_connection(&self) -> bool {
        self.get_health().await.is_ok()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        log::debug!("API request: GET {}", path);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            log::error!("API request failed: GET {}: {}", path, e);
            normalize_transport_error(&e)
        })?;

        Self::decode(path, response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        log::debug!("API request: POST {}", path);

        let response = self.http_client.post(&url).json(body).send().await.map_err(|e| {
            log::error!("API request failed: POST {}: {}", path, e);
            normalize_transport_error(&e)
        })?;

        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                log::error!("API response decode failed: {}: {}", path, e);
                ApiError::Decode(e.to_string())
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            log::error!("API error response: {} ({}): {}", path, status.as_u16(), body);
            Err(ApiError::Http { status: status.as_u16(), body })
        }
    }
}

/// Collapse transport-level failures into the unreachable-vs-other split.
/// Refused connections and timeouts both mean "backend not running" to the
/// user; anything else stays unclassified.
fn normalize_transport_error(err: &reqwest::Error) -> ApiError {
    if err.is_timeout() || err.is_connect() {
        ApiError::Unreachable(err.to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}
