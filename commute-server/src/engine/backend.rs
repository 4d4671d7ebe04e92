//! Client for the primary recommendation backend.
//!
//! The backend computes the whole recommendation server-side. Its answer is
//! deserialized into [`RecommendationResult`] and checked for consistency
//! before it is trusted; anything else counts as a failure of this strategy.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;

use crate::domain::RecommendationResult;

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Errors from the primary backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// No base URL was configured
    #[error("primary backend not configured")]
    NotConfigured,

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned an error status
    #[error("backend error {status}: {message}")]
    Api { status: u16, message: String },

    /// Body was not a recommendation result
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Suggested entry does not match the result list
    #[error("inconsistent recommendation: suggested {suggested} not among results")]
    Inconsistent { suggested: String },

    /// The client can no longer issue requests
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend; `None` disables the strategy
    pub base_url: Option<String>,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// A config with no backend.
    pub fn new() -> Self {
        Self {
            base_url: None,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set the backend base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    from: &'a str,
    to: &'a str,
}

/// Primary backend client.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Option<String>,
    semaphore: Arc<Semaphore>,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Whether a backend URL is configured.
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Ask the backend for a recommendation.
    pub async fn analyze(&self, from: &str, to: &str) -> Result<RecommendationResult, BackendError> {
        let base_url = self.base_url.as_deref().ok_or(BackendError::NotConfigured)?;

        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| BackendError::Unavailable("semaphore closed".to_string()))?;

        let url = format!("{base_url}/api/commute/analyze");
        let response = self
            .http
            .post(&url)
            .json(&AnalyzeRequest { from, to })
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let result: RecommendationResult =
            serde_json::from_str(&body).map_err(|e| BackendError::Json {
                message: e.to_string(),
            })?;

        if !result.is_consistent() {
            return Err(BackendError::Inconsistent {
                suggested: result.suggested_mode.to_string(),
            });
        }

        Ok(result)
    }
}
