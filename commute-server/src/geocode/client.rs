//! Nominatim search client.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::Coordinate;

use super::error::ResolutionError;
use super::locale::{LocaleBiasPolicy, normalize_place};
use super::types::{Candidate, select_candidate};

/// Default base URL for the public Nominatim instance.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Candidates requested per lookup.
const CANDIDATE_LIMIT: u8 = 5;

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Nominatim rejects requests without an identifying user agent.
const DEFAULT_USER_AGENT: &str = concat!("commute-server/", env!("CARGO_PKG_VERSION"));

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL of the Nominatim-compatible service
    pub base_url: String,
    /// User agent sent with every request
    pub user_agent: String,
    /// Country biasing rules
    pub locale_policy: LocaleBiasPolicy,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a config for the public service with the India bias policy.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            locale_policy: LocaleBiasPolicy::india(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Replace the country biasing rules.
    pub fn with_locale_policy(mut self, policy: LocaleBiasPolicy) -> Self {
        self.locale_policy = policy;
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

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves place names through a Nominatim-compatible `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
    locale_policy: Arc<LocaleBiasPolicy>,
    semaphore: Arc<Semaphore>,
}

impl NominatimClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeocodeConfig) -> Result<Self, ResolutionError> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            ResolutionError::Unavailable("invalid user agent".to_string())
        })?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            locale_policy: Arc::new(config.locale_policy),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Resolve free text to a coordinate.
    ///
    /// The query is normalised and, when the locale policy recognises it,
    /// restricted to one country. Settlements are preferred over other
    /// feature types.
    pub async fn geocode(&self, query: &str) -> Result<Coordinate, ResolutionError> {
        let normalized = normalize_place(query);
        let country = self.locale_policy.country_for(&normalized);

        let candidates = self.search(&normalized, country).await?;
        let pick = select_candidate(&candidates).ok_or_else(|| ResolutionError::NoCandidates {
            query: normalized.clone(),
        })?;

        let coordinate = pick.coordinate()?;
        debug!(
            query = %normalized,
            country = country.unwrap_or("-"),
            candidates = candidates.len(),
            place = pick.display_name.as_deref().unwrap_or("-"),
            %coordinate,
            "resolved place"
        );
        Ok(coordinate)
    }

    /// Run one raw search, optionally restricted to a country code.
    pub async fn search(
        &self,
        query: &str,
        country: Option<&str>,
    ) -> Result<Vec<Candidate>, ResolutionError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| ResolutionError::Unavailable("semaphore closed".to_string()))?;

        let url = format!("{}/search", self.base_url);

        let mut params = vec![
            ("q", query.to_string()),
            ("format", "jsonv2".to_string()),
            ("limit", CANDIDATE_LIMIT.to_string()),
            ("addressdetails", "1".to_string()),
            ("accept-language", "en".to_string()),
        ];
        if let Some(cc) = country {
            params.push(("countrycodes", cc.to_string()));
        }

        let response = self.http.get(&url).query(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResolutionError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ResolutionError::Json {
            message: e.to_string(),
        })
    }
}
