//! OpenTripPlanner `plan` client.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{Coordinate, RouteMetrics};

use super::types::{PlanResponse, TransitMode};

/// Default address of a locally hosted OpenTripPlanner.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the transit planner client.
#[derive(Debug, Clone)]
pub struct TransitConfig {
    /// Base URL of the OpenTripPlanner instance
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TransitConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
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

impl Default for TransitConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort transit planner client.
#[derive(Debug, Clone)]
pub struct OtpClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl OtpClient {
    pub fn new(config: TransitConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Plan one itinerary using `mode` plus walking.
    ///
    /// Returns `None` whenever the planner cannot give an answer.
    pub async fn plan(
        &self,
        from: Coordinate,
        to: Coordinate,
        mode: TransitMode,
    ) -> Option<RouteMetrics> {
        let _permit = self.semaphore.acquire().await.ok()?;

        let url = format!("{}/otp/routers/default/plan", self.base_url);
        let params = [
            ("fromPlace", from.lat_lon()),
            ("toPlace", to.lat_lon()),
            ("mode", "TRANSIT,WALK".to_string()),
            ("transitModes", mode.as_str().to_string()),
            ("numItineraries", "1".to_string()),
        ];

        let response = match self.http.get(&url).query(&params).send().await {
            Ok(resp) => resp,
            Err(e) => {
                debug!(%mode, error = %e, "transit planner unreachable");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(%mode, status = response.status().as_u16(), "transit planner refused");
            return None;
        }

        let plan: PlanResponse = match response.json().await {
            Ok(plan) => plan,
            Err(e) => {
                debug!(%mode, error = %e, "transit plan unreadable");
                return None;
            }
        };

        let metrics = plan.first_itinerary().map(|itinerary| itinerary.metrics());
        if metrics.is_none() {
            debug!(%mode, "no transit itinerary");
        }
        metrics
    }
}
