//! OSRM HTTP client with local-then-public selection.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{Coordinate, RouteMetrics};

use super::error::RoutingError;
use super::types::{Profile, RouteResponse, pick_route};

/// Default public OSRM demo server.
pub const DEFAULT_PUBLIC_URL: &str = "https://router.project-osrm.org";

/// Default address of a locally hosted OSRM.
pub const DEFAULT_LOCAL_URL: &str = "http://localhost:5000";

/// Query string sent with every route request.
const ROUTE_QUERY: &str = "overview=false&alternatives=true&steps=false&annotations=speed";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the road router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Public router, always available as the last resort
    pub public_url: String,
    /// Locally hosted router
    pub local_url: String,
    /// Try `local_url` before `public_url`
    pub use_local: bool,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RouterConfig {
    /// Create a config that only uses the public router.
    pub fn new() -> Self {
        Self {
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            local_url: DEFAULT_LOCAL_URL.to_string(),
            use_local: false,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set the public router URL.
    pub fn with_public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = url.into();
        self
    }

    /// Set the local router URL.
    pub fn with_local_url(mut self, url: impl Into<String>) -> Self {
        self.local_url = url.into();
        self
    }

    /// Toggle trying the local router first.
    pub fn with_use_local(mut self, use_local: bool) -> Self {
        self.use_local = use_local;
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

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// OSRM `/route/v1` client.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    public_url: String,
    local_url: Option<String>,
    semaphore: Arc<Semaphore>,
}

impl OsrmClient {
    /// Create a new router client with the given configuration.
    pub fn new(config: RouterConfig) -> Result<Self, RoutingError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let local_url = config
            .use_local
            .then(|| config.local_url.trim_end_matches('/').to_string());

        Ok(Self {
            http,
            public_url: config.public_url.trim_end_matches('/').to_string(),
            local_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    fn route_url(base: &str, profile: Profile, from: Coordinate, to: Coordinate) -> String {
        format!(
            "{}/route/v1/{}/{};{}?{}",
            base,
            profile.as_str(),
            from.lon_lat(),
            to.lon_lat(),
            ROUTE_QUERY
        )
    }

    /// Route between two points and return the most highway-like route's
    /// distance (2 decimal km) and time (whole minutes).
    ///
    /// If a local router is configured it is tried first; a transport error
    /// or non-success status from it falls through to the public router.
    pub async fn route(
        &self,
        profile: Profile,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<RouteMetrics, RoutingError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RoutingError::Unavailable("semaphore closed".to_string()))?;

        let local = match &self.local_url {
            Some(base) => {
                let url = Self::route_url(base, profile, from, to);
                match self.http.get(&url).send().await {
                    Ok(resp) if resp.status().is_success() => Some(resp),
                    Ok(resp) => {
                        debug!(%profile, status = resp.status().as_u16(), "local router refused, using public");
                        None
                    }
                    Err(e) => {
                        debug!(%profile, error = %e, "local router unreachable, using public");
                        None
                    }
                }
            }
            None => None,
        };

        let response = match local {
            Some(resp) => resp,
            None => {
                let url = Self::route_url(&self.public_url, profile, from, to);
                self.http.get(&url).send().await?
            }
        };

        let status = response.status();
        let body = response.text().await?;

        let parsed: RouteResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(RoutingError::Api {
                    status: status.as_u16(),
                    message: body.chars().take(500).collect(),
                });
            }
            Err(e) => {
                return Err(RoutingError::Json {
                    message: e.to_string(),
                });
            }
        };

        if parsed.code != "Ok" {
            return Err(RoutingError::Rejected {
                code: parsed.code,
                message: parsed.message,
            });
        }

        let route = pick_route(&parsed.routes).ok_or(RoutingError::NoRoute)?;
        let metrics = RouteMetrics::from_meters_secs(route.distance, route.duration);

        debug!(
            %profile,
            alternatives = parsed.routes.len(),
            distance_km = metrics.distance_km,
            time_mins = metrics.time_mins,
            "routed"
        );
        Ok(metrics)
    }
}
