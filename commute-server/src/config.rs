//! Server configuration from environment.

use std::env;

use crate::engine::{BackendClient, BackendConfig, BackendError, Engine, HttpEngine};
use crate::geocode::{GeocodeConfig, NominatimClient, ResolutionError};
use crate::routing::{OsrmClient, RouterConfig, RoutingError};
use crate::transit::{OtpClient, TransitConfig};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors building the HTTP clients at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("geocoder client: {0}")]
    Geocode(#[from] ResolutionError),

    #[error("router client: {0}")]
    Routing(#[from] RoutingError),

    #[error("transit client: {0}")]
    Transit(#[from] reqwest::Error),

    #[error("backend client: {0}")]
    Backend(#[from] BackendError),
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub geocode: GeocodeConfig,
    pub router: RouterConfig,
    pub transit: TransitConfig,
    pub backend: BackendConfig,
}

impl AppConfig {
    /// Read `COMMUTE_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let timeout = var("COMMUTE_HTTP_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let use_local = var("COMMUTE_USE_LOCAL_OSRM")
            .is_some_and(|s| s == "1" || s.eq_ignore_ascii_case("true"));

        let mut geocode = GeocodeConfig::new().with_timeout(timeout);
        if let Some(url) = var("COMMUTE_NOMINATIM_URL") {
            geocode = geocode.with_base_url(url);
        }

        let mut router = RouterConfig::new()
            .with_use_local(use_local)
            .with_timeout(timeout);
        if let Some(url) = var("COMMUTE_OSRM_PUBLIC_URL") {
            router = router.with_public_url(url);
        }
        if let Some(url) = var("COMMUTE_OSRM_LOCAL_URL") {
            router = router.with_local_url(url);
        }

        let mut transit = TransitConfig::new().with_timeout(timeout);
        if let Some(url) = var("COMMUTE_OTP_URL") {
            transit = transit.with_base_url(url);
        }

        let mut backend = BackendConfig::new().with_timeout(timeout);
        if let Some(url) = var("COMMUTE_API_BASE_URL") {
            backend = backend.with_base_url(url);
        }

        Self {
            port: var("COMMUTE_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            geocode,
            router,
            transit,
            backend,
        }
    }

    /// Build the engine over the HTTP clients.
    pub fn build_engine(&self) -> Result<HttpEngine, ConfigError> {
        Ok(Engine::new(
            BackendClient::new(self.backend.clone())?,
            NominatimClient::new(self.geocode.clone())?,
            OsrmClient::new(self.router.clone())?,
            OtpClient::new(self.transit.clone())?,
        ))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
