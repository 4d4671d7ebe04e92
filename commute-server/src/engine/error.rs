//! Strategy failure type.

use crate::geocode::ResolutionError;
use crate::routing::RoutingError;

use super::backend::BackendError;

/// Why one strategy of the fallback chain gave up.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    /// Primary backend failed or is not configured
    #[error("backend: {0}")]
    Backend(#[from] BackendError),

    /// An endpoint could not be geocoded
    #[error("place resolution: {0}")]
    Resolution(#[from] ResolutionError),

    /// A road profile could not be routed
    #[error("road routing: {0}")]
    Routing(#[from] RoutingError),

    /// Every estimated mode was infeasible
    #[error("no feasible mode")]
    NoFeasibleMode,
}

impl StrategyError {
    /// True when the strategy was skipped rather than attempted.
    pub fn is_skip(&self) -> bool {
        matches!(self, StrategyError::Backend(BackendError::NotConfigured))
    }
}
