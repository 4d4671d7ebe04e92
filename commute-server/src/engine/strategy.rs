//! The fallback ladder.

use std::fmt;

use serde::Serialize;

use crate::domain::RecommendationResult;

/// Where a recommendation came from, from most to least accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Server-side computation by the primary backend
    PrimaryBackend,
    /// Geocoding plus road and transit routing
    DirectComputation,
    /// Geocoding plus great-circle distance at assumed speeds
    GeodesicEstimate,
    /// Canned figures; cannot fail
    MockPlaceholder,
}

impl Strategy {
    /// Strategies that can fail, in the order they are tried.
    ///
    /// [`Strategy::MockPlaceholder`] follows when all of them fail.
    pub const FALLIBLE: [Strategy; 3] = [
        Strategy::PrimaryBackend,
        Strategy::DirectComputation,
        Strategy::GeodesicEstimate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::PrimaryBackend => "primary_backend",
            Strategy::DirectComputation => "direct_computation",
            Strategy::GeodesicEstimate => "geodesic_estimate",
            Strategy::MockPlaceholder => "mock_placeholder",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recommendation tagged with the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub strategy: Strategy,
    pub result: RecommendationResult,
}

impl Recommendation {
    pub fn new(strategy: Strategy, result: RecommendationResult) -> Self {
        Self { strategy, result }
    }
}
