//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Mode, ModeResult};
use crate::engine::{Recommendation, Strategy};
use crate::estimate::alternatives;

/// Request for a mode recommendation.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Free-text origin
    pub from: String,

    /// Free-text destination
    pub to: String,
}

/// Recommendation as shown to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationView {
    /// Mode of the suggested entry
    pub suggested_mode: Mode,

    /// The suggested entry
    pub suggested: ModeResult,

    /// Every displayable mode
    pub results: Vec<ModeResult>,

    /// Up to three other options worth showing
    pub alternatives: Vec<ModeResult>,

    /// 0 to 100 score of the suggestion's emissions
    pub eco_score: u8,

    /// Strategy that produced the figures
    pub source: Strategy,
}

impl From<Recommendation> for RecommendationView {
    fn from(rec: Recommendation) -> Self {
        let alternatives = alternatives(&rec.result);
        let eco_score = rec.result.eco_score();
        Self {
            suggested_mode: rec.result.suggested_mode,
            suggested: rec.result.suggested,
            results: rec.result.results,
            alternatives,
            eco_score,
            source: rec.strategy,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub time: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
