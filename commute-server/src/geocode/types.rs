//! Geocoder response types and candidate selection.

use serde::Deserialize;

use crate::domain::Coordinate;

use super::error::ResolutionError;

/// Place types preferred over whatever the geocoder ranks first.
const SETTLEMENT_TYPES: &[&str] = &[
    "city",
    "town",
    "village",
    "municipality",
    "hamlet",
    "suburb",
];

/// One search hit. Coordinates arrive as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub lat: String,
    pub lon: String,

    /// Feature class; `jsonv2` calls it `category`.
    #[serde(default, alias = "category")]
    pub class: Option<String>,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,
}

impl Candidate {
    /// Whether this candidate is a settlement rather than a building, road, etc.
    pub fn is_settlement(&self) -> bool {
        self.class.as_deref() == Some("place")
            && self
                .kind
                .as_deref()
                .is_some_and(|k| SETTLEMENT_TYPES.contains(&k))
    }

    /// Parse the candidate's position.
    pub fn coordinate(&self) -> Result<Coordinate, ResolutionError> {
        let lat = parse_degrees(&self.lat)?;
        let lon = parse_degrees(&self.lon)?;
        Ok(Coordinate::new(lat, lon))
    }
}

fn parse_degrees(s: &str) -> Result<f64, ResolutionError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ResolutionError::InvalidCoordinate {
            value: s.to_string(),
        })
}

/// Pick the first settlement, else the first candidate.
pub fn select_candidate(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates
        .iter()
        .find(|c| c.is_settlement())
        .or_else(|| candidates.first())
}
