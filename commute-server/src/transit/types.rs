//! OpenTripPlanner plan response types.

use std::fmt;

use serde::Deserialize;

use crate::domain::{RouteMetrics, round_to, secs_to_mins};

/// Transit class passed as `transitModes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitMode {
    Rail,
    Subway,
    Bus,
}

impl TransitMode {
    pub const ALL: [TransitMode; 3] = [TransitMode::Rail, TransitMode::Subway, TransitMode::Bus];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransitMode::Rail => "RAIL",
            TransitMode::Subway => "SUBWAY",
            TransitMode::Bus => "BUS",
        }
    }
}

impl fmt::Display for TransitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanResponse {
    #[serde(default)]
    pub plan: Option<Plan>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
}

/// One door-to-door itinerary. Duration in seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct Itinerary {
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub legs: Vec<ItineraryLeg>,
}

/// Walking or riding leg. Distance in metres.
#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryLeg {
    #[serde(default)]
    pub distance: Option<f64>,
}

impl PlanResponse {
    /// The first itinerary, if the planner found any.
    pub fn first_itinerary(&self) -> Option<&Itinerary> {
        self.plan.as_ref()?.itineraries.first()
    }
}

impl Itinerary {
    /// Summed leg distance (2 decimal km) and rounded duration.
    pub fn metrics(&self) -> RouteMetrics {
        let meters: f64 = self.legs.iter().filter_map(|l| l.distance).sum();
        RouteMetrics::new(round_to(meters / 1000.0, 2), secs_to_mins(self.duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_wire_names() {
        assert_eq!(TransitMode::Rail.as_str(), "RAIL");
        assert_eq!(TransitMode::Subway.as_str(), "SUBWAY");
        assert_eq!(TransitMode::Bus.as_str(), "BUS");
    }

    #[test]
    fn sums_legs_and_ignores_missing_distance() {
        let json = r#"{"plan": {"itineraries": [
            {"duration": 2730, "legs": [{"distance": 420.5}, {"distance": 15000}, {}, {"distance": 380}]}
        ]}}"#;
        let plan: PlanResponse = serde_json::from_str(json).unwrap();
        let m = plan.first_itinerary().unwrap().metrics();
        assert_eq!(m, RouteMetrics::new(15.8, 46));
    }

    #[test]
    fn missing_plan_has_no_itinerary() {
        let plan: PlanResponse = serde_json::from_str(r#"{"error": {"id": 404}}"#).unwrap();
        assert!(plan.first_itinerary().is_none());

        let plan: PlanResponse = serde_json::from_str(r#"{"plan": {"itineraries": []}}"#).unwrap();
        assert!(plan.first_itinerary().is_none());
    }
}
