//! Per-mode metrics and the recommendation result.

use serde::{Deserialize, Serialize};

use super::Mode;

/// `timeMins` value marking a mode as infeasible for the trip.
pub const INFEASIBLE_MINS: u32 = 999_999;

/// Round to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let m = 10f64.powi(places);
    (value * m).round() / m
}

/// Convert seconds to whole minutes, rounding to nearest.
pub fn secs_to_mins(secs: f64) -> u32 {
    (secs / 60.0).round().max(0.0) as u32
}

/// Distance and time for one travel profile between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetrics {
    pub distance_km: f64,
    pub time_mins: u32,
}

impl RouteMetrics {
    pub fn new(distance_km: f64, time_mins: u32) -> Self {
        Self {
            distance_km,
            time_mins,
        }
    }

    /// Build from raw router output in metres and seconds.
    ///
    /// Distance is rounded to 2 decimal km, time to the nearest minute.
    pub fn from_meters_secs(meters: f64, secs: f64) -> Self {
        Self {
            distance_km: round_to(meters.max(0.0) / 1000.0, 2),
            time_mins: secs_to_mins(secs),
        }
    }
}

/// Estimated figures for one transportation mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeResult {
    pub mode: Mode,
    pub distance_km: f64,
    pub time_mins: u32,
    pub carbon_kg: f64,
    #[serde(rename = "energySavedKWh")]
    pub energy_saved_kwh: f64,
}

impl ModeResult {
    /// Whether this entry can be ranked and displayed as an option.
    pub fn is_feasible(&self) -> bool {
        self.time_mins < INFEASIBLE_MINS
    }

    /// Suggestion score: lower is better.
    pub fn score(&self) -> f64 {
        self.carbon_kg * 2.0 + self.time_mins as f64
    }
}

/// The engine's answer: every displayed mode plus the suggested one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub suggested_mode: Mode,
    pub suggested: ModeResult,
    pub results: Vec<ModeResult>,
}

impl RecommendationResult {
    /// Build a result whose suggestion is `suggested`.
    pub fn new(suggested: ModeResult, results: Vec<ModeResult>) -> Self {
        Self {
            suggested_mode: suggested.mode,
            suggested,
            results,
        }
    }

    /// Check that `suggested` is the entry of `results` named by `suggested_mode`.
    pub fn is_consistent(&self) -> bool {
        self.suggested.mode == self.suggested_mode
            && self
                .results
                .iter()
                .any(|r| r.mode == self.suggested_mode && *r == self.suggested)
    }

    /// 0 to 100 display score for the suggested mode: `100 - carbonKg * 10`.
    pub fn eco_score(&self) -> u8 {
        let raw = 100.0 - (self.suggested.carbon_kg * 10.0).round();
        raw.clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(mode: Mode, carbon_kg: f64, time_mins: u32) -> ModeResult {
        ModeResult {
            mode,
            distance_km: 10.0,
            time_mins,
            carbon_kg,
            energy_saved_kwh: 0.0,
        }
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(1.2356, 3), 1.236);
        assert_eq!(round_to(2.0, 3), 2.0);
    }

    #[test]
    fn seconds_to_minutes() {
        assert_eq!(secs_to_mins(0.0), 0);
        assert_eq!(secs_to_mins(89.0), 1);
        assert_eq!(secs_to_mins(90.0), 2);
        assert_eq!(secs_to_mins(3600.0), 60);
    }

    #[test]
    fn route_metrics_from_raw() {
        let m = RouteMetrics::from_meters_secs(18_456.7, 2_710.0);
        assert_eq!(m.distance_km, 18.46);
        assert_eq!(m.time_mins, 45);
    }

    #[test]
    fn feasibility_sentinel() {
        assert!(item(Mode::Metro, 0.5, 30).is_feasible());
        assert!(!item(Mode::Metro, 0.5, INFEASIBLE_MINS).is_feasible());
    }

    #[test]
    fn json_field_names() {
        let json = serde_json::to_value(item(Mode::Bus, 0.7, 21)).unwrap();
        assert_eq!(json["mode"], "Bus");
        assert_eq!(json["distanceKm"], 10.0);
        assert_eq!(json["timeMins"], 21);
        assert_eq!(json["carbonKg"], 0.7);
        assert_eq!(json["energySavedKWh"], 0.0);

        let result = RecommendationResult::new(item(Mode::Bus, 0.7, 21), vec![item(Mode::Bus, 0.7, 21)]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["suggestedMode"], "Bus");
        assert!(json["suggested"].is_object());
        assert_eq!(json["results"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn consistency() {
        let bus = item(Mode::Bus, 0.7, 21);
        let car = item(Mode::Car, 1.7, 15);

        let ok = RecommendationResult::new(bus.clone(), vec![car.clone(), bus.clone()]);
        assert!(ok.is_consistent());

        let missing = RecommendationResult::new(bus.clone(), vec![car.clone()]);
        assert!(!missing.is_consistent());

        let mut mislabelled = ok.clone();
        mislabelled.suggested_mode = Mode::Car;
        assert!(!mislabelled.is_consistent());
    }

    #[test]
    fn eco_score_is_clamped() {
        let low = RecommendationResult::new(item(Mode::Walking, 0.0, 30), vec![]);
        assert_eq!(low.eco_score(), 100);

        let mid = RecommendationResult::new(item(Mode::Bus, 1.39, 30), vec![]);
        assert_eq!(mid.eco_score(), 86);

        let high = RecommendationResult::new(item(Mode::Aeroplane, 75.0, 30), vec![]);
        assert_eq!(high.eco_score(), 0);
    }
}
