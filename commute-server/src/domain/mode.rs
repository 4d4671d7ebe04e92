//! Transportation modes and their per-mode constants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the eight transportation modes the engine scores.
///
/// Serialized as its display label (`"Car"`, `"Walking"`, `"Aeroplane"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Car,
    Motorcycle,
    Bus,
    Train,
    Metro,
    Cycle,
    Walking,
    Aeroplane,
}

impl Mode {
    /// All modes, in the order results are emitted.
    pub const ALL: [Mode; 8] = [
        Mode::Car,
        Mode::Motorcycle,
        Mode::Bus,
        Mode::Train,
        Mode::Metro,
        Mode::Cycle,
        Mode::Walking,
        Mode::Aeroplane,
    ];

    /// The label used on the wire and in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Car => "Car",
            Mode::Motorcycle => "Motorcycle",
            Mode::Bus => "Bus",
            Mode::Train => "Train",
            Mode::Metro => "Metro",
            Mode::Cycle => "Cycle",
            Mode::Walking => "Walking",
            Mode::Aeroplane => "Aeroplane",
        }
    }

    /// Tailpipe emissions in kg CO2 per km.
    pub fn emission_kg_per_km(&self) -> f64 {
        match self {
            Mode::Car => 0.171,
            Mode::Motorcycle => 0.103,
            Mode::Bus => 0.070,
            Mode::Train => 0.041,
            Mode::Metro => 0.050,
            Mode::Cycle | Mode::Walking => 0.0,
            Mode::Aeroplane => 0.255,
        }
    }

    /// Energy use in kWh per km.
    pub fn energy_kwh_per_km(&self) -> f64 {
        match self {
            Mode::Car => 0.58,
            Mode::Motorcycle => 0.25,
            Mode::Bus => 0.12,
            Mode::Train => 0.08,
            Mode::Metro => 0.06,
            Mode::Cycle | Mode::Walking => 0.0,
            Mode::Aeroplane => 0.90,
        }
    }

    /// Assumed average speed in km/h, used when no router supplies a time.
    pub fn assumed_speed_kmh(&self) -> f64 {
        match self {
            Mode::Car => 55.0,
            Mode::Motorcycle => 50.0,
            Mode::Bus => 28.0,
            Mode::Train => 90.0,
            Mode::Metro => 35.0,
            Mode::Cycle => 12.0,
            Mode::Walking => 5.0,
            Mode::Aeroplane => 850.0,
        }
    }

    /// Fixed minutes added to distance-derived travel time.
    ///
    /// Covers station access for rail and ground handling for flights.
    pub fn overhead_mins(&self) -> f64 {
        match self {
            Mode::Train => 20.0,
            Mode::Metro => 10.0,
            Mode::Aeroplane => 60.0,
            _ => 0.0,
        }
    }

    /// Distance in km beyond which the mode is dropped from results.
    pub fn max_distance_km(&self) -> Option<f64> {
        match self {
            Mode::Walking => Some(8.0),
            Mode::Cycle => Some(25.0),
            Mode::Metro => Some(60.0),
            Mode::Motorcycle => Some(200.0),
            Mode::Bus => Some(800.0),
            Mode::Car => Some(1200.0),
            Mode::Train | Mode::Aeroplane => None,
        }
    }

    /// Sort key for alternatives: lower is more environmentally friendly.
    pub fn friendliness_rank(&self) -> u8 {
        match self {
            Mode::Bus | Mode::Train | Mode::Metro | Mode::Cycle | Mode::Walking => 0,
            Mode::Motorcycle => 1,
            Mode::Car => 2,
            Mode::Aeroplane => 3,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
