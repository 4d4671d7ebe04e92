//! Mode estimation and scoring.
//!
//! Turns distances (routed or geodesic) into a [`ModeResult`] per mode, drops
//! modes past their distance ceiling and picks the suggestion. Everything here
//! is pure arithmetic.
//!
//! [`ModeResult`]: crate::domain::ModeResult

mod build;
mod rank;

pub use build::{
    ENERGY_FLOOR_KWH, METRO_MAX_FEASIBLE_KM, RAIL_DETOUR_FACTOR, RoadLegs, TransitLegs,
    air_distance_km, carbon_kg, energy_saved_kwh, estimated_mins, geodesic_results,
    routed_results,
};
pub use rank::{
    MAX_ALTERNATIVES, SHORT_HAUL_FLIGHT_KM, alternatives, apply_ceilings, recommend, suggest,
    within_ceiling,
};
