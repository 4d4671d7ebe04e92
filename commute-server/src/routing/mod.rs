//! Road routing through OSRM.
//!
//! Driving, cycling and walking distances come from an OSRM `/route/v1`
//! service. Alternatives are requested with per-segment speed annotations
//! so the most highway-like route can be chosen as the representative one.

mod client;
mod error;
mod types;

pub use client::{OsrmClient, RouterConfig};
pub use error::RoutingError;
pub use types::{HIGH_SPEED_MPS, Profile, Route, RouteResponse, pick_route};
