//! Domain types for the commute recommendation engine.
//!
//! These are the values that flow between the resolver, the routers,
//! the scorer and the web layer. None of them outlive a single request.

mod coordinate;
mod mode;
mod result;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM};
pub use mode::Mode;
pub use result::{
    INFEASIBLE_MINS, ModeResult, RecommendationResult, RouteMetrics, round_to, secs_to_mins,
};
