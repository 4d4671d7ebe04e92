//! Transit itineraries from OpenTripPlanner.
//!
//! Transit data is a refinement, not a requirement: every failure mode of
//! the planner (unreachable, error status, unreadable body, no itinerary)
//! yields `None` and the scorer substitutes an analytic estimate.

mod client;
mod types;

pub use client::{OtpClient, TransitConfig};
pub use types::{Itinerary, ItineraryLeg, PlanResponse, TransitMode};
