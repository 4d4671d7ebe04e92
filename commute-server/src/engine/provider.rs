//! Data sources the engine depends on.
//!
//! These traits abstract the geocoder, road router and transit planner so the
//! fallback chain can run against in-memory fakes. The HTTP clients are the
//! production implementations.

use std::future::Future;

use crate::domain::{Coordinate, RouteMetrics};
use crate::geocode::{NominatimClient, ResolutionError};
use crate::routing::{OsrmClient, Profile, RoutingError};
use crate::transit::{OtpClient, TransitMode};

/// Turns free text into a coordinate.
pub trait PlaceResolver: Send + Sync {
    fn resolve(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Coordinate, ResolutionError>> + Send;
}

/// Road distance and time for one profile.
pub trait RoadRouter: Send + Sync {
    fn route(
        &self,
        profile: Profile,
        from: Coordinate,
        to: Coordinate,
    ) -> impl Future<Output = Result<RouteMetrics, RoutingError>> + Send;
}

/// Best-effort transit itinerary for one transit class.
///
/// Absence is a valid answer, not an error.
pub trait TransitRouter: Send + Sync {
    fn plan(
        &self,
        from: Coordinate,
        to: Coordinate,
        mode: TransitMode,
    ) -> impl Future<Output = Option<RouteMetrics>> + Send;
}

impl PlaceResolver for NominatimClient {
    async fn resolve(&self, query: &str) -> Result<Coordinate, ResolutionError> {
        self.geocode(query).await
    }
}

impl RoadRouter for OsrmClient {
    async fn route(
        &self,
        profile: Profile,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<RouteMetrics, RoutingError> {
        OsrmClient::route(self, profile, from, to).await
    }
}

impl TransitRouter for OtpClient {
    async fn plan(
        &self,
        from: Coordinate,
        to: Coordinate,
        mode: TransitMode,
    ) -> Option<RouteMetrics> {
        OtpClient::plan(self, from, to, mode).await
    }
}
