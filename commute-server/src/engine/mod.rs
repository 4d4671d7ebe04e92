//! The recommendation engine and its fallback chain.
//!
//! A request walks down [`Strategy::FALLIBLE`] until one strategy answers;
//! if none does, the deterministic placeholder is returned. Callers always
//! get a [`RecommendationResult`]; failures only show up in the logs.

mod backend;
mod error;
mod mock;
mod provider;
mod strategy;


use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::{Coordinate, RecommendationResult};
use crate::estimate::{
    RoadLegs, TransitLegs, air_distance_km, geodesic_results, recommend, routed_results,
};
use crate::geocode::{NominatimClient, ResolutionError};
use crate::routing::{OsrmClient, Profile};
use crate::transit::{OtpClient, TransitMode};

pub use backend::{BackendClient, BackendConfig, BackendError};
pub use error::StrategyError;
pub use mock::{placeholder, placeholder_index, placeholder_options};
pub use provider::{PlaceResolver, RoadRouter, TransitRouter};
pub use strategy::{Recommendation, Strategy};

/// The engine wired to the HTTP clients.
pub type HttpEngine = Engine<NominatimClient, OsrmClient, OtpClient>;

/// Produces recommendations from free-text endpoints.
pub struct Engine<G, R, T> {
    backend: BackendClient,
    resolver: G,
    router: R,
    transit: T,
}

impl<G, R, T> Engine<G, R, T>
where
    G: PlaceResolver,
    R: RoadRouter,
    T: TransitRouter,
{
    pub fn new(backend: BackendClient, resolver: G, router: R, transit: T) -> Self {
        Self {
            backend,
            resolver,
            router,
            transit,
        }
    }

    /// Whether the primary backend strategy will be attempted.
    pub fn has_backend(&self) -> bool {
        self.backend.is_configured()
    }

    /// Recommend a mode for travelling from `from` to `to`.
    ///
    /// Never fails. The returned [`Recommendation`] names the strategy that
    /// produced the result.
    pub async fn recommend(&self, from: &str, to: &str) -> Recommendation {
        for strategy in Strategy::FALLIBLE {
            match self.attempt(strategy, from, to).await {
                Ok(result) => {
                    info!(
                        %strategy,
                        suggested = %result.suggested_mode,
                        modes = result.results.len(),
                        "recommendation ready"
                    );
                    return Recommendation::new(strategy, result);
                }
                Err(e) if e.is_skip() => debug!(%strategy, "strategy skipped"),
                Err(e) => warn!(%strategy, error = %e, "strategy failed, falling back"),
            }
        }

        let result = placeholder(from, to);
        info!(
            strategy = %Strategy::MockPlaceholder,
            suggested = %result.suggested_mode,
            "using placeholder recommendation"
        );
        Recommendation::new(Strategy::MockPlaceholder, result)
    }

    /// Run a single strategy.
    pub async fn attempt(
        &self,
        strategy: Strategy,
        from: &str,
        to: &str,
    ) -> Result<RecommendationResult, StrategyError> {
        match strategy {
            Strategy::PrimaryBackend => Ok(self.backend.analyze(from, to).await?),
            Strategy::DirectComputation => self.direct(from, to).await,
            Strategy::GeodesicEstimate => self.geodesic(from, to).await,
            Strategy::MockPlaceholder => Ok(placeholder(from, to)),
        }
    }

    async fn resolve_pair(
        &self,
        from: &str,
        to: &str,
    ) -> Result<(Coordinate, Coordinate), ResolutionError> {
        tokio::try_join!(self.resolver.resolve(from), self.resolver.resolve(to))
    }

    async fn direct(&self, from: &str, to: &str) -> Result<RecommendationResult, StrategyError> {
        let (a, b) = self.resolve_pair(from, to).await?;

        let (driving, cycling, walking) = tokio::try_join!(
            self.router.route(Profile::Driving, a, b),
            self.router.route(Profile::Cycling, a, b),
            self.router.route(Profile::Walking, a, b),
        )?;
        let road = RoadLegs {
            driving,
            cycling,
            walking,
        };

        let transit = self.transit_legs(a, b).await;
        let air_km = air_distance_km(a, b);
        debug!(
            %a,
            %b,
            air_km,
            driving_km = driving.distance_km,
            rail = transit.rail.is_some(),
            subway = transit.subway.is_some(),
            bus = transit.bus.is_some(),
            "routed trip"
        );

        recommend(routed_results(air_km, &road, &transit)).ok_or(StrategyError::NoFeasibleMode)
    }

    async fn geodesic(&self, from: &str, to: &str) -> Result<RecommendationResult, StrategyError> {
        let (a, b) = self.resolve_pair(from, to).await?;
        let air_km = air_distance_km(a, b);
        debug!(%a, %b, air_km, "geodesic trip");

        recommend(geodesic_results(air_km)).ok_or(StrategyError::NoFeasibleMode)
    }

    async fn transit_legs(&self, a: Coordinate, b: Coordinate) -> TransitLegs {
        let plans = join_all(
            TransitMode::ALL
                .into_iter()
                .map(|mode| self.transit.plan(a, b, mode)),
        )
        .await;

        let mut legs = TransitLegs::default();
        for (mode, plan) in TransitMode::ALL.into_iter().zip(plans) {
            match mode {
                TransitMode::Rail => legs.rail = plan,
                TransitMode::Subway => legs.subway = plan,
                TransitMode::Bus => legs.bus = plan,
            }
        }
        legs
    }
}
