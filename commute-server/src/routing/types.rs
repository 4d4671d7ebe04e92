//! OSRM response types and route selection.

use std::fmt;

use serde::Deserialize;

/// Segment speed (m/s) at or above which a segment counts as highway-like.
/// 22.22 m/s is 80 km/h.
pub const HIGH_SPEED_MPS: f64 = 22.22;

/// Travel profile understood by the road router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Driving,
    Cycling,
    Walking,
}

impl Profile {
    /// Path segment used in `/route/v1/{profile}/...`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Driving => "driving",
            Profile::Cycling => "cycling",
            Profile::Walking => "foot",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level `/route` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// One candidate route. Distance in metres, duration in seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    pub distance: f64,
    pub duration: f64,
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub annotation: Option<Annotation>,
}

/// Per-segment annotations requested with `annotations=speed`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub speed: Vec<f64>,
}

impl Route {
    /// Fraction of annotated segments at highway speed, 0 when unannotated.
    pub fn high_speed_share(&self) -> f64 {
        let speeds = self
            .legs
            .iter()
            .filter_map(|leg| leg.annotation.as_ref())
            .flat_map(|a| a.speed.iter());

        let (total, fast) = speeds.fold((0usize, 0usize), |(total, fast), &s| {
            (total + 1, fast + usize::from(s >= HIGH_SPEED_MPS))
        });

        if total == 0 {
            0.0
        } else {
            fast as f64 / total as f64
        }
    }
}

/// Choose the most highway-like route.
///
/// Highest high-speed share wins, then lowest duration, then earliest
/// position. When no route has any high-speed segment the first route is
/// returned.
pub fn pick_route(routes: &[Route]) -> Option<&Route> {
    let first = routes.first()?;

    let mut best: Option<(f64, &Route)> = None;
    for route in routes {
        let share = route.high_speed_share();
        let better = match best {
            None => true,
            Some((best_share, best_route)) => {
                share > best_share || (share == best_share && route.duration < best_route.duration)
            }
        };
        if better {
            best = Some((share, route));
        }
    }

    match best {
        Some((share, route)) if share > 0.0 => Some(route),
        _ => Some(first),
    }
}
