//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use commute_server::domain::Coordinate;
///
/// let a = Coordinate::new(12.9719, 77.6412);
/// assert_eq!(a.haversine_km(&a), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn haversine_km(&self, other: &Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
    }

    /// Format as `lat,lon`, the order the transit planner expects.
    pub fn lat_lon(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }

    /// Format as `lon,lat`, the order the road router expects.
    pub fn lon_lat(&self) -> String {
        format!("{},{}", self.lon, self.lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}
