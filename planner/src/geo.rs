#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::{Deserialize, Serialize};

use crate::consts::METERS_PER_DEGREE;

/// A WGS84 position in degrees.
///
/// Validation of arbitrary user input is the projection's concern; values
/// are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Move by ground distance measured at `reference_latitude`.
    ///
    /// `east_m` / `north_m` are metres. Longitude degrees are scaled by the
    /// cosine of `reference_latitude`, which should be the latitude the
    /// metre values were derived at. The result has its longitude wrapped
    /// into `[-180, 180]` and its latitude clamped into `[-90, 90]`.
    #[must_use]
    pub fn translate_meters(self, east_m: f64, north_m: f64, reference_latitude: f64) -> Self {
        let d_lat = north_m / METERS_PER_DEGREE;
        let d_lon = if east_m == 0.0 {
            0.0
        } else {
            east_m / (METERS_PER_DEGREE * reference_latitude.to_radians().cos())
        };
        Self {
            latitude: clamp_latitude(self.latitude + d_lat),
            longitude: wrap_longitude(self.longitude + d_lon),
        }
    }
}

/// Wrap a longitude into `[-180, 180]`. In-range values pass through untouched.
#[must_use]
pub fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        return longitude;
    }
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

#[must_use]
pub fn clamp_latitude(latitude: f64) -> f64 {
    latitude.clamp(-90.0, 90.0)
}
