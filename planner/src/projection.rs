#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use crate::consts::{DEFAULT_TILE_SIZE_PX, EARTH_RADIUS_M};

/// Ground resolution provider.
///
/// The planner only needs to know how many metres a screen pixel covers at
/// a given zoom and latitude; the map renderer owns the real projection.
pub trait Projection {
    fn meters_per_pixel(&self, zoom: f64, latitude: f64) -> f64;
}

/// Spherical Web Mercator with square tiles of `tile_size` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebMercator {
    pub tile_size: f64,
}

impl WebMercator {
    #[must_use]
    pub fn with_tile_size(tile_size: f64) -> Self {
        Self { tile_size }
    }
}

impl Default for WebMercator {
    fn default() -> Self {
        Self { tile_size: DEFAULT_TILE_SIZE_PX }
    }
}

impl Projection for WebMercator {
    fn meters_per_pixel(&self, zoom: f64, latitude: f64) -> f64 {
        let world_px = self.tile_size * zoom.exp2();
        latitude.to_radians().cos() * 2.0 * std::f64::consts::PI * EARTH_RADIUS_M / world_px
    }
}

impl<P: Projection + ?Sized> Projection for &P {
    fn meters_per_pixel(&self, zoom: f64, latitude: f64) -> f64 {
        (**self).meters_per_pixel(zoom, latitude)
    }
}
