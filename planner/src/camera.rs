#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::Serialize;

use crate::consts::{FULL_TURN_DEG, MAX_PITCH_DEG};
use crate::geo::GeoCoordinate;

/// Camera parameters handed to the map renderer.
///
/// `zoom` is a tile zoom level (>= 0), `bearing` is degrees clockwise from
/// north in `[0, 360)`, `pitch` is degrees from nadir in `[0, 60]`.
/// Values are normalised on construction and never change afterwards; build
/// a new state to move the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraState {
    center: GeoCoordinate,
    zoom: f64,
    bearing: f64,
    pitch: f64,
}

impl CameraState {
    #[must_use]
    pub fn new(center: GeoCoordinate, zoom: f64, bearing: f64, pitch: f64) -> Self {
        Self {
            center,
            zoom: zoom.max(0.0),
            bearing: normalize_bearing(bearing),
            pitch: pitch.clamp(0.0, MAX_PITCH_DEG),
        }
    }

    #[must_use]
    pub fn center(&self) -> GeoCoordinate {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Same camera looking at a different centre.
    #[must_use]
    pub fn with_center(&self, center: GeoCoordinate) -> Self {
        Self { center, ..*self }
    }
}

/// Wrap any bearing into `[0, 360)`.
#[must_use]
pub fn normalize_bearing(bearing: f64) -> f64 {
    let wrapped = bearing.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= FULL_TURN_DEG { 0.0 } else { wrapped }
}
