#[cfg(test)]
#[path = "planner_test.rs"]
mod planner_test;

use serde::{Deserialize, Serialize};

use crate::camera::CameraState;
use crate::consts::{EARTH_RADIUS_M, VISUAL_CENTER_MAX_STEPS, VISUAL_CENTER_SLOPE_STEP_DEG, VISUAL_CENTER_TOLERANCE_DEG};
use crate::geo::{GeoCoordinate, clamp_latitude};
use crate::projection::{Projection, WebMercator};
use crate::viewport::{InvalidPaddingError, Padding, ScreenOffset, ViewportSize, compute_visible_rect, visible_center_offset};

/// Why [`CameraPlanner::visual_center`] could not recover a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum VisualCenterError {
    #[error(transparent)]
    Padding(#[from] InvalidPaddingError),

    /// The padding correction is a radian or more of latitude, so several
    /// targets plan to the same camera (or the plan was clamped at a pole).
    #[error("visible centre is ambiguous at zoom {zoom}: padding moves latitude by up to {reach_deg:.1} degrees")]
    Ambiguous { zoom: f64, reach_deg: f64 },
}

/// Caller-facing camera options.
///
/// Every field is optional when deserialized. `zoom == 0` means "keep the
/// current zoom".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    pub padding: Padding,
    pub zoom: f64,
    pub bearing: f64,
    pub pitch: f64,
}

impl CameraOptions {
    /// Zoom to plan with, given the zoom currently shown (if any).
    #[must_use]
    pub fn resolve_zoom(&self, current_zoom: Option<f64>) -> f64 {
        if self.zoom == 0.0 { current_zoom.unwrap_or(0.0) } else { self.zoom }
    }
}

/// Places cameras so a target renders at the centre of the padded viewport.
///
/// Stateless apart from the projection; every call is an independent pure
/// computation.
#[derive(Debug, Clone, Default)]
pub struct CameraPlanner<P = WebMercator> {
    projection: P,
}

impl<P: Projection> CameraPlanner<P> {
    #[must_use]
    pub fn new(projection: P) -> Self {
        Self { projection }
    }

    #[must_use]
    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Camera whose visible-area centre lands on `target`.
    ///
    /// With zero or symmetric padding the returned centre is `target`
    /// itself. Otherwise the centre is moved opposite to the visible-centre
    /// offset, rotated by `bearing` and scaled by the projection's ground
    /// resolution at the target latitude. Pitch does not affect placement.
    ///
    /// At very low zoom a large padding can push the centre past a pole, in
    /// which case the latitude is clamped to ±90. Such a camera no longer
    /// identifies its target and [`visual_center`](Self::visual_center)
    /// reports it as ambiguous.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPaddingError`] when `padding` leaves no visible area.
    pub fn plan_camera(
        &self,
        target: GeoCoordinate,
        zoom: f64,
        bearing: f64,
        pitch: f64,
        viewport: ViewportSize,
        padding: Padding,
    ) -> Result<CameraState, InvalidPaddingError> {
        compute_visible_rect(viewport, padding)?;
        let offset = visible_center_offset(viewport, padding);
        let camera = CameraState::new(target, zoom, bearing, pitch);
        if offset.is_zero() {
            return Ok(camera);
        }

        let towards_camera = ScreenOffset { dx: -offset.dx, dy: -offset.dy };
        let center = self.shift(target, towards_camera, &camera, target.latitude);
        tracing::debug!(
            target_lat = target.latitude,
            target_lon = target.longitude,
            center_lat = center.latitude,
            center_lon = center.longitude,
            dx = offset.dx,
            dy = offset.dy,
            zoom = camera.zoom(),
            "planned padded camera"
        );
        Ok(camera.with_center(center))
    }

    /// [`plan_camera`](Self::plan_camera) driven by [`CameraOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPaddingError`] when `options.padding` leaves no
    /// visible area.
    pub fn plan(
        &self,
        target: GeoCoordinate,
        viewport: ViewportSize,
        options: &CameraOptions,
        current_zoom: Option<f64>,
    ) -> Result<CameraState, InvalidPaddingError> {
        let zoom = options.resolve_zoom(current_zoom);
        self.plan_camera(target, zoom, options.bearing, options.pitch, viewport, options.padding)
    }

    /// Coordinate rendered at the centre of the visible area of `camera`.
    ///
    /// Inverse of [`plan_camera`](Self::plan_camera). Ground resolution
    /// depends on the unknown visible-centre latitude, so that latitude is
    /// solved with Newton steps; longitude then follows directly.
    ///
    /// # Errors
    ///
    /// Returns [`VisualCenterError::Padding`] when `padding` leaves no visible
    /// area, and [`VisualCenterError::Ambiguous`] when the north-south
    /// correction spans a radian or more of latitude. Below that bound the
    /// planned latitude is strictly increasing in the target latitude and
    /// never reaches a pole, so the inverse is unique.
    pub fn visual_center(
        &self,
        camera: &CameraState,
        viewport: ViewportSize,
        padding: Padding,
    ) -> Result<GeoCoordinate, VisualCenterError> {
        compute_visible_rect(viewport, padding)?;
        let offset = visible_center_offset(viewport, padding);
        let center = camera.center();
        if offset.is_zero() {
            return Ok(center);
        }

        let (_, north_px) = screen_to_ground(offset, camera.bearing());
        let reach = (north_px * self.projection.meters_per_pixel(camera.zoom(), 0.0) / EARTH_RADIUS_M).abs();
        if reach.is_nan() || reach >= 1.0 {
            return Err(VisualCenterError::Ambiguous { zoom: camera.zoom(), reach_deg: reach.to_degrees() });
        }

        let residual = |latitude: f64| self.shift(center, offset, camera, latitude).latitude - latitude;
        let mut latitude = center.latitude;
        for _ in 0..VISUAL_CENTER_MAX_STEPS {
            let h = VISUAL_CENTER_SLOPE_STEP_DEG;
            let slope = (residual(latitude + h) - residual(latitude - h)) / (2.0 * h);
            let step = residual(latitude) / slope;
            latitude = clamp_latitude(latitude - step);
            if step.abs() < VISUAL_CENTER_TOLERANCE_DEG {
                break;
            }
        }
        Ok(self.shift(center, offset, camera, latitude))
    }

    /// Move `origin` by a screen offset, measuring ground distance at
    /// `reference_latitude`.
    fn shift(&self, origin: GeoCoordinate, offset: ScreenOffset, camera: &CameraState, reference_latitude: f64) -> GeoCoordinate {
        let (east_px, north_px) = screen_to_ground(offset, camera.bearing());
        let mpp = self.projection.meters_per_pixel(camera.zoom(), reference_latitude);
        origin.translate_meters(east_px * mpp, north_px * mpp, reference_latitude)
    }
}

/// Rotate a screen offset (y down) into east/north pixel components for a
/// map rotated so that screen-up points along `bearing`.
#[must_use]
pub fn screen_to_ground(offset: ScreenOffset, bearing: f64) -> (f64, f64) {
    let (sin, cos) = bearing.to_radians().sin_cos();
    let east = offset.dx * cos - offset.dy * sin;
    let north = -(offset.dx * sin + offset.dy * cos);
    (east, north)
}
