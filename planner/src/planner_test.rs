#![allow(clippy::float_cmp)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::consts::METERS_PER_DEGREE;

const DEGREE_EPSILON: f64 = 1e-9;

fn nashville() -> GeoCoordinate {
    GeoCoordinate::new(36.15534, -86.77620)
}

fn tall() -> ViewportSize {
    ViewportSize::new(1000.0, 2000.0)
}

fn top_bar() -> Padding {
    Padding::new(0.0, 1000.0, 0.0, 0.0)
}

fn coord_approx_eq(a: GeoCoordinate, b: GeoCoordinate) -> bool {
    (a.latitude - b.latitude).abs() < DEGREE_EPSILON && (a.longitude - b.longitude).abs() < DEGREE_EPSILON
}

fn mercator() -> CameraPlanner {
    CameraPlanner::default()
}

/// Flat resolution so expected offsets are easy to compute by hand.
struct FixedResolution(f64);

impl Projection for FixedResolution {
    fn meters_per_pixel(&self, _zoom: f64, _latitude: f64) -> f64 {
        self.0
    }
}

// --- CameraOptions ---

#[test]
fn options_default_values() {
    let opts = CameraOptions::default();
    assert_eq!(opts.padding, Padding::default());
    assert_eq!(opts.zoom, 0.0);
    assert_eq!(opts.bearing, 0.0);
    assert_eq!(opts.pitch, 0.0);
}

#[test]
fn options_zero_zoom_keeps_current() {
    let opts = CameraOptions::default();
    assert_eq!(opts.resolve_zoom(Some(9.5)), 9.5);
    assert_eq!(opts.resolve_zoom(None), 0.0);
}

#[test]
fn options_explicit_zoom_wins() {
    let opts = CameraOptions { zoom: 12.0, ..CameraOptions::default() };
    assert_eq!(opts.resolve_zoom(Some(3.0)), 12.0);
}

#[test]
fn options_deserialize_partial_json() {
    let opts: CameraOptions = serde_json::from_str(r#"{"zoom": 12, "padding": {"top": 1000}}"#).unwrap();
    assert_eq!(opts.zoom, 12.0);
    assert_eq!(opts.padding, top_bar());
    assert_eq!(opts.bearing, 0.0);
    assert_eq!(opts.pitch, 0.0);
}

// --- screen_to_ground ---

#[test]
fn screen_to_ground_north_up() {
    let (east, north) = screen_to_ground(ScreenOffset { dx: 3.0, dy: 4.0 }, 0.0);
    assert_eq!(east, 3.0);
    assert_eq!(north, -4.0);
}

#[test]
fn screen_to_ground_east_up() {
    // Bearing 90: screen-up looks east, screen-right looks south.
    let (east, north) = screen_to_ground(ScreenOffset { dx: 0.0, dy: -1.0 }, 90.0);
    assert!((east - 1.0).abs() < 1e-12);
    assert!(north.abs() < 1e-12);
    let (east, north) = screen_to_ground(ScreenOffset { dx: 1.0, dy: 0.0 }, 90.0);
    assert!(east.abs() < 1e-12);
    assert!((north + 1.0).abs() < 1e-12);
}

// --- plan_camera: baseline ---

#[test]
fn zero_padding_centers_exactly_on_target() {
    let planner = mercator();
    for (zoom, bearing, pitch) in [(0.0, 0.0, 0.0), (12.0, 45.0, 30.0), (21.5, 359.0, 60.0)] {
        let cam = planner
            .plan_camera(nashville(), zoom, bearing, pitch, tall(), Padding::default())
            .unwrap();
        assert_eq!(cam.center(), nashville());
        assert_eq!(cam.zoom(), zoom);
        assert_eq!(cam.pitch(), pitch);
    }
}

#[test]
fn symmetric_padding_centers_exactly_on_target() {
    let planner = mercator();
    let cam = planner
        .plan_camera(nashville(), 12.0, 30.0, 0.0, tall(), Padding::new(200.0, 700.0, 200.0, 700.0))
        .unwrap();
    assert_eq!(cam.center(), nashville());
}

#[test]
fn random_symmetric_padding_never_moves_center() {
    let planner = mercator();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let h = rng.random_range(0.0..499.0);
        let v = rng.random_range(0.0..999.0);
        let target = GeoCoordinate::new(rng.random_range(-80.0..80.0), rng.random_range(-180.0..180.0));
        let cam = planner
            .plan_camera(target, rng.random_range(0.0..22.0), rng.random_range(0.0..360.0), 0.0, tall(), Padding::new(h, v, h, v))
            .unwrap();
        assert_eq!(cam.center(), target);
    }
}

// --- plan_camera: padding correction ---

#[test]
fn top_bar_scenario_moves_center_north() {
    let planner = mercator();
    let cam = planner.plan_camera(nashville(), 12.0, 0.0, 0.0, tall(), top_bar()).unwrap();

    let mpp = WebMercator::default().meters_per_pixel(12.0, nashville().latitude);
    let expected_lat = nashville().latitude + 500.0 * mpp / METERS_PER_DEGREE;
    assert!((cam.center().latitude - expected_lat).abs() < DEGREE_EPSILON);
    assert_eq!(cam.center().longitude, nashville().longitude);
    assert!(cam.center().latitude > nashville().latitude);
    assert_eq!(cam.zoom(), 12.0);
}

#[test]
fn left_panel_moves_center_west() {
    let planner = CameraPlanner::new(FixedResolution(10.0));
    let target = GeoCoordinate::new(0.0, 0.0);
    let cam = planner
        .plan_camera(target, 5.0, 0.0, 0.0, ViewportSize::new(1000.0, 1000.0), Padding::new(400.0, 0.0, 0.0, 0.0))
        .unwrap();
    // Visible centre is 200 px right of the viewport centre, so the camera
    // sits 200 px (2 km) west of the target.
    let expected_lon = -2000.0 / METERS_PER_DEGREE;
    assert!((cam.center().longitude - expected_lon).abs() < DEGREE_EPSILON);
    assert_eq!(cam.center().latitude, 0.0);
}

#[test]
fn bottom_sheet_moves_center_south() {
    let planner = CameraPlanner::new(FixedResolution(1.0));
    let target = GeoCoordinate::new(10.0, 10.0);
    let cam = planner
        .plan_camera(target, 5.0, 0.0, 0.0, ViewportSize::new(400.0, 800.0), Padding::new(0.0, 0.0, 0.0, 300.0))
        .unwrap();
    assert!(cam.center().latitude < target.latitude);
    let expected_lat = 10.0 - 150.0 / METERS_PER_DEGREE;
    assert!((cam.center().latitude - expected_lat).abs() < DEGREE_EPSILON);
}

#[test]
fn bearing_rotates_correction() {
    let planner = mercator();
    let cam = planner.plan_camera(nashville(), 12.0, 90.0, 0.0, tall(), top_bar()).unwrap();
    assert!(cam.center().longitude > nashville().longitude);
    assert!((cam.center().latitude - nashville().latitude).abs() < 1e-9);
}

#[test]
fn pitch_does_not_change_placement() {
    let planner = mercator();
    let flat = planner.plan_camera(nashville(), 12.0, 0.0, 0.0, tall(), top_bar()).unwrap();
    let tilted = planner.plan_camera(nashville(), 12.0, 0.0, 45.0, tall(), top_bar()).unwrap();
    assert_eq!(flat.center(), tilted.center());
    assert_eq!(tilted.pitch(), 45.0);
}

#[test]
fn higher_zoom_means_smaller_correction() {
    let planner = mercator();
    let near = planner.plan_camera(nashville(), 16.0, 0.0, 0.0, tall(), top_bar()).unwrap();
    let far = planner.plan_camera(nashville(), 10.0, 0.0, 0.0, tall(), top_bar()).unwrap();
    let near_shift = near.center().latitude - nashville().latitude;
    let far_shift = far.center().latitude - nashville().latitude;
    assert!(near_shift > 0.0);
    assert!(far_shift > near_shift * 32.0);
}

#[test]
fn correction_wraps_across_antimeridian() {
    let planner = CameraPlanner::new(FixedResolution(METERS_PER_DEGREE / 100.0));
    let target = GeoCoordinate::new(0.0, -179.9);
    // Left panel: the camera moves west of the target, across the antimeridian.
    let cam = planner
        .plan_camera(target, 3.0, 0.0, 0.0, ViewportSize::new(1000.0, 1000.0), Padding::new(40.0, 0.0, 0.0, 0.0))
        .unwrap();
    // 20 px west at 0.01°/px = 0.2° west.
    assert!((cam.center().longitude - 179.9).abs() < 1e-9);
}

// --- plan_camera: errors ---

#[test]
fn top_bar_on_square_viewport_is_invalid() {
    let planner = mercator();
    let err = planner
        .plan_camera(nashville(), 12.0, 0.0, 0.0, ViewportSize::new(1000.0, 1000.0), top_bar())
        .unwrap_err();
    assert_eq!(err.axis, crate::viewport::Axis::Vertical);
}

#[test]
fn horizontal_overflow_is_invalid() {
    let planner = mercator();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let width = rng.random_range(1.0..3000.0);
        let left = rng.random_range(0.0..width);
        let right = width - left + rng.random_range(0.0..50.0);
        let result = planner.plan_camera(
            nashville(),
            12.0,
            0.0,
            0.0,
            ViewportSize::new(width, 800.0),
            Padding::new(left, 0.0, right, 0.0),
        );
        assert!(result.is_err(), "left={left} right={right} width={width}");
    }
}

#[test]
fn near_total_uniform_padding_is_invalid() {
    let planner = mercator();
    let result = planner.plan_camera(nashville(), 12.0, 0.0, 0.0, ViewportSize::new(800.0, 800.0), Padding::uniform(400.0));
    assert!(result.is_err());
}

// --- plan_camera: purity ---

#[test]
fn planning_is_idempotent() {
    let planner = mercator();
    let padding = Padding::new(12.0, 300.0, 48.0, 96.0);
    let first = planner.plan_camera(nashville(), 13.25, 17.0, 20.0, tall(), padding).unwrap();
    let second = planner.plan_camera(nashville(), 13.25, 17.0, 20.0, tall(), padding).unwrap();
    assert_eq!(first, second);
}

#[test]
fn planner_by_reference_matches_owned() {
    let projection = WebMercator::default();
    let borrowed = CameraPlanner::new(&projection);
    let owned = CameraPlanner::new(projection);
    assert_eq!(
        borrowed.plan_camera(nashville(), 12.0, 0.0, 0.0, tall(), top_bar()).unwrap(),
        owned.plan_camera(nashville(), 12.0, 0.0, 0.0, tall(), top_bar()).unwrap()
    );
}

// --- plan ---

#[test]
fn plan_uses_options() {
    let planner = mercator();
    let opts = CameraOptions { padding: top_bar(), zoom: 12.0, bearing: 0.0, pitch: 10.0 };
    let via_options = planner.plan(nashville(), tall(), &opts, None).unwrap();
    let direct = planner.plan_camera(nashville(), 12.0, 0.0, 10.0, tall(), top_bar()).unwrap();
    assert_eq!(via_options, direct);
}

#[test]
fn plan_zero_zoom_keeps_current_zoom() {
    let planner = mercator();
    let cam = planner.plan(nashville(), tall(), &CameraOptions::default(), Some(8.0)).unwrap();
    assert_eq!(cam.zoom(), 8.0);
    assert_eq!(cam.center(), nashville());
}

#[test]
fn plan_propagates_invalid_padding() {
    let planner = mercator();
    let opts = CameraOptions { padding: top_bar(), ..CameraOptions::default() };
    assert!(planner.plan(nashville(), ViewportSize::new(1000.0, 1000.0), &opts, None).is_err());
}

// --- visual_center ---

#[test]
fn visual_center_without_padding_is_camera_center() {
    let planner = mercator();
    let cam = CameraState::new(nashville(), 12.0, 0.0, 0.0);
    assert_eq!(planner.visual_center(&cam, tall(), Padding::default()).unwrap(), nashville());
}

#[test]
fn visual_center_inverts_top_bar_plan() {
    let planner = mercator();
    let cam = planner.plan_camera(nashville(), 12.0, 0.0, 0.0, tall(), top_bar()).unwrap();
    let visual = planner.visual_center(&cam, tall(), top_bar()).unwrap();
    assert!(coord_approx_eq(visual, nashville()), "{visual:?}");
}

#[test]
fn visual_center_inverts_random_plans() {
    let planner = mercator();
    let mut rng = StdRng::seed_from_u64(99);
    let viewport = ViewportSize::new(1080.0, 1920.0);
    for _ in 0..200 {
        let target = GeoCoordinate::new(rng.random_range(-80.0..80.0), rng.random_range(-170.0..170.0));
        let padding = Padding::new(
            rng.random_range(0.0..500.0),
            rng.random_range(0.0..900.0),
            rng.random_range(0.0..500.0),
            rng.random_range(0.0..900.0),
        );
        let zoom = rng.random_range(4.0..20.0);
        let bearing = rng.random_range(0.0..360.0);
        let cam = planner.plan_camera(target, zoom, bearing, 0.0, viewport, padding).unwrap();
        let visual = planner.visual_center(&cam, viewport, padding).unwrap();
        assert!(coord_approx_eq(visual, target), "target={target:?} visual={visual:?}");
    }
}

#[test]
fn visual_center_inverts_low_zoom_plans() {
    let planner = mercator();
    for zoom in [3.0, 4.0, 5.0] {
        let cam = planner.plan_camera(nashville(), zoom, 0.0, 0.0, tall(), top_bar()).unwrap();
        let visual = planner.visual_center(&cam, tall(), top_bar()).unwrap();
        assert!(coord_approx_eq(visual, nashville()), "zoom={zoom} visual={visual:?}");
    }
}

#[test]
fn visual_center_inverts_near_pole() {
    let planner = mercator();
    let target = GeoCoordinate::new(-84.0, 12.5);
    let padding = Padding::new(0.0, 0.0, 0.0, 900.0);
    let cam = planner.plan_camera(target, 4.0, 0.0, 0.0, tall(), padding).unwrap();
    let visual = planner.visual_center(&cam, tall(), padding).unwrap();
    assert!(coord_approx_eq(visual, target), "{visual:?}");
}

#[test]
fn visual_center_at_world_zoom_is_ambiguous() {
    let planner = mercator();
    for zoom in [0.0, 1.0, 2.0] {
        let cam = planner.plan_camera(nashville(), zoom, 0.0, 0.0, tall(), top_bar()).unwrap();
        let err = planner.visual_center(&cam, tall(), top_bar()).unwrap_err();
        assert!(matches!(err, VisualCenterError::Ambiguous { .. }), "zoom={zoom} {err:?}");
    }
}

#[test]
fn visual_center_ambiguity_ignores_horizontal_padding() {
    // Longitude shifts never fold over, so a side panel inverts at any zoom.
    let planner = mercator();
    let padding = Padding::new(300.0, 0.0, 0.0, 0.0);
    let cam = planner.plan_camera(nashville(), 0.0, 0.0, 0.0, tall(), padding).unwrap();
    let visual = planner.visual_center(&cam, tall(), padding).unwrap();
    assert!(coord_approx_eq(visual, nashville()), "{visual:?}");
}

#[test]
fn visual_center_rejects_invalid_padding() {
    let planner = mercator();
    let cam = CameraState::new(nashville(), 12.0, 0.0, 0.0);
    let err = planner.visual_center(&cam, ViewportSize::new(1000.0, 1000.0), top_bar()).unwrap_err();
    assert!(matches!(err, VisualCenterError::Padding(_)));
}
