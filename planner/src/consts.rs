//! Shared numeric constants for the planner crate.

// ── Earth ───────────────────────────────────────────────────────

/// WGS84 semi-major axis in metres (spherical Web Mercator radius).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Ground metres spanned by one degree of latitude on the Mercator sphere.
pub const METERS_PER_DEGREE: f64 = 2.0 * std::f64::consts::PI * EARTH_RADIUS_M / 360.0;

// ── Projection ──────────────────────────────────────────────────

/// Edge length of a vector tile in pixels at integer zoom levels.
pub const DEFAULT_TILE_SIZE_PX: f64 = 512.0;

// ── Camera limits ───────────────────────────────────────────────

/// Largest pitch (tilt away from nadir) the renderer accepts, in degrees.
pub const MAX_PITCH_DEG: f64 = 60.0;

/// Full turn in degrees; bearings are wrapped into `[0, FULL_TURN_DEG)`.
pub const FULL_TURN_DEG: f64 = 360.0;

// ── Inverse planning ────────────────────────────────────────────

/// Newton step cap when solving for the visible-centre latitude.
pub const VISUAL_CENTER_MAX_STEPS: usize = 32;

/// Latitude step, in degrees, below which the solve has converged.
pub const VISUAL_CENTER_TOLERANCE_DEG: f64 = 1e-12;

/// Half-width, in degrees, of the central difference used for the slope.
pub const VISUAL_CENTER_SLOPE_STEP_DEG: f64 = 1e-6;
