//! Content-padding-aware camera planning for slippy maps.
//!
//! A map view often has part of its surface covered by UI chrome (toolbars,
//! bottom sheets, side panels). Centering the camera on a coordinate then
//! puts that coordinate under the chrome. This crate computes the camera
//! state that places a target at the centre of the *visible* part of the
//! viewport instead. Everything here is pure and synchronous; applying the
//! resulting [`camera::CameraState`] to a renderer is the caller's business.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`planner`] | [`planner::CameraPlanner`]: padding-aware camera placement and its inverse |
//! | [`viewport`] | Viewport size, content padding, visible rectangle and centre offset |
//! | [`camera`] | Immutable camera state handed to the renderer |
//! | [`geo`] | Geographic coordinates and metre-based translation |
//! | [`projection`] | Ground resolution (metres per pixel) collaborator |
//! | [`consts`] | Shared numeric constants (earth radius, pitch limit, etc.) |

pub mod camera;
pub mod consts;
pub mod geo;
pub mod planner;
pub mod projection;
pub mod viewport;

pub use camera::CameraState;
pub use geo::GeoCoordinate;
pub use planner::{CameraOptions, CameraPlanner, VisualCenterError};
pub use projection::{Projection, WebMercator};
pub use viewport::{Axis, InvalidPaddingError, Padding, Rect, ScreenOffset, ViewportSize};
