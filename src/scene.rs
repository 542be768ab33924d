//! The content-offset scene: a marker on Nashville, framed below a toolbar
//! that covers the top 1000 px of the map.

use planner::viewport::compute_visible_rect;
use planner::{CameraPlanner, CameraState, GeoCoordinate, InvalidPaddingError, Padding, Projection, Rect, ViewportSize};
use serde::Serialize;

use crate::config::MapConfig;

pub const NASHVILLE: GeoCoordinate = GeoCoordinate { latitude: 36.155_34, longitude: -86.776_20 };
pub const SCENE_ZOOM: f64 = 12.0;
pub const TOOLBAR_PADDING: Padding = Padding { left: 0.0, top: 1000.0, right: 0.0, bottom: 0.0 };

/// Point annotation drawn by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: GeoCoordinate,
    pub title: String,
}

/// Everything the renderer needs to show the scene. Never carries the token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneUpdate {
    pub style_url: &'static str,
    pub camera: CameraState,
    pub padding: Padding,
    pub visible_rect: Rect,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentOffsetScene {
    pub target: GeoCoordinate,
    pub title: String,
    pub zoom: f64,
    pub padding: Padding,
}

impl Default for ContentOffsetScene {
    fn default() -> Self {
        Self {
            target: NASHVILLE,
            title: "Nashville".to_owned(),
            zoom: SCENE_ZOOM,
            padding: TOOLBAR_PADDING,
        }
    }
}

impl ContentOffsetScene {
    /// Plan the scene for a measured viewport.
    ///
    /// The marker sits on the target; the camera is shifted so that the
    /// target shows in the middle of the area below the toolbar.
    pub fn build<P: Projection>(
        &self,
        planner: &CameraPlanner<P>,
        config: &MapConfig,
        viewport: ViewportSize,
    ) -> Result<SceneUpdate, InvalidPaddingError> {
        let visible_rect = compute_visible_rect(viewport, self.padding)?;
        let camera = planner.plan_camera(self.target, self.zoom, 0.0, 0.0, viewport, self.padding)?;
        Ok(SceneUpdate {
            style_url: config.style.url(),
            camera,
            padding: self.padding,
            visible_rect,
            markers: vec![Marker { position: self.target, title: self.title.clone() }],
        })
    }
}

#[cfg(test)]
#[path = "scene_test.rs"]
mod tests;
