#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

/// Rendering surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Centre of the full viewport, ignoring padding.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Insets reserved for UI chrome, in pixels from each viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    #[must_use]
    pub fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Opposite insets are equal, so the visible centre is the viewport centre.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_symmetric(&self) -> bool {
        self.left == self.right && self.top == self.bottom
    }
}

/// Axis-aligned rectangle in screen pixels (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Pixel displacement in screen space. Positive `dy` points down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenOffset {
    pub dx: f64,
    pub dy: f64,
}

impl ScreenOffset {
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Screen axis along which padding left no visible room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// Padding leaves no visible area (or is itself malformed).
///
/// Raised instead of clamping: a camera planned against a degenerate visible
/// area would hide the target, and the caller needs to fix its layout.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error(
    "invalid padding: {axis} insets {leading} + {trailing} leave {remaining} px of a {extent} px viewport"
)]
pub struct InvalidPaddingError {
    /// Axis that ran out of room.
    pub axis: Axis,
    /// Viewport extent along `axis`.
    pub extent: f64,
    /// Left or top inset.
    pub leading: f64,
    /// Right or bottom inset.
    pub trailing: f64,
    /// Visible extent that would remain (zero or negative, or NaN when an
    /// inset is not a finite non-negative number).
    pub remaining: f64,
}

/// The part of the viewport not covered by padding.
///
/// # Errors
///
/// Returns [`InvalidPaddingError`] when an inset is negative or not finite,
/// or when the insets leave zero or negative visible width or height.
pub fn compute_visible_rect(viewport: ViewportSize, padding: Padding) -> Result<Rect, InvalidPaddingError> {
    let width = check_axis(Axis::Horizontal, viewport.width, padding.left, padding.right)?;
    let height = check_axis(Axis::Vertical, viewport.height, padding.top, padding.bottom)?;
    Ok(Rect { x: padding.left, y: padding.top, width, height })
}

/// Offset from the full-viewport centre to the visible-rectangle centre.
///
/// Only the padding enters the result; the viewport is not consulted. Does
/// not validate, so pair with [`compute_visible_rect`] when the padding is
/// untrusted.
#[must_use]
pub fn visible_center_offset(_viewport: ViewportSize, padding: Padding) -> ScreenOffset {
    ScreenOffset {
        dx: (padding.left - padding.right) / 2.0,
        dy: (padding.top - padding.bottom) / 2.0,
    }
}

fn check_axis(axis: Axis, extent: f64, leading: f64, trailing: f64) -> Result<f64, InvalidPaddingError> {
    let well_formed = is_inset(leading) && is_inset(trailing) && extent.is_finite();
    let remaining = if well_formed { extent - leading - trailing } else { f64::NAN };
    if well_formed && remaining > 0.0 {
        Ok(remaining)
    } else {
        Err(InvalidPaddingError { axis, extent, leading, trailing, remaining })
    }
}

fn is_inset(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
