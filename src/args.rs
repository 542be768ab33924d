//! Value parsers for layout arguments (`WIDTHxHEIGHT`, `L,T,R,B`, tile size).

use planner::{Padding, ViewportSize};

pub fn parse_viewport(raw: &str) -> Result<ViewportSize, String> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{raw}`"))?;
    let viewport = ViewportSize::new(parse_px(width)?, parse_px(height)?);
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Err(format!("viewport must be larger than zero, got `{raw}`"));
    }
    Ok(viewport)
}

/// Projection tile edge in pixels; zero or negative sizes break the scale.
pub fn parse_tile_size(raw: &str) -> Result<f64, String> {
    let size = parse_px(raw)?;
    if size <= 0.0 {
        return Err(format!("tile size must be larger than zero, got `{}`", raw.trim()));
    }
    Ok(size)
}

/// One value for uniform padding, or four in `left,top,right,bottom` order.
pub fn parse_padding(raw: &str) -> Result<Padding, String> {
    let insets = raw.split(',').map(parse_px).collect::<Result<Vec<_>, _>>()?;
    match insets.as_slice() {
        [inset] => Ok(Padding::uniform(*inset)),
        [left, top, right, bottom] => Ok(Padding::new(*left, *top, *right, *bottom)),
        _ => Err(format!("expected 1 or 4 comma-separated insets, got {} in `{raw}`", insets.len())),
    }
}

fn parse_px(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.trim().parse().map_err(|_| format!("`{}` is not a number", raw.trim()))?;
    if value.is_finite() { Ok(value) } else { Err(format!("`{}` is not a finite number", raw.trim())) }
}

#[cfg(test)]
#[path = "args_test.rs"]
mod tests;
