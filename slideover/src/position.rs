//! Placement math for shown and hidden overlays.

use crate::types::{Edge, Point, Size};

/// Compute the top-left point for an overlay.
///
/// A shown overlay is centered in the viewport. When the page is not in fixed
/// positioning mode, `scroll_offset` is added to `y` so that the overlay lands
/// in the visible part of the document.
///
/// A hidden overlay sits at the same centered point, translated by one full
/// viewport width or height towards `edge`.
///
/// # Arguments
///
/// * `edge` - Side the overlay travels to when hidden
/// * `show` - `true` for the on-screen point, `false` for the off-screen one
/// * `viewport` - Current viewport size
/// * `size` - Overlay bounding box size
/// * `scroll_offset` - Current page scroll-Y
/// * `position_fixed` - Whether overlays are positioned relative to the viewport
pub fn compute_xy(
    edge: Edge,
    show: bool,
    viewport: Size,
    size: Size,
    scroll_offset: i32,
    position_fixed: bool,
) -> Point {
    let vw = viewport.width as i64;
    let vh = viewport.height as i64;

    // Floor division: an overlay wider than the viewport centers at a negative x.
    let x = (vw - size.width as i64).div_euclid(2);
    let mut y = (vh - size.height as i64).div_euclid(2);
    if !position_fixed {
        y += scroll_offset as i64;
    }

    if !show {
        let (dx, dy) = edge.vector();
        return Point::new(
            clamp_i32(x + dx as i64 * vw),
            clamp_i32(y + dy as i64 * vh),
        );
    }

    Point::new(clamp_i32(x), clamp_i32(y))
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
