//! Services the overlay core calls into.
//!
//! A [`Stage`](crate::Stage) never touches a real display directly. Everything
//! it needs from the environment goes through these traits, so the same state
//! machine can drive a terminal, a browser binding, or a recording test double.

use crate::overlay::OverlayId;
use crate::types::{Point, Size};

/// Read-only view of the viewport.
pub trait ViewportProbe {
    /// Current viewport width and height.
    fn viewport(&self) -> Size;

    /// Current page scroll offset along the vertical axis.
    fn scroll_y(&self) -> i32;

    /// Whether the device reports touch input. Touch hosts close overlays on
    /// gesture-end instead of click.
    fn has_touch(&self) -> bool {
        false
    }
}

/// Page-level scroll control used by the scroll lock.
pub trait PageSurface {
    fn scroll_to(&mut self, y: i32);

    /// Pin the page content at `offset` with a fixed `height`.
    fn pin_page(&mut self, offset: i32, height: u32);

    fn unpin_page(&mut self);
}

/// Placement of overlay bounding boxes.
pub trait NodeSurface {
    /// Move an overlay's bounding box to `at` without animation.
    fn place(&mut self, node: OverlayId, at: Point);

    fn resize_node(&mut self, node: OverlayId, size: Size);

    fn set_z_index(&mut self, _node: OverlayId, _z_index: i32) {}

    /// Release whatever the host holds for a destroyed overlay.
    fn remove_node(&mut self, _node: OverlayId) {}
}

/// The shared dimming backdrop.
pub trait MaskSurface {
    /// Create the backdrop element. Called at most once per stage.
    fn create_mask(&mut self);

    fn set_mask_display(&mut self, visible: bool);
}

/// Everything a [`Stage`](crate::Stage) needs from its environment.
pub trait Host: ViewportProbe + PageSurface + NodeSurface + MaskSurface {}

impl<T> Host for T where T: ViewportProbe + PageSurface + NodeSurface + MaskSurface {}
