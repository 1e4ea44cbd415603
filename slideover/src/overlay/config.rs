use std::fmt;
use std::rc::Rc;

use crate::error::OverlayError;
use crate::overlay::OverlayId;
use crate::transitions::TransitionConfig;
use crate::types::{Edge, Size};

/// Default stacking order for overlays.
pub const DEFAULT_Z_INDEX: i32 = 200;

/// Hook consulted before an overlay shows. Returning false refuses the show.
pub type EnableGuard = Rc<dyn Fn(OverlayId) -> bool>;

/// Construction-time configuration for an overlay.
#[derive(Clone)]
pub struct OverlayConfig {
    /// Side the overlay slides in from.
    pub show_from: Edge,

    /// Explicit mask setting. When unset, full-page overlays go without a mask
    /// and all others get one.
    pub mask: Option<bool>,

    /// Track the viewport size.
    pub full_page: bool,

    /// Initial size. Replaced by the viewport size in full-page mode.
    pub size: Size,

    pub z_index: i32,

    pub transition: TransitionConfig,

    pub enable_guard: Option<EnableGuard>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            show_from: Edge::default(),
            mask: None,
            full_page: true,
            size: Size::default(),
            z_index: DEFAULT_Z_INDEX,
            transition: TransitionConfig::default(),
            enable_guard: None,
        }
    }
}

impl fmt::Debug for OverlayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayConfig")
            .field("show_from", &self.show_from)
            .field("mask", &self.mask)
            .field("full_page", &self.full_page)
            .field("size", &self.size)
            .field("z_index", &self.z_index)
            .field("transition", &self.transition)
            .field("enable_guard", &self.enable_guard.is_some())
            .finish()
    }
}

impl OverlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_from(mut self, edge: Edge) -> Self {
        self.show_from = edge;
        self
    }

    /// Set the edge by name, rejecting anything but `top`, `bottom`, `left` or `right`.
    pub fn show_from_str(self, edge: &str) -> Result<Self, OverlayError> {
        Ok(self.show_from(edge.parse()?))
    }

    pub fn mask(mut self, mask: bool) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn full_page(mut self, full_page: bool) -> Self {
        self.full_page = full_page;
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    pub fn enable_guard(mut self, guard: impl Fn(OverlayId) -> bool + 'static) -> Self {
        self.enable_guard = Some(Rc::new(guard));
        self
    }

    /// The mask setting after applying the full-page default.
    pub fn resolved_mask(&self) -> bool {
        self.mask.unwrap_or(!self.full_page)
    }
}
