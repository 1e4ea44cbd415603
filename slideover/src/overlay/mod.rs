//! Overlay instances and their configuration.

mod attributes;
mod config;
mod state;

use std::fmt;

pub use attributes::{AttributeSource, FULL_PAGE_ATTR, MASK_ATTR, SHOW_FROM_ATTR, TRANSITION_ATTR};
pub use config::{EnableGuard, OverlayConfig, DEFAULT_Z_INDEX};
pub use state::OverlayState;

use crate::transitions::TransitionConfig;
use crate::types::{Edge, Size};

/// Handle to an overlay registered on a [`Stage`](crate::Stage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

impl OverlayId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay#{}", self.0)
    }
}

/// One overlay panel.
///
/// Instances are owned by the stage's registry. Read access is public; all
/// changes go through [`Stage`](crate::Stage) so that placement, mask and
/// registry side effects happen alongside them.
pub struct Overlay {
    id: OverlayId,
    show_from: Edge,
    mask: bool,
    full_page: bool,
    size: Size,
    z_index: i32,
    transition: TransitionConfig,
    enable_guard: Option<EnableGuard>,
    state: OverlayState,
    enabled: bool,
    /// Bumped on every show/hide request. Completions carry the value they
    /// were scheduled with.
    generation: u64,
    rendered: bool,
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("id", &self.id)
            .field("show_from", &self.show_from)
            .field("mask", &self.mask)
            .field("full_page", &self.full_page)
            .field("size", &self.size)
            .field("state", &self.state)
            .field("enabled", &self.enabled)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Overlay {
    pub(crate) fn new(id: OverlayId, config: OverlayConfig) -> Self {
        Self {
            id,
            mask: config.resolved_mask(),
            show_from: config.show_from,
            full_page: config.full_page,
            size: config.size,
            z_index: config.z_index,
            transition: config.transition,
            enable_guard: config.enable_guard,
            state: OverlayState::Hidden,
            enabled: false,
            generation: 0,
            rendered: false,
        }
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn show_from(&self) -> Edge {
        self.show_from
    }

    pub fn mask(&self) -> bool {
        self.mask
    }

    pub fn full_page(&self) -> bool {
        self.full_page
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn transition(&self) -> TransitionConfig {
        self.transition
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Target visibility: true while showing or shown.
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Run the enable guard. On success the overlay is marked enabled.
    pub(crate) fn enable(&mut self) -> bool {
        if let Some(guard) = &self.enable_guard {
            if !guard(self.id) {
                return false;
            }
        }
        self.enabled = true;
        true
    }

    pub(crate) fn disable(&mut self) {
        self.enabled = false;
    }

    /// Enter a transitioning state and return the new generation.
    pub(crate) fn begin(&mut self, state: OverlayState) -> u64 {
        self.state = state;
        self.generation += 1;
        self.generation
    }

    pub(crate) fn set_state(&mut self, state: OverlayState) {
        self.state = state;
    }

    pub(crate) fn set_show_from(&mut self, edge: Edge) {
        self.show_from = edge;
    }

    pub(crate) fn set_mask(&mut self, mask: bool) {
        self.mask = mask;
    }

    pub(crate) fn set_full_page(&mut self, full_page: bool) {
        self.full_page = full_page;
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub(crate) fn set_transition(&mut self, transition: TransitionConfig) {
        self.transition = transition;
    }

    pub(crate) fn set_enable_guard(&mut self, guard: Option<EnableGuard>) {
        self.enable_guard = guard;
    }

    pub(crate) fn mark_rendered(&mut self) {
        self.rendered = true;
    }
}
