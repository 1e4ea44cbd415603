//! The overlay state machine and its owning context.
//!
//! A [`Stage`] owns every overlay on one UI root together with the pieces
//! they share: the registry and its `current` overlay, the mask, the scroll
//! lock and the transition runner. Show and hide requests run synchronously up
//! to the point where an animated move is scheduled; the move itself, and the
//! side effects that follow it, happen in [`Stage::tick`].
//!
//! # Usage
//!
//! ```ignore
//! let mut stage = Stage::new(host, StageConfig::default());
//! let menu = stage.add(OverlayConfig::new().show_from(Edge::Right));
//!
//! stage.show(menu)?;
//! loop {
//!     stage.tick(Instant::now());
//!     // draw, poll input ...
//! }
//! ```

use std::time::Instant;

use crate::animation::{Completed, TransitionRunner};
use crate::config::StageConfig;
use crate::error::OverlayError;
use crate::host::Host;
use crate::mask::{MaskController, MaskEvent, MaskResponse};
use crate::overlay::{EnableGuard, Overlay, OverlayConfig, OverlayId, OverlayState};
use crate::position::compute_xy;
use crate::registry::OverlayRegistry;
use crate::scroll_lock::ScrollLock;
use crate::transitions::TransitionConfig;
use crate::types::{Edge, Point, Size};

/// Owner of all overlays on one UI root.
pub struct Stage<H: Host> {
    host: H,
    config: StageConfig,
    registry: OverlayRegistry,
    mask: MaskController,
    scroll_lock: ScrollLock,
    runner: TransitionRunner,
}

impl<H: Host> Stage<H> {
    pub fn new(host: H, config: StageConfig) -> Self {
        let mut runner = TransitionRunner::new();
        runner.set_reduced_motion(config.reduced_motion);

        Self {
            host,
            scroll_lock: ScrollLock::new(config.native_scroll),
            config,
            registry: OverlayRegistry::new(),
            mask: MaskController::new(),
            runner,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.config.reduced_motion = enabled;
        self.runner.set_reduced_motion(enabled);
    }

    // -------------------------------------------------------------------------
    // Registry access
    // -------------------------------------------------------------------------

    /// Register a new overlay. It starts hidden and is rendered on first show.
    pub fn add(&mut self, config: OverlayConfig) -> OverlayId {
        let id = self.registry.insert(config);
        log::debug!("{id}: registered");
        id
    }

    pub fn overlay(&self, id: OverlayId) -> Result<&Overlay, OverlayError> {
        self.registry.get(id)
    }

    /// All live overlays in creation order.
    pub fn instances(&self) -> impl Iterator<Item = &Overlay> {
        self.registry.iter()
    }

    /// The overlay that is shown or on its way in, if any.
    pub fn current(&self) -> Option<OverlayId> {
        self.registry.current()
    }

    pub fn mask_visible(&self) -> bool {
        self.mask.is_visible()
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    /// Returns true while any overlay move is scheduled or running.
    pub fn is_animating(&self) -> bool {
        self.runner.has_active_transitions()
    }

    // -------------------------------------------------------------------------
    // Placement
    // -------------------------------------------------------------------------

    /// The on-screen (`show = true`) or off-screen point for an overlay under the
    /// current viewport and scroll offset.
    pub fn show_hide_xy(&self, id: OverlayId, show: bool) -> Result<Point, OverlayError> {
        let overlay = self.registry.get(id)?;
        Ok(compute_xy(
            overlay.show_from(),
            show,
            self.host.viewport(),
            overlay.size(),
            self.host.scroll_y(),
            self.config.position_fixed,
        ))
    }

    /// Size the overlay, apply its stacking order and place it at the point
    /// matching its visibility.
    pub fn render(&mut self, id: OverlayId) -> Result<(), OverlayError> {
        self.update_full_size(id)?;

        let overlay = self.registry.get_mut(id)?;
        overlay.mark_rendered();
        let (size, z_index, visible) = (overlay.size(), overlay.z_index(), overlay.is_visible());

        self.host.resize_node(id, size);
        self.host.set_z_index(id, z_index);
        let at = self.show_hide_xy(id, visible)?;
        self.host.place(id, at);
        Ok(())
    }

    /// Match a full-page overlay's size to the viewport.
    fn update_full_size(&mut self, id: OverlayId) -> Result<(), OverlayError> {
        let viewport = self.host.viewport();
        let overlay = self.registry.get_mut(id)?;
        if overlay.full_page() && overlay.size() != viewport {
            overlay.set_size(viewport);
            self.host.resize_node(id, viewport);
        }
        Ok(())
    }

    /// Put a visible overlay at its show point. A settled overlay snaps there;
    /// an overlay still moving in has its move retargeted.
    fn place_shown(&mut self, id: OverlayId) -> Result<(), OverlayError> {
        let state = self.registry.get(id)?.state();
        if !state.is_visible() {
            return Ok(());
        }

        let target = self.show_hide_xy(id, true)?;
        if state == OverlayState::Showing && self.runner.retarget(id, target) {
            return Ok(());
        }
        self.host.place(id, target);
        Ok(())
    }

    /// Put a hidden overlay at its off-screen point. An overlay still moving out
    /// has its move retargeted instead.
    fn place_hidden(&mut self, id: OverlayId) -> Result<(), OverlayError> {
        let state = self.registry.get(id)?.state();
        if state.is_visible() {
            return Ok(());
        }

        let target = self.show_hide_xy(id, false)?;
        if state == OverlayState::Hiding && self.runner.retarget(id, target) {
            return Ok(());
        }
        self.host.place(id, target);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Show / hide
    // -------------------------------------------------------------------------

    /// Start showing an overlay.
    ///
    /// Returns `Ok(false)` if the overlay is already shown or showing. Any other
    /// visible overlay starts hiding first, so at most one is ever visible.
    pub fn show(&mut self, id: OverlayId) -> Result<bool, OverlayError> {
        let overlay = self.registry.get_mut(id)?;
        if overlay.is_visible() {
            log::debug!("{id}: show ignored, already {:?}", overlay.state());
            return Ok(false);
        }
        if !overlay.enable() {
            log::debug!("{id}: enable guard refused show");
            return Err(OverlayError::EnableRejected(id));
        }
        let rendered = overlay.is_rendered();

        if !rendered {
            self.render(id)?;
        }

        for other in self.registry.visible_except(id) {
            self.hide(other)?;
        }

        self.update_full_size(id)?;

        // Snap off-screen first; the animated phase starts on the next tick.
        let from = self.show_hide_xy(id, false)?;
        self.host.place(id, from);

        let overlay = self.registry.get_mut(id)?;
        let generation = overlay.begin(OverlayState::Showing);
        let transition = overlay.transition();
        self.registry.set_current(Some(id));

        self.scroll_lock.lock(&mut self.host);

        let to = self.show_hide_xy(id, true)?;
        self.runner.animate_to(id, from, to, transition, generation);
        log::debug!("{id}: showing {from:?} -> {to:?}");
        Ok(true)
    }

    /// Start hiding an overlay.
    ///
    /// Returns `Ok(false)` if the overlay is already hidden or hiding; the mask
    /// and `current` are then left alone.
    pub fn hide(&mut self, id: OverlayId) -> Result<bool, OverlayError> {
        let overlay = self.registry.get(id)?;
        if !overlay.is_visible() {
            log::debug!("{id}: hide ignored, already {:?}", overlay.state());
            return Ok(false);
        }

        let from = self.show_hide_xy(id, true)?;
        self.host.place(id, from);

        let overlay = self.registry.get_mut(id)?;
        let generation = overlay.begin(OverlayState::Hiding);
        let transition = overlay.transition();
        if self.registry.current() == Some(id) {
            self.registry.set_current(None);
        }

        self.scroll_lock.unlock(&mut self.host);

        let to = self.show_hide_xy(id, false)?;
        self.runner.animate_to(id, from, to, transition, generation);
        log::debug!("{id}: hiding {from:?} -> {to:?}");
        Ok(true)
    }

    /// Show the overlay if hidden, hide it otherwise.
    pub fn toggle(&mut self, id: OverlayId) -> Result<bool, OverlayError> {
        if self.registry.get(id)?.is_visible() {
            self.hide(id)
        } else {
            self.show(id)
        }
    }

    /// Advance all transitions to `now` and apply completion side effects.
    /// Returns the overlays whose transition finished.
    pub fn tick(&mut self, now: Instant) -> Vec<OverlayId> {
        let completed = self.runner.tick(now, &mut self.host);
        completed
            .into_iter()
            .filter_map(|done| self.finish(done).then_some(done.node))
            .collect()
    }

    fn finish(&mut self, done: Completed) -> bool {
        let Ok(overlay) = self.registry.get_mut(done.node) else {
            log::debug!("{}: completion for destroyed overlay", done.node);
            return false;
        };
        if overlay.generation() != done.generation {
            log::debug!(
                "{}: stale completion (generation {} != {})",
                done.node,
                done.generation,
                overlay.generation()
            );
            return false;
        }

        match overlay.state() {
            OverlayState::Showing => {
                overlay.set_state(OverlayState::Visible);
                let mask = overlay.mask();
                self.registry.set_current(Some(done.node));
                if mask {
                    self.mask.set_visible(&mut self.host, true);
                }
                log::debug!("{}: visible", done.node);
            }
            OverlayState::Hiding => {
                overlay.set_state(OverlayState::Hidden);
                overlay.disable();
                let mask = overlay.mask();
                if mask && !self.registry.current_wants_mask() {
                    self.mask.set_visible(&mut self.host, false);
                }
                log::debug!("{}: hidden", done.node);
            }
            state => {
                log::debug!("{}: completion ignored in {state:?}", done.node);
                return false;
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Resize
    // -------------------------------------------------------------------------

    /// Adapt an overlay to the current viewport.
    ///
    /// Without `force`, hidden overlays and overlays already matching the
    /// viewport are left alone. A running show transition is retargeted rather
    /// than restarted. Returns true if anything was recomputed.
    pub fn resize(&mut self, id: OverlayId, force: bool) -> Result<bool, OverlayError> {
        let overlay = self.registry.get(id)?;
        if !force {
            if !overlay.is_visible() {
                return Ok(false);
            }
            if overlay.size() == self.host.viewport() {
                return Ok(false);
            }
        }

        self.update_full_size(id)?;
        self.place_shown(id)?;
        self.place_hidden(id)?;
        Ok(true)
    }

    /// React to a viewport size change by resizing the current overlay.
    pub fn handle_viewport_resize(&mut self) -> bool {
        let Some(id) = self.registry.current() else {
            return false;
        };
        match self.resize(id, false) {
            Ok(changed) => changed,
            Err(err) => {
                log::warn!("viewport resize: {err}");
                false
            }
        }
    }

    // -------------------------------------------------------------------------
    // Mask input
    // -------------------------------------------------------------------------

    /// Handle input on the mask element.
    ///
    /// Gesture-start is always answered with `prevent_default`. An activation
    /// (click, or gesture-end on touch hosts) hides the current overlay; with no
    /// current overlay it does nothing.
    pub fn handle_mask_event(&mut self, event: MaskEvent) -> MaskResponse {
        if event == MaskEvent::GestureStart {
            return MaskResponse {
                prevent_default: true,
                closed: None,
            };
        }

        if !event.is_activation(self.host.has_touch()) {
            return MaskResponse::default();
        }

        let Some(id) = self.registry.current() else {
            log::debug!("mask activated with no current overlay");
            return MaskResponse::default();
        };

        match self.hide(id) {
            Ok(_) => MaskResponse {
                prevent_default: false,
                closed: Some(id),
            },
            Err(err) => {
                log::warn!("mask close: {err}");
                MaskResponse::default()
            }
        }
    }

    // -------------------------------------------------------------------------
    // Attribute setters
    // -------------------------------------------------------------------------

    /// Change the edge an overlay slides from. While hidden, the overlay is
    /// snapped to the new off-screen point. Returns false if unchanged.
    pub fn set_show_from(&mut self, id: OverlayId, edge: Edge) -> Result<bool, OverlayError> {
        let overlay = self.registry.get_mut(id)?;
        if overlay.show_from() == edge {
            return Ok(false);
        }
        overlay.set_show_from(edge);
        log::debug!("{id}: show_from = {edge}");
        self.place_hidden(id)?;
        Ok(true)
    }

    /// Like [`set_show_from`](Self::set_show_from), validating the edge name.
    pub fn set_show_from_str(&mut self, id: OverlayId, edge: &str) -> Result<bool, OverlayError> {
        self.set_show_from(id, edge.parse()?)
    }

    /// Change whether an overlay uses the mask. A visible overlay updates the
    /// mask immediately.
    pub fn set_mask(&mut self, id: OverlayId, mask: bool) -> Result<(), OverlayError> {
        let overlay = self.registry.get_mut(id)?;
        overlay.set_mask(mask);
        if overlay.is_visible() {
            self.mask.set_visible(&mut self.host, mask);
        }
        Ok(())
    }

    /// Turning full-page mode on resizes the overlay to the viewport if visible.
    pub fn set_full_page(&mut self, id: OverlayId, full_page: bool) -> Result<(), OverlayError> {
        self.registry.get_mut(id)?.set_full_page(full_page);
        if full_page {
            self.resize(id, false)?;
        }
        Ok(())
    }

    /// Set an overlay's size. A visible overlay is re-placed at its show point.
    pub fn set_size(&mut self, id: OverlayId, size: Size) -> Result<(), OverlayError> {
        self.registry.get_mut(id)?.set_size(size);
        self.host.resize_node(id, size);
        self.place_shown(id)
    }

    /// Takes effect on the next show or hide.
    pub fn set_transition(
        &mut self,
        id: OverlayId,
        transition: TransitionConfig,
    ) -> Result<(), OverlayError> {
        self.registry.get_mut(id)?.set_transition(transition);
        Ok(())
    }

    pub fn set_enable_guard(
        &mut self,
        id: OverlayId,
        guard: Option<EnableGuard>,
    ) -> Result<(), OverlayError> {
        self.registry.get_mut(id)?.set_enable_guard(guard);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Remove an overlay from the stage.
    ///
    /// Its in-flight move is dropped without completing. If it was on screen,
    /// the scroll lock is released and the mask is hidden unless another masked
    /// overlay is current.
    pub fn destroy(&mut self, id: OverlayId) -> Result<(), OverlayError> {
        let overlay = self.registry.remove(id)?;
        self.runner.cancel(id);

        if overlay.is_visible() {
            self.scroll_lock.unlock(&mut self.host);
        }
        if overlay.state() != OverlayState::Hidden
            && overlay.mask()
            && !self.registry.current_wants_mask()
        {
            self.mask.set_visible(&mut self.host, false);
        }

        self.host.remove_node(id);
        log::debug!("{id}: destroyed");
        Ok(())
    }
}
