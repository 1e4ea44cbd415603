//! The shared dimming backdrop behind a visible overlay.

use crate::host::MaskSurface;
use crate::overlay::OverlayId;

/// Input delivered to the mask element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskEvent {
    Click,
    GestureStart,
    GestureEnd,
}

impl MaskEvent {
    /// Whether this event should close the current overlay. Touch hosts close on
    /// gesture-end, pointer hosts on click.
    pub fn is_activation(self, touch: bool) -> bool {
        match self {
            MaskEvent::Click => !touch,
            MaskEvent::GestureEnd => touch,
            MaskEvent::GestureStart => false,
        }
    }
}

/// What the stage did with a [`MaskEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaskResponse {
    /// The host should suppress the event's default action (scroll/pan).
    pub prevent_default: bool,
    /// Overlay whose hide was started by this event.
    pub closed: Option<OverlayId>,
}

/// Display state of the single backdrop element.
#[derive(Debug, Default)]
pub struct MaskController {
    created: bool,
    visible: bool,
}

impl MaskController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Show or hide the backdrop. Creates the element on first change.
    /// Returns true if the display state changed.
    pub fn set_visible<S: MaskSurface + ?Sized>(&mut self, surface: &mut S, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }

        if !self.created {
            surface.create_mask();
            self.created = true;
        }

        surface.set_mask_display(visible);
        self.visible = visible;
        log::debug!("mask {}", if visible { "shown" } else { "hidden" });
        true
    }
}
