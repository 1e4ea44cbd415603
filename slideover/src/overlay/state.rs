/// Visibility state of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    /// Moving on-screen.
    Showing,
    Visible,
    /// Moving off-screen.
    Hiding,
}

impl OverlayState {
    /// True while the overlay is shown or on its way in.
    pub const fn is_visible(self) -> bool {
        matches!(self, OverlayState::Showing | OverlayState::Visible)
    }
}
