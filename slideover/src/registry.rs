use crate::error::OverlayError;
use crate::overlay::{Overlay, OverlayConfig, OverlayId};

/// Live overlays in creation order, plus the one currently shown.
///
/// Hiding never removes an overlay; only [`remove`](Self::remove) does.
#[derive(Debug, Default)]
pub struct OverlayRegistry {
    overlays: Vec<Overlay>,
    current: Option<OverlayId>,
    next_id: u64,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, config: OverlayConfig) -> OverlayId {
        self.next_id += 1;
        let id = OverlayId::new(self.next_id);
        self.overlays.push(Overlay::new(id, config));
        id
    }

    pub fn remove(&mut self, id: OverlayId) -> Result<Overlay, OverlayError> {
        let index = self
            .overlays
            .iter()
            .position(|o| o.id() == id)
            .ok_or(OverlayError::UnknownOverlay(id))?;
        if self.current == Some(id) {
            self.current = None;
        }
        Ok(self.overlays.remove(index))
    }

    pub fn get(&self, id: OverlayId) -> Result<&Overlay, OverlayError> {
        self.overlays
            .iter()
            .find(|o| o.id() == id)
            .ok_or(OverlayError::UnknownOverlay(id))
    }

    pub fn get_mut(&mut self, id: OverlayId) -> Result<&mut Overlay, OverlayError> {
        self.overlays
            .iter_mut()
            .find(|o| o.id() == id)
            .ok_or(OverlayError::UnknownOverlay(id))
    }

    /// All live overlays in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter()
    }

    pub fn current(&self) -> Option<OverlayId> {
        self.current
    }

    pub(crate) fn set_current(&mut self, current: Option<OverlayId>) {
        self.current = current;
    }

    /// Visible overlays other than `id`.
    pub(crate) fn visible_except(&self, id: OverlayId) -> Vec<OverlayId> {
        self.overlays
            .iter()
            .filter(|o| o.id() != id && o.is_visible())
            .map(Overlay::id)
            .collect()
    }

    /// Whether the current overlay wants the mask shown.
    pub(crate) fn current_wants_mask(&self) -> bool {
        self.current
            .and_then(|id| self.get(id).ok())
            .is_some_and(|o| o.mask() && o.is_visible())
    }
}
