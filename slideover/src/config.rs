//! Stage-wide configuration.

use serde::Deserialize;

use crate::error::StageConfigError;

/// Configuration shared by every overlay on a [`Stage`](crate::Stage).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StageConfig {
    /// Pin the page while an overlay is visible, restoring scroll on hide.
    pub native_scroll: bool,

    /// Overlays are positioned relative to the viewport, so the page scroll
    /// offset is not added to their vertical position.
    pub position_fixed: bool,

    /// Complete every transition on its first frame.
    pub reduced_motion: bool,
}

impl StageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, StageConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn native_scroll(mut self, enabled: bool) -> Self {
        self.native_scroll = enabled;
        self
    }

    pub fn position_fixed(mut self, enabled: bool) -> Self {
        self.position_fixed = enabled;
        self
    }

    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }
}
