//! Error types for overlay configuration and stage operations.

use thiserror::Error;

use crate::overlay::OverlayId;

/// Errors raised by overlay configuration and [`Stage`](crate::Stage) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// The edge name is not one of `top`, `bottom`, `left` or `right`.
    #[error("Invalid show-from edge '{0}' (expected top, bottom, left or right)")]
    InvalidEdge(String),

    /// The id does not belong to a live overlay on this stage.
    #[error("Overlay {0} is not registered")]
    UnknownOverlay(OverlayId),

    /// The overlay's enable guard refused to let it show.
    #[error("Overlay {0} could not be enabled")]
    EnableRejected(OverlayId),
}

/// Errors raised while loading a [`StageConfig`](crate::StageConfig).
#[derive(Debug, Error)]
pub enum StageConfigError {
    #[error("Failed to parse stage config: {0}")]
    Parse(#[from] serde_json::Error),
}
