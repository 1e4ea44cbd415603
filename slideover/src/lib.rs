pub mod animation;
pub mod config;
pub mod error;
pub mod host;
pub mod mask;
pub mod overlay;
pub mod position;
pub mod registry;
pub mod scroll_lock;
pub mod stage;
pub mod terminal;
pub mod transitions;
pub mod types;

pub use animation::{Completed, TransitionRunner};
pub use config::StageConfig;
pub use error::{OverlayError, StageConfigError};
pub use host::{Host, MaskSurface, NodeSurface, PageSurface, ViewportProbe};
pub use mask::{MaskController, MaskEvent, MaskResponse};
pub use overlay::{AttributeSource, Overlay, OverlayConfig, OverlayId, OverlayState};
pub use position::compute_xy;
pub use registry::OverlayRegistry;
pub use scroll_lock::ScrollLock;
pub use stage::Stage;
pub use terminal::TerminalHost;
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
