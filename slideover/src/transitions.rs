use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default overlay slide duration, in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 0.5;

/// How an overlay moves between its hidden and shown points.
///
/// Deserializes from the declarative form `{"duration": 0.5, "easing": "ease-out"}`,
/// where `duration` is in seconds. Unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTransition")]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// A transition that completes on its first frame.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Easing::Linear)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a transition blob, falling back to the default when it is malformed.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring malformed transition config {json:?}: {err}");
                Self::default()
            }
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::new(
            Duration::from_secs_f64(DEFAULT_DURATION_SECS),
            Easing::Linear,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawTransition {
    duration: f64,
    easing: Easing,
}

impl Default for RawTransition {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION_SECS,
            easing: Easing::Linear,
        }
    }
}

impl TryFrom<RawTransition> for TransitionConfig {
    type Error = String;

    fn try_from(raw: RawTransition) -> Result<Self, Self::Error> {
        let duration = Duration::try_from_secs_f64(raw.duration)
            .map_err(|err| format!("invalid duration {}: {err}", raw.duration))?;
        Ok(Self::new(duration, raw.easing))
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}
