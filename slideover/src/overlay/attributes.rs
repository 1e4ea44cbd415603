//! Reading overlay configuration from string attributes on a host element.

use std::collections::HashMap;

use crate::error::OverlayError;
use crate::overlay::OverlayConfig;
use crate::transitions::TransitionConfig;

/// Mask override marker. Any value but `"false"` enables the mask.
pub const MASK_ATTR: &str = "mask";
/// Edge name: `top`, `bottom`, `left` or `right`.
pub const SHOW_FROM_ATTR: &str = "show-from";
/// JSON-encoded transition config.
pub const TRANSITION_ATTR: &str = "cfg-ol-trans";
/// `"false"` disables full-page mode.
pub const FULL_PAGE_ATTR: &str = "full-page";

/// Something that exposes string attributes by name, like a markup element's
/// data attributes.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl AttributeSource for [(&str, &str)] {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }
}

impl OverlayConfig {
    /// Build a config from declarative attributes over the defaults.
    pub fn from_attributes<S: AttributeSource + ?Sized>(source: &S) -> Result<Self, OverlayError> {
        Self::default().with_attributes(source)
    }

    /// Apply declarative attributes on top of this config.
    ///
    /// An unknown edge name is an error. A malformed transition blob is logged
    /// and the default transition is used instead.
    pub fn with_attributes<S: AttributeSource + ?Sized>(
        mut self,
        source: &S,
    ) -> Result<Self, OverlayError> {
        if let Some(full_page) = source.attribute(FULL_PAGE_ATTR) {
            self.full_page = full_page != "false";
        }

        if let Some(edge) = source.attribute(SHOW_FROM_ATTR) {
            self.show_from = edge.parse()?;
        }

        if let Some(json) = source.attribute(TRANSITION_ATTR) {
            self.transition = TransitionConfig::from_json_or_default(json);
        }

        // An empty marker leaves the full-page default in place
        if let Some(mask) = source.attribute(MASK_ATTR).filter(|v| !v.is_empty()) {
            self.mask = Some(mask != "false");
        }

        Ok(self)
    }
}
