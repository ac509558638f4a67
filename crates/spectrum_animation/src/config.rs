//! Preset table configuration
//!
//! Transitions are declared in a TOML `[transitions]` table:
//!
//! ```toml
//! [transitions]
//! open = { length = 1.5, easing = "quadratic, out" }
//! fade = { length = 0.3, easing = "linear" }
//! zoom = { length = 0.8, easing = "power(3, 1, 0.2), inout" }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;
use crate::presets::TransitionPresets;

/// One `[transitions]` entry
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TransitionConfig {
    /// Length in seconds
    pub length: f32,
    /// Easing definition
    pub easing: String,
}

/// Top-level preset document
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PresetsConfig {
    #[serde(default)]
    pub transitions: BTreeMap<String, TransitionConfig>,
}

impl PresetsConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn build(&self) -> Result<TransitionPresets> {
        TransitionPresets::from_definitions(
            self.transitions
                .iter()
                .map(|(name, t)| (name.as_str(), t.length, t.easing.as_str())),
        )
    }
}

impl TransitionPresets {
    /// Parse a TOML preset document into a table
    pub fn from_toml_str(text: &str) -> Result<Self> {
        PresetsConfig::from_toml_str(text)?.build()
    }
}
