//! Loadable style packs
//!
//! A style pack is a TOML document mapping style names to packed ids.
//! Hosts ship packs alongside the modules they load so module-side theme
//! names resolve against the host's compiled style table:
//!
//! ```toml
//! name = "shell-extras"
//!
//! [styles]
//! "theme.day-night" = 0x7F14_0300
//! "brand.accent" = 0x7F14_0400
//! ```

use std::collections::BTreeMap;

use capsule_core::StyleId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced while reading a style pack.
#[derive(Debug, Error)]
pub enum StylePackError {
    #[error("style pack is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A parsed style pack.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StylePack {
    /// Label used in logs when the pack is merged.
    #[serde(default)]
    pub name: String,

    /// Style name to packed id.
    #[serde(default)]
    pub styles: BTreeMap<String, u32>,
}

impl StylePack {
    /// Parse a pack from TOML source.
    pub fn from_toml_str(src: &str) -> Result<Self, StylePackError> {
        Ok(toml::from_str(src)?)
    }

    /// Iterate the pack's entries as typed style ids.
    pub fn entries(&self) -> impl Iterator<Item = (&str, StyleId)> {
        self.styles
            .iter()
            .map(|(name, raw)| (name.as_str(), StyleId::from_raw(*raw)))
    }

    /// Number of entries in the pack.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the pack carries no entries.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
