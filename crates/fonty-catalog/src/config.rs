//! Adaptation Configuration

use serde::{Deserialize, Serialize};

use crate::{CatalogError, Result};

/// Catalog adaptation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// Drop families covering the Khmer script
    pub strip_khmer: bool,

    /// Skip italic variants when spreading
    pub strip_italic: bool,

    /// One entry per variant instead of one per family
    pub spread: bool,
}

impl Configuration {
    /// Create a configuration with every option off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set Khmer stripping
    pub fn strip_khmer(mut self, enabled: bool) -> Self {
        self.strip_khmer = enabled;
        self
    }

    /// Set italic stripping
    pub fn strip_italic(mut self, enabled: bool) -> Self {
        self.strip_italic = enabled;
        self
    }

    /// Set spreading
    pub fn spread(mut self, enabled: bool) -> Self {
        self.spread = enabled;
        self
    }

    /// Parse a JSON configuration document
    ///
    /// Missing keys keep their default.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CatalogError::InvalidConfig(e.to_string()))
    }

    /// Options enabled in either configuration
    pub fn union(self, other: Configuration) -> Self {
        Self {
            strip_khmer: self.strip_khmer || other.strip_khmer,
            strip_italic: self.strip_italic || other.strip_italic,
            spread: self.spread || other.spread,
        }
    }

    /// Check if any option is enabled
    pub fn is_active(&self) -> bool {
        self.strip_khmer || self.strip_italic || self.spread
    }
}
