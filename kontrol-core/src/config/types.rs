//! Configuration type definitions
//!
//! Settings arrive from the host's preference store. With the `toml`
//! feature they can also be read from a TOML document, e.g.
//!
//! ```toml
//! flip_track_clip_navigation = true
//! ```

use crate::traits::Configuration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Document is not valid TOML or has a wrongly typed key
    Parse,
}

/// Parameter mode configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KontrolConfig {
    /// Swap which navigation arrows scroll parameter pages and which
    /// scroll devices
    pub flip_track_clip_navigation: bool,
}

impl KontrolConfig {
    /// Parse configuration from a TOML document
    ///
    /// Missing keys keep their defaults.
    #[cfg(feature = "toml")]
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|_| ConfigError::Parse)
    }
}

impl Configuration for KontrolConfig {
    fn is_flip_track_clip_navigation(&self) -> bool {
        self.flip_track_clip_navigation
    }
}
