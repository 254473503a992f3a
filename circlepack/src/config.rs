//! Layout engine configuration.
//!
//! Loaded from JSON or built in code. Every field has a default, so a
//! partial document (or `{}`) is valid.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::ConfigError;

/// Default transition duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 500;

/// Configuration for a [`LayoutEngine`](crate::LayoutEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Animate membership and geometry changes. When off, every pass is
    /// applied synchronously and removed items are detached immediately.
    pub animate: bool,

    /// Length of one transition timeline.
    pub duration_ms: u64,

    /// Curve used for every animated property.
    pub easing: Easing,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            animate: false,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::EaseOut,
        }
    }
}

impl LayoutConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Enable or disable animation.
    pub fn animated(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Set the transition duration.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the easing curve.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The transition duration as a `Duration`.
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
