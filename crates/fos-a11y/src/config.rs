//! Accessibility configuration
//!
//! `A11yConfig` is the read-only configuration threaded into the helpers.
//! A process-wide instance is detected from the host environment on first
//! use and never changes afterwards.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::MediaPreferences;

static GLOBAL: OnceLock<A11yConfig> = OnceLock::new();

/// Accessibility configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct A11yConfig {
    /// User asked for reduced motion
    pub reduced_motion: bool,
    /// Prefix of generated element ids
    pub id_prefix: String,
}

impl Default for A11yConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            id_prefix: "fos-a11y".to_string(),
        }
    }
}

impl A11yConfig {
    pub fn from_preferences(prefs: &MediaPreferences) -> Self {
        Self {
            reduced_motion: prefs.reduced_motion,
            ..Self::default()
        }
    }

    /// Build the configuration from the host environment
    pub fn detect() -> Self {
        let config = Self::from_preferences(&MediaPreferences::from_system());
        tracing::debug!("Detected accessibility config: reduced_motion={}", config.reduced_motion);
        config
    }

    /// Process-wide configuration, detected on first access
    pub fn global() -> &'static A11yConfig {
        GLOBAL.get_or_init(Self::detect)
    }

    /// Install this configuration as the process-wide one. Fails, handing
    /// the configuration back, if the global was already initialised.
    pub fn install_global(self) -> Result<(), A11yConfig> {
        GLOBAL.set(self)
    }
}

/// Whether the user prefers reduced motion. Computed once per process.
pub fn prefers_reduced_motion() -> bool {
    A11yConfig::global().reduced_motion
}
