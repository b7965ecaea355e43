//! Media Preferences
//!
//! User preference media features (`prefers-reduced-motion` and friends),
//! read from the host environment and matched against media queries.

use serde::{Deserialize, Serialize};

const REDUCED_MOTION_VAR: &str = "FOS_PREFERS_REDUCED_MOTION";
const COLOR_SCHEME_VAR: &str = "FOS_PREFERS_COLOR_SCHEME";
const CONTRAST_VAR: &str = "FOS_PREFERS_CONTRAST";
const FORCED_COLORS_VAR: &str = "FOS_FORCED_COLORS";

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Contrast preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContrastPreference {
    #[default]
    NoPreference,
    More,
    Less,
    Custom,
}

/// Combined media preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaPreferences {
    /// prefers-reduced-motion: reduce
    pub reduced_motion: bool,
    /// prefers-color-scheme
    pub color_scheme: ColorScheme,
    /// prefers-contrast
    pub contrast: ContrastPreference,
    /// forced-colors: active
    pub forced_colors: bool,
}

impl MediaPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query the host environment
    pub fn from_system() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a variable lookup; unset or unrecognised values mean no preference
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_ascii_lowercase());

        let reduced_motion = value(REDUCED_MOTION_VAR).is_some_and(|v| is_enabled(&v, "reduce"));
        let color_scheme = match value(COLOR_SCHEME_VAR).as_deref() {
            Some("dark") => ColorScheme::Dark,
            _ => ColorScheme::Light,
        };
        let contrast = match value(CONTRAST_VAR).as_deref() {
            Some("more") => ContrastPreference::More,
            Some("less") => ContrastPreference::Less,
            Some("custom") => ContrastPreference::Custom,
            _ => ContrastPreference::NoPreference,
        };
        let forced_colors = value(FORCED_COLORS_VAR).is_some_and(|v| is_enabled(&v, "active"));

        Self { reduced_motion, color_scheme, contrast, forced_colors }
    }

    /// Check if a single media feature query matches, e.g.
    /// `(prefers-reduced-motion: reduce)`. A feature without a value matches
    /// when the preference is not the "no preference" state.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        let inner = query
            .strip_prefix('(')
            .and_then(|q| q.strip_suffix(')'))
            .unwrap_or(query.as_str());

        let (feature, value) = match inner.split_once(':') {
            Some((feature, value)) => (feature.trim(), Some(value.trim())),
            None => (inner.trim(), None),
        };

        match (feature, value) {
            ("prefers-reduced-motion", None) => self.reduced_motion,
            ("prefers-reduced-motion", Some("reduce")) => self.reduced_motion,
            ("prefers-reduced-motion", Some("no-preference")) => !self.reduced_motion,
            ("prefers-color-scheme", None) => true,
            ("prefers-color-scheme", Some("light")) => self.color_scheme == ColorScheme::Light,
            ("prefers-color-scheme", Some("dark")) => self.color_scheme == ColorScheme::Dark,
            ("prefers-contrast", None) => self.contrast != ContrastPreference::NoPreference,
            ("prefers-contrast", Some("no-preference")) => {
                self.contrast == ContrastPreference::NoPreference
            }
            ("prefers-contrast", Some("more")) => self.contrast == ContrastPreference::More,
            ("prefers-contrast", Some("less")) => self.contrast == ContrastPreference::Less,
            ("prefers-contrast", Some("custom")) => self.contrast == ContrastPreference::Custom,
            ("forced-colors", None) | ("forced-colors", Some("active")) => self.forced_colors,
            ("forced-colors", Some("none")) => !self.forced_colors,
            _ => false,
        }
    }
}

fn is_enabled(value: &str, keyword: &str) -> bool {
    matches!(value, "1" | "true" | "yes" | "on") || value == keyword
}
