//! Configuration types.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Locale identifier used when none is given per call (e.g. `en-US`).
    pub locale: String,
    /// Format engine configuration.
    pub engine: EngineConfig,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            engine: EngineConfig::default(),
        }
    }
}

/// Format engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// ICU version reported by the engine, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icu_version: Option<String>,
    /// Whether named arguments are rewritten to positional ones.
    pub rewrite: RewriteMode,
}

/// Rewrite policy for named placeholders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteMode {
    /// Decide from the engine's ICU version.
    #[default]
    Auto,
    /// Always rewrite.
    Always,
    /// Never rewrite; the engine resolves names itself.
    Never,
}

impl RewriteMode {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" | "true" | "on" => Some(Self::Always),
            "never" | "false" | "off" => Some(Self::Never),
            _ => None,
        }
    }
}
