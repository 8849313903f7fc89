//! Engine capability detection.
//!
//! Named message arguments arrived in ICU 48. Engines built against an
//! older (or unknown) ICU only understand positional placeholders, so
//! patterns written with names have to be rewritten before formatting.

use crate::types::{EngineConfig, RewriteMode};
use semver::Version;

/// First ICU release that resolves named arguments natively.
pub const NAMED_ARGUMENTS_SINCE: Version = Version::new(48, 0, 0);

/// Parse an ICU version string.
///
/// ICU versions are dotted numbers with one to four components
/// (`"4.8"`, `"50.1.2"`, `"4.8.1.1"`). They are normalised to three
/// components: missing ones become zero, a fourth one is dropped.
pub fn parse_icu_version(s: &str) -> Option<Version> {
    let mut parts = [0u64; 3];
    for (i, part) in s.trim().split('.').enumerate() {
        let n: u64 = part.parse().ok()?;
        match i {
            0..=2 => parts[i] = n,
            3 => {}
            _ => return None,
        }
    }
    Some(Version::new(parts[0], parts[1], parts[2]))
}

/// Whether an engine with the given ICU version resolves named arguments.
pub fn supports_named_arguments(icu_version: &str) -> bool {
    parse_icu_version(icu_version)
        .map(|v| v >= NAMED_ARGUMENTS_SINCE)
        .unwrap_or(false)
}

/// Decide whether named placeholders must be rewritten for this engine.
pub fn needs_rewrite(engine: &EngineConfig) -> bool {
    let rewrite = match engine.rewrite {
        RewriteMode::Always => true,
        RewriteMode::Never => false,
        RewriteMode::Auto => !engine
            .icu_version
            .as_deref()
            .map(supports_named_arguments)
            .unwrap_or(false),
    };

    tracing::debug!(
        mode = ?engine.rewrite,
        icu_version = engine.icu_version.as_deref().unwrap_or("unknown"),
        rewrite,
        "resolved rewrite capability"
    );

    rewrite
}

impl EngineConfig {
    /// See [`needs_rewrite`].
    pub fn needs_rewrite(&self) -> bool {
        needs_rewrite(self)
    }
}
