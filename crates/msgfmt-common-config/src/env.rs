//! Environment variable handling.

use crate::capability::parse_icu_version;
use crate::types::{FormatterConfig, RewriteMode};
use std::env;
use thiserror::Error;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("required environment variable not set: {var}")]
    NotSet { var: String },

    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Environment variable names.
pub mod vars {
    // Configuration
    pub const MSGFMT_CONFIG_PATH: &str = "MSGFMT_CONFIG_PATH";
    pub const MSGFMT_LOCALE: &str = "MSGFMT_LOCALE";
    pub const MSGFMT_ICU_VERSION: &str = "MSGFMT_ICU_VERSION";
    pub const MSGFMT_REWRITE: &str = "MSGFMT_REWRITE";

    // Development
    pub const MSGFMT_ENV: &str = "MSGFMT_ENV";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Environment configuration.
pub struct Environment {
    _guard: (),
}

impl Environment {
    /// Initialize environment from .env files.
    pub fn init() -> Result<Self, EnvError> {
        // Later files override earlier ones.
        let _ = dotenvy::from_filename(".env");
        let _ = dotenvy::from_filename(".env.local");

        if let Ok(env) = env::var(vars::MSGFMT_ENV) {
            let _ = dotenvy::from_filename(format!(".env.{}", env));
        }

        Ok(Self { _guard: () })
    }

    /// Get a required string variable.
    pub fn require(var: &str) -> Result<String, EnvError> {
        env::var(var).map_err(|_| EnvError::NotSet { var: var.to_string() })
    }

    /// Get an optional string variable. Blank values count as unset.
    pub fn get(var: &str) -> Option<String> {
        env::var(var).ok().filter(|v| !v.trim().is_empty())
    }

    /// Get a variable with a default value.
    pub fn get_or(var: &str, default: &str) -> String {
        Self::get(var).unwrap_or_else(|| default.to_string())
    }

    /// Get a boolean variable.
    pub fn get_bool(var: &str) -> Option<bool> {
        Self::get(var).map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
    }
}

/// Apply `MSGFMT_*` overrides on top of a loaded configuration.
pub fn apply_overrides(config: &mut FormatterConfig) -> Result<(), EnvError> {
    if let Some(locale) = Environment::get(vars::MSGFMT_LOCALE) {
        config.locale = locale;
    }

    if let Some(version) = Environment::get(vars::MSGFMT_ICU_VERSION) {
        if parse_icu_version(&version).is_none() {
            return Err(EnvError::InvalidValue {
                var: vars::MSGFMT_ICU_VERSION.to_string(),
                message: format!("not a version number: {version}"),
            });
        }
        config.engine.icu_version = Some(version);
    }

    if let Some(mode) = Environment::get(vars::MSGFMT_REWRITE) {
        config.engine.rewrite = RewriteMode::parse(&mode).ok_or_else(|| EnvError::InvalidValue {
            var: vars::MSGFMT_REWRITE.to_string(),
            message: "expected auto, always or never".to_string(),
        })?;
    }

    Ok(())
}
