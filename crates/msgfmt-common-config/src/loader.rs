//! Configuration file loading and parsing.

use crate::capability::parse_icu_version;
use crate::types::FormatterConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory holding the project configuration.
pub const CONFIG_DIR: &str = ".msgfmt";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

static ENV_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").expect("valid env var regex"));

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error(
        "invalid YAML at line {}: {message}",
        line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string())
    )]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

/// Configuration loader.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            base_path: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the configuration file this loader reads.
    pub fn config_path(&self) -> PathBuf {
        self.base_path.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load configuration from `.msgfmt/config.yaml`, falling back to
    /// defaults when the file does not exist.
    pub fn load(&self) -> Result<FormatterConfig, ConfigError> {
        let config_path = self.config_path();

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(FormatterConfig::default());
        }

        self.load_file(&config_path)
    }

    /// Load configuration from an explicit file. The file must exist.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<FormatterConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let config = self.parse(&contents)?;
        tracing::debug!(path = %path.display(), locale = %config.locale, "loaded config");
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn parse(&self, contents: &str) -> Result<FormatterConfig, ConfigError> {
        let expanded = self.expand_env_vars(contents)?;

        let config: FormatterConfig =
            serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        self.validate(&config)?;
        Ok(config)
    }

    /// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
    fn expand_env_vars(&self, content: &str) -> Result<String, ConfigError> {
        let mut missing = None;

        let expanded = ENV_VAR_RE.replace_all(content, |cap: &regex::Captures<'_>| {
            let var_name = &cap[1];
            match (std::env::var(var_name), cap.get(2)) {
                (Ok(v), _) => v,
                (Err(_), Some(default)) => default.as_str().to_string(),
                (Err(_), None) => {
                    missing.get_or_insert_with(|| var_name.to_string());
                    String::new()
                }
            }
        });

        match missing {
            Some(var) => Err(ConfigError::EnvVarNotFound { var }),
            None => Ok(expanded.into_owned()),
        }
    }

    /// Validate configuration values.
    fn validate(&self, config: &FormatterConfig) -> Result<(), ConfigError> {
        if config.locale.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "locale must not be empty".to_string(),
            });
        }

        if let Some(version) = &config.engine.icu_version {
            if parse_icu_version(version).is_none() {
                return Err(ConfigError::ValidationError {
                    message: format!("engine.icu_version is not a version number: {version}"),
                });
            }
        }

        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, config: &FormatterConfig) -> Result<(), ConfigError> {
        let config_path = self.config_path();
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;

        std::fs::write(config_path, yaml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}
