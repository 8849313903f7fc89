//! Error types for message formatting.

use crate::delegate::DelegateError;
use msgfmt_common_config::ConfigError;
use thiserror::Error;

/// Errors returned by the public formatting operations.
///
/// Rewriting itself never fails; everything here comes from the
/// format engine or from setting a formatter up.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The format engine rejected the pattern or the values.
    #[error(transparent)]
    Delegate(#[from] DelegateError),

    /// A locale identifier could not be parsed.
    #[error("invalid locale: {0}")]
    InvalidLocale(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegate_errors_pass_through_unchanged() {
        let inner = DelegateError::Syntax {
            offset: 3,
            message: "unmatched '}'".to_string(),
        };
        let error = FormatError::from(inner.clone());

        assert_eq!(error.to_string(), inner.to_string());
        match error {
            FormatError::Delegate(e) => assert_eq!(e, inner),
            other => panic!("expected Delegate, got {other:?}"),
        }
    }

    #[test]
    fn test_error_messages() {
        let error = FormatError::InvalidLocale("xx_".to_string());
        assert_eq!(error.to_string(), "invalid locale: xx_");

        let error = FormatError::from(ConfigError::ValidationError {
            message: "locale must not be empty".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "configuration error: validation error: locale must not be empty"
        );
    }
}
