//! The format engine seam.
//!
//! Interpolation, number formatting and plural rules belong to the engine.
//! The rewriting layer only decides which pattern and which value order
//! the engine receives.

use crate::args::{ArgValue, ArgumentSet};
use crate::locale::Locale;
use thiserror::Error;

/// Failures reported by a format engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelegateError {
    /// The pattern is not valid message syntax.
    #[error("syntax error at offset {offset}: {message}")]
    Syntax {
        /// Byte offset into the pattern.
        offset: usize,
        /// What was expected or found.
        message: String,
    },

    /// A value has the wrong type for its placeholder.
    #[error("argument {argument} expects a {expected}, got {found}")]
    TypeMismatch {
        /// Argument name or index as written in the pattern.
        argument: String,
        /// Expected kind of value.
        expected: &'static str,
        /// Type of the supplied value.
        found: &'static str,
    },

    /// The engine cannot do what was asked.
    #[error("unsupported by format engine: {0}")]
    Unsupported(String),

    /// Any other engine failure.
    #[error("format engine failure: {0}")]
    Engine(String),
}

/// A message format engine.
pub trait FormatDelegate {
    /// Format a pattern whose placeholders are positional indexes.
    ///
    /// `values[i]` is the value of `{i}`.
    fn format_positional(
        &self,
        locale: &Locale,
        pattern: &str,
        values: &[ArgValue],
    ) -> Result<String, DelegateError>;

    /// Format a pattern with named placeholders natively.
    fn format_named(
        &self,
        locale: &Locale,
        pattern: &str,
        args: &ArgumentSet,
    ) -> Result<String, DelegateError> {
        let _ = (locale, pattern, args);
        Err(DelegateError::Unsupported("named arguments".to_string()))
    }

    /// Whether [`format_named`](Self::format_named) is implemented.
    fn supports_named_arguments(&self) -> bool {
        false
    }
}

impl<D: FormatDelegate + ?Sized> FormatDelegate for &D {
    fn format_positional(
        &self,
        locale: &Locale,
        pattern: &str,
        values: &[ArgValue],
    ) -> Result<String, DelegateError> {
        (**self).format_positional(locale, pattern, values)
    }

    fn format_named(
        &self,
        locale: &Locale,
        pattern: &str,
        args: &ArgumentSet,
    ) -> Result<String, DelegateError> {
        (**self).format_named(locale, pattern, args)
    }

    fn supports_named_arguments(&self) -> bool {
        (**self).supports_named_arguments()
    }
}

impl<D: FormatDelegate + ?Sized> FormatDelegate for Box<D> {
    fn format_positional(
        &self,
        locale: &Locale,
        pattern: &str,
        values: &[ArgValue],
    ) -> Result<String, DelegateError> {
        (**self).format_positional(locale, pattern, values)
    }

    fn format_named(
        &self,
        locale: &Locale,
        pattern: &str,
        args: &ArgumentSet,
    ) -> Result<String, DelegateError> {
        (**self).format_named(locale, pattern, args)
    }

    fn supports_named_arguments(&self) -> bool {
        (**self).supports_named_arguments()
    }
}
