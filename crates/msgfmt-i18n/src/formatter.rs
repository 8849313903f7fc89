//! Formatting with named arguments on top of any [`FormatDelegate`].

use crate::args::{ArgValue, ArgumentSet, PositionIndex};
use crate::delegate::FormatDelegate;
use crate::error::{FormatError, Result};
use crate::locale::Locale;
use crate::rewrite::rewrite_with_report;
use msgfmt_common_config::{ConfigLoader, FormatterConfig};
use msgfmt_common_log::spans;
use std::path::Path;

/// Format `pattern` with named `args` through `delegate`.
///
/// With `rewrite` set, named placeholders are replaced by their positions
/// and the values are handed over positionally in `args` order. Otherwise
/// the delegate resolves names itself. Delegate failures are returned
/// unchanged.
pub fn format_message<D>(
    delegate: &D,
    locale: &Locale,
    pattern: &str,
    args: &ArgumentSet,
    rewrite: bool,
) -> Result<String>
where
    D: FormatDelegate + ?Sized,
{
    let span = spans::format_span(&locale.tag(), rewrite);
    let _guard = span.enter();

    let result = if rewrite {
        let index = PositionIndex::from_arguments(args);
        let rewritten = rewrite_with_report(pattern, &index);
        tracing::debug!(
            pattern = %rewritten.pattern,
            "formatting rewritten pattern positionally"
        );
        let values: Vec<ArgValue> = args.values().cloned().collect();
        delegate.format_positional(locale, &rewritten.pattern, &values)
    } else {
        tracing::debug!("formatting with native named arguments");
        delegate.format_named(locale, pattern, args)
    };

    result.map_err(|e| {
        spans::record_error(&e);
        FormatError::from(e)
    })
}

/// A locale and pattern bound to a format engine.
///
/// Formatting never modifies the held pattern; the rewritten form only
/// lives for the duration of a call.
#[derive(Debug, Clone)]
pub struct MessageFormatter<D> {
    delegate: D,
    locale: Locale,
    pattern: String,
    rewrite: bool,
}

impl<D: FormatDelegate> MessageFormatter<D> {
    /// Create a formatter. Rewriting is enabled when the delegate lacks
    /// native named arguments.
    pub fn new(delegate: D, locale: Locale, pattern: impl Into<String>) -> Self {
        let rewrite = !delegate.supports_named_arguments();
        Self {
            delegate,
            locale,
            pattern: pattern.into(),
            rewrite,
        }
    }

    /// Create a formatter whose locale and rewrite decision come from
    /// configuration.
    pub fn from_config(
        delegate: D,
        config: &FormatterConfig,
        pattern: impl Into<String>,
    ) -> Result<Self> {
        let locale: Locale = config.locale.parse()?;
        let rewrite = config.engine.needs_rewrite();
        Ok(Self::new(delegate, locale, pattern).with_rewrite(rewrite))
    }

    /// Load `.msgfmt/config.yaml` under `project_dir` (defaults when it is
    /// missing) and build a formatter from it.
    pub fn from_project_dir(
        delegate: D,
        project_dir: impl AsRef<Path>,
        pattern: impl Into<String>,
    ) -> Result<Self> {
        let config = ConfigLoader::new(project_dir).load()?;
        Self::from_config(delegate, &config, pattern)
    }

    /// Override the capability decision.
    pub fn with_rewrite(mut self, rewrite: bool) -> Self {
        self.rewrite = rewrite;
        self
    }

    /// Whether named placeholders are rewritten before formatting.
    pub fn rewrites(&self) -> bool {
        self.rewrite
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    /// Format the held pattern.
    pub fn format(&self, args: &ArgumentSet) -> Result<String> {
        format_message(&self.delegate, &self.locale, &self.pattern, args, self.rewrite)
    }

    /// Format an explicit pattern with this formatter's locale and engine.
    pub fn format_message(&self, pattern: &str, args: &ArgumentSet) -> Result<String> {
        format_message(&self.delegate, &self.locale, pattern, args, self.rewrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::delegate::DelegateError;
    use crate::engine::PositionalEngine;
    use msgfmt_common_config::{EngineConfig, RewriteMode};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Records what it was asked to format.
    #[derive(Default)]
    struct Recording {
        calls: RefCell<Vec<(String, Vec<ArgValue>)>>,
    }

    impl FormatDelegate for Recording {
        fn format_positional(
            &self,
            _locale: &Locale,
            pattern: &str,
            values: &[ArgValue],
        ) -> std::result::Result<String, DelegateError> {
            self.calls.borrow_mut().push((pattern.to_string(), values.to_vec()));
            Ok(pattern.to_string())
        }
    }

    struct Failing;

    impl FormatDelegate for Failing {
        fn format_positional(
            &self,
            _locale: &Locale,
            _pattern: &str,
            _values: &[ArgValue],
        ) -> std::result::Result<String, DelegateError> {
            Err(DelegateError::Engine("boom".to_string()))
        }
    }

    #[test]
    fn test_rewrites_and_passes_values_in_order() {
        let recording = Recording::default();
        let args = args!(name = "Ann", count = 2);
        let out =
            format_message(&recording, &Locale::default(), "{count} for {name}", &args, true)
                .unwrap();

        assert_eq!(out, "{1} for {0}");
        let calls = recording.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, vec![ArgValue::from("Ann"), ArgValue::from(2)]);
    }

    #[test]
    fn test_no_rewrite_uses_native_named() {
        let recording = Recording::default();
        let err = format_message(&recording, &Locale::default(), "{name}", &args!(name = 1), false)
            .unwrap_err();
        assert!(matches!(err, FormatError::Delegate(DelegateError::Unsupported(_))));
    }

    #[test]
    fn test_delegate_failure_is_surfaced_unchanged() {
        let err =
            format_message(&Failing, &Locale::default(), "{x}", &args!(x = 1), true).unwrap_err();
        match err {
            FormatError::Delegate(inner) => {
                assert_eq!(inner, DelegateError::Engine("boom".to_string()))
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_formatter_does_not_mutate_pattern() {
        let formatter =
            MessageFormatter::new(PositionalEngine::new(), Locale::default(), "Hi {name}");
        assert!(formatter.rewrites());

        assert_eq!(formatter.format(&args!(name = "Bo")).unwrap(), "Hi Bo");
        assert_eq!(formatter.pattern(), "Hi {name}");
        assert_eq!(formatter.format(&args!(name = "Cy")).unwrap(), "Hi Cy");
    }

    #[test]
    fn test_default_capability_follows_delegate() {
        let native = MessageFormatter::new(
            PositionalEngine::with_named_arguments(),
            Locale::default(),
            "{a}",
        );
        assert!(!native.rewrites());
        assert_eq!(native.format(&args!(a = "x")).unwrap(), "x");
    }

    #[test]
    fn test_set_pattern_and_explicit_pattern() {
        let mut formatter =
            MessageFormatter::new(PositionalEngine::new(), Locale::default(), "{a}");
        formatter.set_pattern("[{a}]");
        assert_eq!(formatter.format(&args!(a = 1)).unwrap(), "[1]");
        assert_eq!(formatter.format_message("<{a}>", &args!(a = 2)).unwrap(), "<2>");
        assert_eq!(formatter.pattern(), "[{a}]");
    }

    #[test]
    fn test_from_config() {
        let config = FormatterConfig {
            locale: "fr_FR".to_string(),
            engine: EngineConfig {
                icu_version: Some("4.4".to_string()),
                rewrite: RewriteMode::Auto,
            },
        };
        let pattern = "{n, plural, one{un} other{#}}";
        let formatter =
            MessageFormatter::from_config(PositionalEngine::new(), &config, pattern).unwrap();
        assert!(formatter.rewrites());
        assert_eq!(formatter.locale().tag(), "fr-FR");
        assert_eq!(formatter.format(&args!(n = 0)).unwrap(), "un");
    }

    #[test]
    fn test_from_config_rejects_bad_locale() {
        let config = FormatterConfig {
            locale: "not a locale".to_string(),
            ..Default::default()
        };
        let err = MessageFormatter::from_config(PositionalEngine::new(), &config, "").unwrap_err();
        assert!(matches!(err, FormatError::InvalidLocale(_)));
    }
}
