//! Named arguments for ICU-style message formatting.
//!
//! Older message format engines only understand positional placeholders
//! (`{0}`, `{1, number}`). This crate lets callers write patterns with named
//! placeholders (`{name}`, `{count, plural, ...}`) and, when the engine
//! cannot resolve names itself, rewrites each name to the position of its
//! argument before formatting.
//!
//! ```
//! use msgfmt_i18n::{args, Locale, MessageFormatter, PositionalEngine};
//!
//! let formatter = MessageFormatter::new(
//!     PositionalEngine::new(),
//!     Locale::default(),
//!     "{name} has {count, plural, one{# message} other{# messages}}",
//! );
//! let text = formatter.format(&args!(name = "Ann", count = 3)).unwrap();
//! assert_eq!(text, "Ann has 3 messages");
//! ```

pub mod args;
pub mod delegate;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod locale;
pub mod rewrite;

pub use args::{ArgValue, ArgumentSet, PositionIndex};
pub use delegate::{DelegateError, FormatDelegate};
pub use engine::PositionalEngine;
pub use error::{FormatError, Result};
pub use formatter::{format_message, MessageFormatter};
pub use locale::Locale;
pub use rewrite::{
    replace_named_arguments, rewrite_named_arguments, rewrite_with_report, Rewritten,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_then_positional_matches_native_named() {
        let pattern = "{user} added {photos, plural, =0{no photos} one{a photo} other{# photos}} \
                       to {gender, select, female{her} male{his} other{their}} album.";
        let args = args!(user = "Kim", photos = 4, gender = "male");
        let locale = Locale::default();

        let rewritten =
            format_message(&PositionalEngine::new(), &locale, pattern, &args, true).unwrap();
        let native = format_message(
            &PositionalEngine::with_named_arguments(),
            &locale,
            pattern,
            &args,
            false,
        )
        .unwrap();

        assert_eq!(rewritten, "Kim added 4 photos to his album.");
        assert_eq!(rewritten, native);
    }

    #[test]
    fn test_unresolved_placeholder_survives_formatting() {
        let out = format_message(
            &PositionalEngine::new(),
            &Locale::default(),
            "{greeting}, {name}!",
            &args!(name = "Bo"),
            true,
        )
        .unwrap();
        assert_eq!(out, "{greeting}, Bo!");
    }
}
