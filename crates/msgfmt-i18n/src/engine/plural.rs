//! Plural categories for the locales the reference engine knows.
//!
//! Only integer-valued operands get language-specific rules; fractions
//! always fall into `other`. Unknown languages use the English rules.

use crate::locale::Locale;

/// Cardinal category of `n`.
pub(crate) fn cardinal(locale: &Locale, n: f64) -> &'static str {
    let Some(i) = integer(n) else {
        return "other";
    };

    match locale.language() {
        "ja" | "zh" | "ko" | "th" | "vi" | "id" => "other",
        "fr" => {
            if i == 0 || i == 1 {
                "one"
            } else {
                "other"
            }
        }
        _ => {
            if i == 1 {
                "one"
            } else {
                "other"
            }
        }
    }
}

/// Ordinal category of `n`.
pub(crate) fn ordinal(locale: &Locale, n: f64) -> &'static str {
    let Some(i) = integer(n) else {
        return "other";
    };

    match locale.language() {
        "en" => match (i % 10, i % 100) {
            (1, r) if r != 11 => "one",
            (2, r) if r != 12 => "two",
            (3, r) if r != 13 => "few",
            _ => "other",
        },
        "fr" if i == 1 => "one",
        _ => "other",
    }
}

fn integer(n: f64) -> Option<u64> {
    (n.is_finite() && n.fract() == 0.0).then(|| n.abs() as u64)
}
