//! Locale identifiers.

use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// A language with an optional region, e.g. `en-US` or `ja`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Parse from a locale string (e.g., "en-US", "ja_JP", "de_DE.UTF-8").
    ///
    /// Script subtags are skipped; encoding and `@modifier` suffixes are
    /// ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.split(['.', '@']).next()?.trim().replace('-', "_");
        let mut parts = s.split('_');

        let language = parts.next()?.to_ascii_lowercase();
        let alphabetic = language.bytes().all(|b| b.is_ascii_alphabetic());
        if !(2..=3).contains(&language.len()) || !alphabetic {
            return None;
        }

        let mut region = None;
        for part in parts {
            match part.len() {
                4 if part.bytes().all(|b| b.is_ascii_alphabetic()) => continue,
                2 if part.bytes().all(|b| b.is_ascii_alphabetic()) => {
                    region = Some(part.to_ascii_uppercase())
                }
                3 if part.bytes().all(|b| b.is_ascii_digit()) => region = Some(part.to_string()),
                _ => return None,
            }
        }

        Some(Self { language, region })
    }

    /// Lowercase language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase region code, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// BCP 47 style tag (`en-US`).
    pub fn tag(&self) -> String {
        self.to_string()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            region: None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FormatError::InvalidLocale(s.to_string()))
    }
}
