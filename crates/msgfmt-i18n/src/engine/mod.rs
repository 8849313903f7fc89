//! A small message format engine.
//!
//! [`PositionalEngine`] understands the common subset of the ICU message
//! syntax: simple and typed arguments, `number` with the `integer` and
//! `percent` styles, `plural`, `selectordinal` and `select`. It stands in
//! for a platform formatter that only accepts positional arguments, and can
//! optionally resolve names itself so both paths can be compared.

mod parser;
mod plural;

use crate::args::{ArgValue, ArgumentSet};
use crate::delegate::{DelegateError, FormatDelegate};
use crate::locale::Locale;
use parser::{keyword_branch, ArgKey, ArgKind, Argument, Branch, Node, Parser, Selector};

/// Reference engine over positional (and optionally named) arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionalEngine {
    named: bool,
}

impl PositionalEngine {
    /// An engine that only accepts positional arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine that also resolves named arguments natively.
    pub fn with_named_arguments() -> Self {
        Self { named: true }
    }
}

impl FormatDelegate for PositionalEngine {
    fn format_positional(
        &self,
        locale: &Locale,
        pattern: &str,
        values: &[ArgValue],
    ) -> Result<String, DelegateError> {
        let message = Parser::parse(pattern)?;
        Renderer::new(locale, Values::Positional(values)).render(&message, None)
    }

    fn format_named(
        &self,
        locale: &Locale,
        pattern: &str,
        args: &ArgumentSet,
    ) -> Result<String, DelegateError> {
        if !self.named {
            return Err(DelegateError::Unsupported("named arguments".to_string()));
        }
        let message = Parser::parse(pattern)?;
        Renderer::new(locale, Values::Named(args)).render(&message, None)
    }

    fn supports_named_arguments(&self) -> bool {
        self.named
    }
}

#[derive(Clone, Copy)]
enum Values<'v> {
    Positional(&'v [ArgValue]),
    Named(&'v ArgumentSet),
}

impl<'v> Values<'v> {
    fn lookup(&self, key: ArgKey<'_>) -> Option<&'v ArgValue> {
        match (*self, key) {
            (Self::Positional(values), ArgKey::Index(i)) => values.get(i),
            (Self::Positional(_), ArgKey::Name(_)) => None,
            (Self::Named(args), ArgKey::Name(name)) => args.get(name),
            (Self::Named(args), ArgKey::Index(i)) => args.get(&i.to_string()),
        }
    }
}

struct Renderer<'r> {
    locale: &'r Locale,
    values: Values<'r>,
}

impl<'r> Renderer<'r> {
    fn new(locale: &'r Locale, values: Values<'r>) -> Self {
        Self { locale, values }
    }

    /// Render `nodes`; `pound` is the number `#` stands for, if any.
    fn render(&self, nodes: &[Node<'_>], pound: Option<f64>) -> Result<String, DelegateError> {
        let mut out = String::new();
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Pound => match pound {
                    Some(n) => out.push_str(&format_number(self.locale, n)),
                    None => out.push('#'),
                },
                Node::Argument(arg) => self.argument(arg, &mut out)?,
            }
        }
        Ok(out)
    }

    fn argument(&self, arg: &Argument<'_>, out: &mut String) -> Result<(), DelegateError> {
        let Some(value) = self.values.lookup(arg.key) else {
            tracing::trace!(argument = %arg.key, "no value, argument rendered as written");
            out.push_str(arg.source);
            return Ok(());
        };

        match &arg.kind {
            ArgKind::Simple { ty: Some("number"), style } => {
                let n = numeric(arg, value)?;
                out.push_str(&match *style {
                    Some("integer") => format_number(self.locale, n.round()),
                    Some("percent") => {
                        format!("{}%", format_number(self.locale, (n * 100.0).round()))
                    }
                    _ => format_number(self.locale, n),
                });
            }
            ArgKind::Simple { .. } => out.push_str(&value.to_string()),
            ArgKind::Plural {
                ordinal,
                offset,
                branches,
            } => {
                let n = numeric(arg, value)?;
                let shifted = n - offset;
                let category = if *ordinal {
                    plural::ordinal(self.locale, shifted)
                } else {
                    plural::cardinal(self.locale, shifted)
                };
                let branch =
                    exact_branch(branches, n).or_else(|| keyword_branch(branches, category));
                if let Some(branch) = branch {
                    out.push_str(&self.render(&branch.message, Some(shifted))?);
                }
            }
            ArgKind::Select { branches } => {
                if let Some(branch) = keyword_branch(branches, &value.to_string()) {
                    out.push_str(&self.render(&branch.message, None)?);
                }
            }
        }
        Ok(())
    }
}

fn exact_branch<'a, 'p>(branches: &'a [Branch<'p>], n: f64) -> Option<&'a Branch<'p>> {
    branches
        .iter()
        .find(|b| matches!(b.selector, Selector::Exact(v) if v == n))
}

fn numeric(arg: &Argument<'_>, value: &ArgValue) -> Result<f64, DelegateError> {
    value.as_f64().ok_or_else(|| DelegateError::TypeMismatch {
        argument: arg.key.to_string(),
        expected: "number",
        found: value.type_name(),
    })
}

/// (grouping, decimal) separators for a locale.
fn separators(locale: &Locale) -> (&'static str, &'static str) {
    match locale.language() {
        "de" | "es" | "it" | "pt" | "nl" | "id" | "tr" | "da" => (".", ","),
        "fr" | "ru" | "pl" | "cs" | "sv" | "nb" | "fi" | "uk" => ("\u{a0}", ","),
        _ => (",", "."),
    }
}

/// Render a number with locale grouping and decimal separators.
fn format_number(locale: &Locale, n: f64) -> String {
    let (group, decimal) = separators(locale);
    let text = if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    };

    let (sign, text) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text, None),
    };

    let mut out = String::from(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push_str(group);
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push_str(decimal);
        out.push_str(frac);
    }
    out
}
