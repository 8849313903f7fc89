//! Lexing of the text that follows a `{` in a message pattern.
//!
//! A pattern is scanned by splitting it at every `{`. Each resulting
//! segment either starts a placeholder (`name}` or `name, type...`) or is
//! free text that merely follows a literal brace.

use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)([0-9A-Za-z_]+)(\s*)([},])(\s*)((?s:.*))$")
        .expect("valid placeholder regex")
});

/// What closes the argument name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `,`: a type follows, maybe with a style or branch list.
    Comma,
    /// `}`: a plain placeholder.
    Close,
}

/// Argument type named after the first comma of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType<'a> {
    /// No type: `{name}`.
    None,
    Plural,
    Select,
    SelectOrdinal,
    /// Any other type (`number`, `date`, ...). May be empty for malformed input.
    Simple(&'a str),
}

impl<'a> ArgType<'a> {
    /// Classify the text after the comma by its leading word.
    ///
    /// The whole word is compared, so `selectordinal` is never mistaken
    /// for `select`.
    pub fn from_type_text(text: &'a str) -> Self {
        let end = text
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(text.len());
        match &text[..end] {
            "plural" => Self::Plural,
            "select" => Self::Select,
            "selectordinal" => Self::SelectOrdinal,
            word => Self::Simple(word),
        }
    }

    /// Whether braces directly inside this argument open choice branches.
    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Plural | Self::Select | Self::SelectOrdinal)
    }
}

/// A segment that starts with an argument reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub leading_ws: &'a str,
    pub name: &'a str,
    pub trailing_ws: &'a str,
    pub separator: Separator,
    /// Whitespace between the separator and `rest`.
    pub gap_ws: &'a str,
    /// Everything after the separator and its whitespace, up to the next `{`.
    pub rest: &'a str,
    /// Everything after `name`: `trailing_ws`, separator, `gap_ws` and `rest`.
    pub tail: &'a str,
}

impl<'a> Placeholder<'a> {
    /// Argument type of this placeholder.
    pub fn arg_type(&self) -> ArgType<'a> {
        match self.separator {
            Separator::Close => ArgType::None,
            Separator::Comma => ArgType::from_type_text(self.rest),
        }
    }

    /// Whether the name is a positional index rather than a name.
    pub fn is_positional(&self) -> bool {
        self.name.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Result of lexing one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Placeholder(Placeholder<'a>),
    /// Not a placeholder; the segment is copied through as-is.
    Text(&'a str),
}

/// Lex the text following a `{`.
pub fn lex_segment(segment: &str) -> Segment<'_> {
    let Some(caps) = PLACEHOLDER_RE.captures(segment) else {
        return Segment::Text(segment);
    };

    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let name = caps.get(2).map_or(0..0, |m| m.range());
    let separator = if group(4) == "}" {
        Separator::Close
    } else {
        Separator::Comma
    };

    Segment::Placeholder(Placeholder {
        leading_ws: group(1),
        name: &segment[name.clone()],
        trailing_ws: group(3),
        separator,
        gap_ws: group(5),
        rest: group(6),
        tail: &segment[name.end..],
    })
}
