//! Parser for the message syntax subset the engine understands.

use crate::delegate::DelegateError;
use std::fmt;

/// A parsed message: text, `#` and arguments in order.
pub(crate) type Message<'p> = Vec<Node<'p>>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node<'p> {
    /// Literal text with quoting already resolved.
    Text(String),
    /// `#` inside a plural branch.
    Pound,
    Argument(Argument<'p>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Argument<'p> {
    pub key: ArgKey<'p>,
    pub kind: ArgKind<'p>,
    /// The argument exactly as written, braces included.
    pub source: &'p str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArgKey<'p> {
    Index(usize),
    Name(&'p str),
}

impl fmt::Display for ArgKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ArgKind<'p> {
    Simple {
        ty: Option<&'p str>,
        style: Option<&'p str>,
    },
    Plural {
        ordinal: bool,
        offset: f64,
        branches: Vec<Branch<'p>>,
    },
    Select {
        branches: Vec<Branch<'p>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Branch<'p> {
    pub selector: Selector<'p>,
    pub message: Message<'p>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Selector<'p> {
    /// `=3`
    Exact(f64),
    /// `one`, `other`, or a select key.
    Keyword(&'p str),
}

pub(crate) const OTHER: &str = "other";

/// Find the branch for `keyword`, falling back to `other`.
pub(crate) fn keyword_branch<'a, 'p>(
    branches: &'a [Branch<'p>],
    keyword: &str,
) -> Option<&'a Branch<'p>> {
    let find = |wanted: &str| {
        branches
            .iter()
            .find(|b| matches!(b.selector, Selector::Keyword(k) if k == wanted))
    };
    find(keyword).or_else(|| find(OTHER))
}

/// Deepest argument nesting a pattern may use.
pub(crate) const MAX_NESTING: usize = 64;

pub(crate) struct Parser<'p> {
    src: &'p str,
    pos: usize,
    depth: usize,
}

impl<'p> Parser<'p> {
    /// Parse a complete top-level message.
    pub(crate) fn parse(src: &'p str) -> Result<Message<'p>, DelegateError> {
        Parser {
            src,
            pos: 0,
            depth: 0,
        }
        .message(false, false)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn error_at(&self, offset: usize, message: impl Into<String>) -> DelegateError {
        DelegateError::Syntax {
            offset,
            message: message.into(),
        }
    }

    fn error(&self, message: impl Into<String>) -> DelegateError {
        self.error_at(self.pos, message)
    }

    fn expect(&mut self, expected: char) -> Result<(), DelegateError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{expected}', found '{c}'"))),
            None => Err(self.error(format!("expected '{expected}', found end of pattern"))),
        }
    }

    fn identifier(&mut self) -> &'p str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    fn number(&mut self) -> Result<f64, DelegateError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.bump();
        }
        self.src[start..self.pos]
            .parse()
            .map_err(|_| self.error_at(start, "expected a number"))
    }

    /// Message text up to the end of input (top level) or the `}` closing
    /// a branch (nested). The closing brace is left for the caller.
    fn message(&mut self, in_plural: bool, nested: bool) -> Result<Message<'p>, DelegateError> {
        let mut nodes = Vec::new();
        let mut text = String::new();

        loop {
            match self.peek() {
                None if nested => return Err(self.error("unterminated branch message")),
                None => break,
                Some('}') if nested => break,
                Some('}') => return Err(self.error("unmatched '}'")),
                Some('{') => {
                    flush(&mut nodes, &mut text);
                    nodes.push(Node::Argument(self.argument()?));
                }
                Some('#') if in_plural => {
                    flush(&mut nodes, &mut text);
                    self.bump();
                    nodes.push(Node::Pound);
                }
                Some('\'') => self.apostrophe(in_plural, &mut text),
                Some(c) => {
                    self.bump();
                    text.push(c);
                }
            }
        }

        flush(&mut nodes, &mut text);
        Ok(nodes)
    }

    /// `''` is one apostrophe; an apostrophe before a syntax character
    /// starts a quoted literal; any other apostrophe is literal.
    fn apostrophe(&mut self, in_plural: bool, text: &mut String) {
        self.bump();
        match self.peek() {
            Some('\'') => {
                self.bump();
                text.push('\'');
            }
            Some('{') | Some('}') => self.quoted(text),
            Some('#') if in_plural => self.quoted(text),
            _ => text.push('\''),
        }
    }

    fn quoted(&mut self, text: &mut String) {
        while let Some(c) = self.bump() {
            if c != '\'' {
                text.push(c);
            } else if self.peek() == Some('\'') {
                self.bump();
                text.push('\'');
            } else {
                return;
            }
        }
    }

    fn argument(&mut self) -> Result<Argument<'p>, DelegateError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error(format!("arguments nested deeper than {MAX_NESTING}")));
        }
        self.depth += 1;
        let argument = self.argument_body();
        self.depth -= 1;
        argument
    }

    fn argument_body(&mut self) -> Result<Argument<'p>, DelegateError> {
        let start = self.pos;
        self.expect('{')?;
        self.skip_ws();

        let key_start = self.pos;
        let name = self.identifier();
        let key = if name.is_empty() {
            return Err(self.error("expected argument name or number"));
        } else if name.bytes().all(|b| b.is_ascii_digit()) {
            ArgKey::Index(
                name.parse()
                    .map_err(|_| self.error_at(key_start, "argument number too large"))?,
            )
        } else {
            ArgKey::Name(name)
        };

        self.skip_ws();
        let kind = match self.peek() {
            Some('}') => ArgKind::Simple { ty: None, style: None },
            Some(',') => {
                self.bump();
                self.typed_argument()?
            }
            _ => return Err(self.error("expected ',' or '}' after argument name")),
        };

        self.skip_ws();
        self.expect('}')?;

        Ok(Argument {
            key,
            kind,
            source: &self.src[start..self.pos],
        })
    }

    fn typed_argument(&mut self) -> Result<ArgKind<'p>, DelegateError> {
        self.skip_ws();
        let ty = self.identifier();
        if ty.is_empty() {
            return Err(self.error("expected argument type"));
        }
        self.skip_ws();

        let complex = matches!(ty, "plural" | "selectordinal" | "select");
        match self.peek() {
            Some('}') if !complex => Ok(ArgKind::Simple { ty: Some(ty), style: None }),
            Some(',') => {
                self.bump();
                match ty {
                    "plural" => self.plural(false),
                    "selectordinal" => self.plural(true),
                    "select" => Ok(ArgKind::Select {
                        branches: self.branches(false)?,
                    }),
                    _ => Ok(ArgKind::Simple {
                        ty: Some(ty),
                        style: Some(self.style_text()?),
                    }),
                }
            }
            _ => Err(self.error(format!("malformed '{ty}' argument"))),
        }
    }

    fn style_text(&mut self) -> Result<&'p str, DelegateError> {
        let start = self.pos;
        let mut depth = 0usize;
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated argument style")),
                Some('}') if depth == 0 => break,
                Some('}') => depth -= 1,
                Some('{') => depth += 1,
                Some(_) => {}
            }
            self.bump();
        }
        Ok(self.src[start..self.pos].trim())
    }

    fn plural(&mut self, ordinal: bool) -> Result<ArgKind<'p>, DelegateError> {
        self.skip_ws();
        let mut offset = 0.0;
        if self.src[self.pos..].starts_with("offset:") {
            self.pos += "offset:".len();
            self.skip_ws();
            offset = self.number()?;
        }

        Ok(ArgKind::Plural {
            ordinal,
            offset,
            branches: self.branches(true)?,
        })
    }

    fn branches(&mut self, plural: bool) -> Result<Vec<Branch<'p>>, DelegateError> {
        let start = self.pos;
        let mut branches = Vec::new();

        loop {
            self.skip_ws();
            let selector = match self.peek() {
                None | Some('}') => break,
                Some('=') if plural => {
                    self.bump();
                    Selector::Exact(self.number()?)
                }
                Some(_) => {
                    let keyword = self.identifier();
                    if keyword.is_empty() {
                        return Err(self.error("expected a selector"));
                    }
                    Selector::Keyword(keyword)
                }
            };

            self.skip_ws();
            self.expect('{')?;
            let message = self.message(plural, true)?;
            self.expect('}')?;
            branches.push(Branch { selector, message });
        }

        if !branches
            .iter()
            .any(|b| matches!(b.selector, Selector::Keyword(OTHER)))
        {
            return Err(self.error_at(start, "missing 'other' branch"));
        }
        Ok(branches)
    }
}

fn flush<'p>(nodes: &mut Message<'p>, text: &mut String) {
    if !text.is_empty() {
        nodes.push(Node::Text(std::mem::take(text)));
    }
}
