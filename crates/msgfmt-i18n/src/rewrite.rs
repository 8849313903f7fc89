//! Rewriting of named placeholders into positional ones.
//!
//! The scanner walks the pattern one `{` at a time and keeps a stack of
//! frames describing what every still-open brace belongs to. The innermost
//! frame decides what the next `{` means:
//!
//! - in a message (the root, or a choice branch) it may start a placeholder;
//! - directly inside a `plural`/`select`/`selectordinal` argument it opens
//!   a choice branch, whose selector text is never treated as a name;
//! - anywhere else it is a nested brace of style text or free text.
//!
//! Every `}` closes the innermost frame. Output differs from the input only
//! in the names that were replaced by their index.

use crate::args::{ArgumentSet, PositionIndex};
use crate::lexer::{lex_segment, ArgType, Segment};

/// What an open brace belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame<'a> {
    /// The top-level message. Never closed.
    Root,
    /// An argument, with the type read from its head.
    Argument(ArgType<'a>),
    /// A choice-branch message of a complex argument.
    Branch,
    /// A brace that is not an argument: style text or free text.
    Group,
}

/// A rewritten pattern plus what the scanner saw on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewritten {
    /// The rewritten pattern.
    pub pattern: String,
    /// Number of placeholders whose name was replaced.
    pub replaced: usize,
    /// Names left untouched because no argument has them, in pattern order.
    pub unresolved: Vec<String>,
    /// Frames still open at the end of the pattern (0 when braces balance).
    pub unclosed: usize,
    /// `}` characters with no open frame to close.
    pub stray_closers: usize,
}

struct Scanner<'a, 'm> {
    index: &'m PositionIndex<'m>,
    frames: Vec<Frame<'a>>,
    out: Rewritten,
}

impl<'a, 'm> Scanner<'a, 'm> {
    fn new(index: &'m PositionIndex<'m>, capacity: usize) -> Self {
        Self {
            index,
            frames: vec![Frame::Root],
            out: Rewritten {
                pattern: String::with_capacity(capacity),
                ..Default::default()
            },
        }
    }

    fn current(&self) -> Frame<'a> {
        self.frames.last().copied().unwrap_or(Frame::Root)
    }

    fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    fn run(mut self, pattern: &'a str) -> Rewritten {
        let mut segments = pattern.split('{');
        if let Some(preamble) = segments.next() {
            self.out.pattern.push_str(preamble);
            self.close(preamble);
        }

        for segment in segments {
            self.out.pattern.push('{');
            match self.current() {
                Frame::Root | Frame::Branch => self.message_brace(segment),
                Frame::Argument(ty) if ty.is_complex() => {
                    tracing::trace!(depth = self.depth(), "choice branch");
                    self.open(Frame::Branch, segment);
                }
                Frame::Argument(_) | Frame::Group => self.open(Frame::Group, segment),
            }
        }

        self.out.unclosed = self.depth();
        if self.out.unclosed > 0 || self.out.stray_closers > 0 {
            tracing::warn!(
                unclosed = self.out.unclosed,
                stray_closers = self.out.stray_closers,
                "unbalanced braces in message pattern"
            );
        }
        self.out
    }

    /// A `{` met in message text: a placeholder, or a literal brace.
    fn message_brace(&mut self, segment: &'a str) {
        let placeholder = match lex_segment(segment) {
            Segment::Placeholder(p) => p,
            Segment::Text(text) => return self.open(Frame::Group, text),
        };

        match self.index.get(placeholder.name) {
            Some(position) => {
                self.out.pattern.push_str(placeholder.leading_ws);
                self.out.pattern.push_str(&position.to_string());
                self.out.pattern.push_str(placeholder.tail);
                self.out.replaced += 1;
            }
            None => {
                self.out.pattern.push_str(segment);
                if !placeholder.is_positional() {
                    tracing::trace!(
                        name = placeholder.name,
                        "no argument for placeholder, kept as is"
                    );
                    self.out.unresolved.push(placeholder.name.to_string());
                }
            }
        }

        self.frames.push(Frame::Argument(placeholder.arg_type()));
        self.close(placeholder.tail);
    }

    /// Copy `text` through verbatim under a new `frame`.
    fn open(&mut self, frame: Frame<'a>, text: &str) {
        self.out.pattern.push_str(text);
        self.frames.push(frame);
        self.close(text);
    }

    /// Apply every `}` in `text`.
    fn close(&mut self, text: &str) {
        for _ in text.matches('}') {
            if self.frames.len() > 1 {
                self.frames.pop();
            } else {
                self.out.stray_closers += 1;
            }
        }
    }
}

/// Rewrite named placeholders to positions and report what was done.
pub fn rewrite_with_report(pattern: &str, index: &PositionIndex<'_>) -> Rewritten {
    let span = msgfmt_common_log::spans::rewrite_span(pattern.len(), index.len());
    let _guard = span.enter();

    let rewritten = Scanner::new(index, pattern.len()).run(pattern);
    tracing::debug!(
        replaced = rewritten.replaced,
        unresolved = rewritten.unresolved.len(),
        "rewrote named placeholders"
    );
    rewritten
}

/// Replace every placeholder name found in `index` with its position.
///
/// Names missing from the index are kept, so partially supplied arguments
/// leave the rest of the pattern intact. Never fails; malformed patterns
/// give best-effort output.
pub fn rewrite_named_arguments(pattern: &str, index: &PositionIndex<'_>) -> String {
    rewrite_with_report(pattern, index).pattern
}

/// Convenience wrapper building the index from `args`.
pub fn replace_named_arguments(pattern: &str, args: &ArgumentSet) -> String {
    rewrite_named_arguments(pattern, &PositionIndex::from_arguments(args))
}
