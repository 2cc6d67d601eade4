//! Source-level syntax helpers shared by the tokenizer, parser and renderer.

pub mod char_literal;
pub mod number_literal;
pub mod string_literal;

use core::ops::Range;

/// Byte range of a token or expression in the assembly source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }

    /// Source text covered by the span, or `None` if the span falls outside
    /// `source` or splits a character.
    pub fn str_of<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.0.clone())
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}
