//! Tokens consumed by the expression parser.
//!
//! The assembler's lexer produces these; [`crate::lexer::tokenize`] is a small
//! stand-alone tokenizer producing the same stream from text.

use crate::String;
use crate::syntax::Span;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    NumLit,
    /// Text is the content between the double quotes, escapes untouched.
    StringLit,
    /// Text is the content between the single quotes, escapes untouched.
    CharLit,
    Symbol,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Comma,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Create a token without source location.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            span: Span::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Destructive cursor over a borrowed token sequence.
///
/// Parsing pops tokens from the front; whatever is left after a parse call is
/// still visible to the caller through [`TokenCursor::remaining`].
#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Number of tokens not consumed yet.
    pub fn len(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }

    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    pub fn pop(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    pub fn remaining(&self) -> &'t [Token] {
        &self.tokens[self.pos.min(self.tokens.len())..]
    }
}
