//! Stand-alone tokenizer producing the parser's token stream from text.
//!
//! The assembler normally feeds tokens from its own lexer. This tokenizer
//! accepts the same token set and is used by [`crate::parser::parse_source`].

use crate::errors::{Error, ErrorKind, ExpressionError};
use crate::syntax::Span;
use crate::token::{Token, TokenKind};
use crate::{String, Vec};
use alloc::string::ToString;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "lexer/tokens.pest"]
struct TokenGrammar;

/// Split `source` into tokens.
///
/// String and character literal tokens carry the text between their quotes
/// with escapes left as written.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut pairs =
        TokenGrammar::parse(Rule::tokens, source).map_err(|e| convert_pest_error(e, source))?;

    let Some(tokens) = pairs.next() else {
        return Ok(Vec::new());
    };

    let mut result = Vec::new();
    for pair in tokens.into_inner() {
        let raw = pair.as_str();
        let span = Span::from(pair.as_span());
        let (kind, text) = match pair.as_rule() {
            Rule::num_lit => (TokenKind::NumLit, raw),
            Rule::string_lit => (TokenKind::StringLit, strip_quotes(raw)),
            Rule::char_lit => (TokenKind::CharLit, strip_quotes(raw)),
            Rule::symbol => (TokenKind::Symbol, raw),
            Rule::plus => (TokenKind::Plus, raw),
            Rule::minus => (TokenKind::Minus, raw),
            Rule::asterisk => (TokenKind::Asterisk, raw),
            Rule::slash => (TokenKind::Slash, raw),
            Rule::percent => (TokenKind::Percent, raw),
            Rule::comma => (TokenKind::Comma, raw),
            Rule::open_paren => (TokenKind::OpenParen, raw),
            Rule::close_paren => (TokenKind::CloseParen, raw),
            Rule::open_bracket => (TokenKind::OpenBracket, raw),
            Rule::close_bracket => (TokenKind::CloseBracket, raw),
            Rule::EOI => continue,
            rule => unreachable!("Unknown token rule: {:?}", rule),
        };
        result.push(Token {
            kind,
            text: text.to_string(),
            span,
        });
    }

    tracing::trace!(count = result.len(), "tokenized expression source");
    Ok(result)
}

fn strip_quotes(raw: &str) -> &str {
    // Both quote characters are ASCII, so slicing stays on char boundaries.
    &raw[1..raw.len() - 1]
}

/// Convert a Pest error into an `InvalidToken` error at the failing position.
fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> Error {
    let start = match err.location {
        pest::error::InputLocation::Pos(pos) => pos,
        pest::error::InputLocation::Span((start, _)) => start,
    };

    let text: String = match source[start..].chars().next() {
        Some(ch) => ch.to_string(),
        None => "end of input".to_string(),
    };
    let end = start + text.len().min(source.len() - start);

    ExpressionError::new(ErrorKind::InvalidToken { text }, Some(Span::new(start, end))).into()
}
