//! casm - expression parsing and constant folding for the casm assembler
//!
//! # Overview
//!
//! Operands of instructions and data directives are arithmetic expressions
//! over literals and symbols. They are folded while the assembler reads the
//! source; whatever still refers to an unknown symbol is kept as a tree for
//! the linker to [`resolve`] later.
//!
//! # Quick Start
//!
//! ```
//! use casm::{Expression, parse_source, resolve};
//!
//! // Constant operands fold immediately.
//! assert_eq!(parse_source("0x10 + 'A'").unwrap(), Expression::NumLitInt(81));
//!
//! // Symbols are deferred until their addresses are known.
//! let deferred = parse_source("buffer + 4 * 2").unwrap();
//! assert_eq!(deferred.to_string(), "(buffer + 8)");
//!
//! let resolved = resolve(deferred, |name| {
//!     (name == "buffer").then_some(Expression::NumLitInt(0x200))
//! })
//! .unwrap();
//! assert_eq!(resolved, Expression::NumLitInt(0x208));
//! ```
//!
//! # Token streams
//!
//! An assembler with its own lexer hands tokens to [`parse`] through a
//! [`TokenCursor`]. Parsing stops after one expression, so the caller can
//! continue with a `,` and the next operand.
//!
//! ```
//! use casm::{Expression, Token, TokenCursor, TokenKind, parse};
//!
//! let tokens = [
//!     Token::new(TokenKind::NumLit, "3"),
//!     Token::new(TokenKind::Asterisk, "*"),
//!     Token::new(TokenKind::NumLit, "4"),
//!     Token::new(TokenKind::Comma, ","),
//!     Token::new(TokenKind::Symbol, "r1"),
//! ];
//! let mut cursor = TokenCursor::new(&tokens);
//!
//! assert_eq!(parse(&mut cursor).unwrap(), Expression::NumLitInt(12));
//! assert_eq!(cursor.len(), 2);
//! ```

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from casm_core
pub use casm_core::parser::{
    ExpressionParser, parse, parse_source, parse_source_with_options, parse_with_options,
};
pub use casm_core::resolver::resolve;
pub use casm_core::{
    BinaryOperator, CharLiteralError, ContractViolation, Diagnostic, DivisionPrecedence, Error,
    ErrorKind, Expression, ExpressionError, ExpressionKind, ParserOptions, Severity, Span, Token,
    TokenCursor, TokenKind,
};

// Re-export building blocks for callers that drive folding themselves
pub use casm_core::evaluator::{self, combine, fold};
pub use casm_core::lexer::tokenize;
pub use casm_core::vm::VmStatus;
