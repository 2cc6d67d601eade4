#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod errors;
pub mod evaluator;
pub mod expression;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod resolver;
pub mod syntax;
pub mod token;
pub mod vm;

pub use errors::{
    CharLiteralError, ContractViolation, Diagnostic, Error, ErrorKind, ExpressionError, Severity,
};
pub use expression::{BinaryOperator, Expression, ExpressionKind};
pub use options::{DivisionPrecedence, ParserOptions};
pub use syntax::Span;
pub use token::{Token, TokenCursor, TokenKind};
