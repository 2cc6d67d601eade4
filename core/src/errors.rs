//! Error types for expression parsing and constant folding.
//!
//! # Error Categories
//!
//! - **Expression errors** ([`ExpressionError`]): problems traceable to the
//!   assembly source, such as a malformed literal, a missing `)` or a division
//!   by zero found while folding. The assembler attaches its own position
//!   context and decides whether to halt or continue with the next statement.
//!
//! - **Contract violations** ([`ContractViolation`]): the folding evaluator was
//!   called outside its precondition. These indicate a bug in the caller, not
//!   bad input, and must not be recovered from like ordinary errors.

use crate::expression::{BinaryOperator, ExpressionKind};
use crate::syntax::Span;
use crate::token::Token;
use crate::vm::VmStatus;
use crate::{String, Vec, format, vec};
use alloc::string::ToString;
use thiserror::Error;

/// Top-level error returned by parsing, folding and resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Error caused by the expression source.
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    /// Internal fault: an operation was invoked outside its precondition.
    #[error("internal contract violation: {0}")]
    Contract(#[from] ContractViolation),
}

impl Error {
    /// Whether the caller may report this error and carry on.
    ///
    /// Contract violations are never recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Expression(_))
    }

    /// The expression error kind, if this is a recoverable error.
    pub fn kind(&self) -> Option<&ErrorKind> {
        match self {
            Error::Expression(e) => Some(&e.kind),
            Error::Contract(_) => None,
        }
    }

    /// Source span of the offending token, when known.
    pub fn span(&self) -> Option<&Span> {
        match self {
            Error::Expression(e) => e.span.as_ref(),
            Error::Contract(_) => None,
        }
    }

    /// Attach a span to an expression error that does not have one yet.
    pub fn with_span(self, span: &Span) -> Self {
        match self {
            Error::Expression(mut e) if e.span.is_none() => {
                e.span = Some(span.clone());
                Error::Expression(e)
            }
            other => other,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::Expression(ExpressionError::new(kind, None))
    }
}

/// A recoverable error with the location it was found at.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct ExpressionError {
    pub kind: ErrorKind,
    pub span: Option<Span>,
}

/// Specific kinds of expression errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// The token stream was empty where an expression was required.
    #[error("trying to parse empty expression")]
    EmptyExpression,

    /// No expression can start with this token.
    #[error("unknown expression starting with token '{}'", .0.text)]
    UnexpectedToken(Token),

    /// Numeric literal that is neither an integer nor a float.
    #[error("error parsing number literal '{text}'")]
    NumberLiteralParseError { text: String },

    /// Character literal that does not decode to exactly one character.
    #[error("error parsing character literal '{text}': {reason}")]
    CharLiteralParseError {
        text: String,
        reason: CharLiteralError,
    },

    /// `(` without a matching `)`.
    #[error("cannot find matching closing parenthesis ')'")]
    UnmatchedParen,

    /// `[` without a matching `]`.
    #[error("cannot find matching closing bracket ']'")]
    UnmatchedBracket,

    /// Byte list element that is neither an integer nor a string.
    #[error("unsupported value of kind '{kind}' inside byte list")]
    UnsupportedByteListElement { kind: ExpressionKind },

    /// Operator not defined for this operand kind.
    #[error("unsupported operation '{op}' between {kind} literals")]
    UnsupportedOperation {
        kind: ExpressionKind,
        op: BinaryOperator,
    },

    /// Integer division or remainder by zero, or float division by zero.
    #[error("divide by zero")]
    DivideByZero,

    /// Expression nesting exceeds the configured limit.
    #[error("expression nesting depth {depth} exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { depth: usize, max_depth: usize },

    /// Source text the tokenizer could not split into tokens.
    #[error("invalid token '{text}'")]
    InvalidToken { text: String },
}

impl ErrorKind {
    /// Short stable code for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::EmptyExpression => "E001",
            ErrorKind::UnexpectedToken(_) => "E002",
            ErrorKind::NumberLiteralParseError { .. } => "E003",
            ErrorKind::CharLiteralParseError { .. } => "E004",
            ErrorKind::UnmatchedParen => "E005",
            ErrorKind::UnmatchedBracket => "E006",
            ErrorKind::UnsupportedByteListElement { .. } => "E007",
            ErrorKind::UnsupportedOperation { .. } => "E008",
            ErrorKind::DivideByZero => "E009",
            ErrorKind::MaxDepthExceeded { .. } => "E010",
            ErrorKind::InvalidToken { .. } => "E011",
        }
    }

    /// The VM status with the same meaning, for errors shared with the runtime.
    pub fn vm_status(&self) -> Option<VmStatus> {
        match self {
            ErrorKind::DivideByZero => Some(VmStatus::DivideByZero),
            _ => None,
        }
    }

    fn help(&self) -> Vec<String> {
        match self {
            ErrorKind::UnmatchedParen | ErrorKind::UnmatchedBracket => {
                vec!["Add the missing closing delimiter".to_string()]
            }
            ErrorKind::NumberLiteralParseError { .. } => {
                vec!["Check the number format".to_string()]
            }
            ErrorKind::CharLiteralParseError {
                reason: CharLiteralError::MultiCharacterLiteral,
                ..
            } => vec!["Use a string literal for more than one character".to_string()],
            ErrorKind::UnsupportedByteListElement { .. } => vec![
                "Byte list elements must be integer or string literals known at assembly time"
                    .to_string(),
            ],
            ErrorKind::MaxDepthExceeded { .. } => {
                vec!["Reduce nesting or simplify the expression".to_string()]
            }
            _ => vec![],
        }
    }
}

/// Reasons a character literal fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharLiteralError {
    #[error("empty character literal")]
    Empty,
    #[error("unsupported multi-character character literal")]
    MultiCharacterLiteral,
    #[error("unescaped quote at position {pos}")]
    UnescapedQuote { pos: usize },
    #[error("invalid escape sequence '{seq}' at position {pos}")]
    InvalidEscape { pos: usize, seq: String },
    #[error("invalid digit '{digit}' in escape at position {pos}")]
    InvalidDigit { pos: usize, digit: char },
    #[error("incomplete escape at position {pos}: expected {expected} digits, got {got}")]
    IncompleteEscape {
        pos: usize,
        expected: usize,
        got: usize,
    },
    #[error("invalid code point U+{value:X} at position {pos}")]
    InvalidCodePoint { pos: usize, value: u32 },
}

/// The folding evaluator was called outside its precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// Operand of a kind the evaluator never folds (tree, binding, byte list).
    #[error("operand of kind {kind} cannot be folded")]
    NonFoldableOperand { kind: ExpressionKind },

    /// Operands of two different kinds.
    #[error("cannot fold operands of mismatched kinds {lhs} and {rhs}")]
    MismatchedKinds {
        lhs: ExpressionKind,
        rhs: ExpressionKind,
    },
}

impl ExpressionError {
    pub fn new(kind: ErrorKind, span: Option<Span>) -> Self {
        Self { kind, span }
    }

    /// Convert to a Diagnostic for the assembler front end.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            help: self.kind.help(),
            code: Some(self.kind.code().to_string()),
        }
    }
}

impl Error {
    /// Convert to a Diagnostic; contract violations are reported as bugs.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Expression(e) => e.to_diagnostic(),
            Error::Contract(v) => Diagnostic {
                severity: Severity::Bug,
                message: format!("internal contract violation: {}", v),
                span: None,
                help: vec![],
                code: None,
            },
        }
    }
}

/// A diagnostic message with an optional source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Option<Span>,
    pub help: Vec<String>,
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error in the assembly source.
    Error,
    /// Internal fault in the assembler itself.
    Bug,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Bug => write!(f, "bug"),
        }
    }
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;

        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }

        for help_msg in &self.help {
            write!(f, "\nhelp: {}", help_msg)?;
        }

        Ok(())
    }
}
