//! The expression value model threaded through parsing, folding and resolution.

mod display;

use crate::options::DivisionPrecedence;
use crate::token::TokenKind;
use crate::{Box, String, Vec};
use core::fmt;

/// Result of parsing an expression: a literal or a deferred tree.
///
/// `BinaryOp` nodes own their operands exclusively. A `BinaryOp` is only
/// built when its operands could not be folded: their kinds differ, or one of
/// them is a `Binding`, `ByteList` or another `BinaryOp`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    NumLitInt(i64),
    NumLitFloat(f64),
    StringLit(String),
    ByteList(Vec<u8>),
    /// Symbol resolved by a later linking pass.
    Binding(String),
    BinaryOp {
        op: BinaryOperator,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
}

/// Payload-free discriminant of [`Expression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    NumLitInt,
    NumLitFloat,
    StringLit,
    BinaryOp,
    Binding,
    ByteList,
}

impl ExpressionKind {
    /// Kinds the folding evaluator combines directly.
    pub fn is_foldable(self) -> bool {
        matches!(
            self,
            ExpressionKind::NumLitInt | ExpressionKind::NumLitFloat | ExpressionKind::StringLit
        )
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpressionKind::NumLitInt => "integer",
            ExpressionKind::NumLitFloat => "floating point",
            ExpressionKind::StringLit => "string",
            ExpressionKind::BinaryOp => "binary operation",
            ExpressionKind::Binding => "binding",
            ExpressionKind::ByteList => "byte list",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Times,
    Divide,
    Modulo,
}

impl BinaryOperator {
    /// The operator a token stands for, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Plus),
            TokenKind::Minus => Some(BinaryOperator::Minus),
            TokenKind::Asterisk => Some(BinaryOperator::Times),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            TokenKind::Percent => Some(BinaryOperator::Modulo),
            _ => None,
        }
    }

    /// Binding strength used by the precedence-climbing parser.
    pub fn precedence(self, division: DivisionPrecedence) -> u8 {
        match (self, division) {
            (BinaryOperator::Plus | BinaryOperator::Minus, _) => 1,
            (BinaryOperator::Times, _) => 2,
            (BinaryOperator::Divide | BinaryOperator::Modulo, DivisionPrecedence::Legacy) => 0,
            (BinaryOperator::Divide | BinaryOperator::Modulo, DivisionPrecedence::Multiplicative) => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Times => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Expression {
    /// Build a deferred binary operation node.
    pub fn binary(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Self {
        Expression::BinaryOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::NumLitInt(_) => ExpressionKind::NumLitInt,
            Expression::NumLitFloat(_) => ExpressionKind::NumLitFloat,
            Expression::StringLit(_) => ExpressionKind::StringLit,
            Expression::ByteList(_) => ExpressionKind::ByteList,
            Expression::Binding(_) => ExpressionKind::Binding,
            Expression::BinaryOp { .. } => ExpressionKind::BinaryOp,
        }
    }

    /// True when no `Binding` occurs anywhere in the expression.
    pub fn is_resolved(&self) -> bool {
        match self {
            Expression::Binding(_) => false,
            Expression::BinaryOp { lhs, rhs, .. } => lhs.is_resolved() && rhs.is_resolved(),
            _ => true,
        }
    }

    /// Names of unresolved bindings, left to right.
    pub fn bindings(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_bindings(&mut names);
        names
    }

    fn collect_bindings<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Expression::Binding(name) => names.push(name.as_str()),
            Expression::BinaryOp { lhs, rhs, .. } => {
                lhs.collect_bindings(names);
                rhs.collect_bindings(names);
            }
            _ => {}
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Expression::NumLitInt(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Expression::NumLitFloat(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expression::StringLit(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Expression::ByteList(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }
}
