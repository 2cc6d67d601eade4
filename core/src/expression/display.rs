//! Human-readable rendering of expressions for diagnostics.
//!
//! The output resembles assembly source but is not meant to be parsed back:
//! every binary operation is parenthesized and byte lists are shown in hex.

use super::Expression;
use crate::syntax::string_literal::escape_string;
use core::fmt;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::NumLitInt(value) => write!(f, "{}", value),
            // Debug formatting keeps the decimal point on whole numbers.
            Expression::NumLitFloat(value) => write!(f, "{:?}", value),
            Expression::StringLit(value) => escape_string(f, value),
            Expression::ByteList(bytes) => {
                f.write_str("[")?;
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "0x{:02x}", byte)?;
                }
                f.write_str("]")
            }
            Expression::Binding(name) => f.write_str(name),
            Expression::BinaryOp { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}
