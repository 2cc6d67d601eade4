//! Binary operator implementations.

use crate::errors::{ContractViolation, Error, ErrorKind};
use crate::expression::{BinaryOperator, Expression, ExpressionKind};
use crate::String;

/// Fold two operands of the same foldable kind into a literal.
///
/// Both operands must be `NumLitInt`, both `NumLitFloat`, or both
/// `StringLit`. Anything else is a [`ContractViolation`].
pub fn fold(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Result<Expression, Error> {
    match (lhs, rhs) {
        (Expression::NumLitInt(l), Expression::NumLitInt(r)) => {
            Ok(Expression::NumLitInt(fold_int(op, l, r)?))
        }
        (Expression::NumLitFloat(l), Expression::NumLitFloat(r)) => {
            Ok(Expression::NumLitFloat(fold_float(op, l, r)?))
        }
        (Expression::StringLit(l), Expression::StringLit(r)) => {
            Ok(Expression::StringLit(fold_string(op, l, &r)?))
        }
        (lhs, rhs) => Err(contract_violation(lhs.kind(), rhs.kind()).into()),
    }
}

/// Fold when both operands share a foldable kind, otherwise defer as a tree.
pub fn combine(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Result<Expression, Error> {
    let (lhs_kind, rhs_kind) = (lhs.kind(), rhs.kind());
    if lhs_kind == rhs_kind && lhs_kind.is_foldable() {
        tracing::trace!(%op, kind = %lhs_kind, "folding constant operands");
        fold(op, lhs, rhs)
    } else {
        tracing::debug!(%op, lhs = %lhs_kind, rhs = %rhs_kind, "deferring binary operation");
        Ok(Expression::binary(op, lhs, rhs))
    }
}

fn contract_violation(lhs: ExpressionKind, rhs: ExpressionKind) -> ContractViolation {
    if !lhs.is_foldable() {
        ContractViolation::NonFoldableOperand { kind: lhs }
    } else if !rhs.is_foldable() {
        ContractViolation::NonFoldableOperand { kind: rhs }
    } else {
        ContractViolation::MismatchedKinds { lhs, rhs }
    }
}

/// Integer arithmetic wraps on overflow; division and remainder by zero fail.
fn fold_int(op: BinaryOperator, left: i64, right: i64) -> Result<i64, ErrorKind> {
    match op {
        BinaryOperator::Plus => Ok(left.wrapping_add(right)),
        BinaryOperator::Minus => Ok(left.wrapping_sub(right)),
        BinaryOperator::Times => Ok(left.wrapping_mul(right)),
        BinaryOperator::Divide => {
            if right == 0 {
                Err(ErrorKind::DivideByZero)
            } else {
                // Use wrapping_div to handle i64::MIN / -1 case
                Ok(left.wrapping_div(right))
            }
        }
        BinaryOperator::Modulo => {
            if right == 0 {
                Err(ErrorKind::DivideByZero)
            } else {
                Ok(left.wrapping_rem(right))
            }
        }
    }
}

/// IEEE 754 arithmetic, except that dividing by zero is an error.
fn fold_float(op: BinaryOperator, left: f64, right: f64) -> Result<f64, ErrorKind> {
    match op {
        BinaryOperator::Plus => Ok(left + right),
        BinaryOperator::Minus => Ok(left - right),
        BinaryOperator::Times => Ok(left * right),
        BinaryOperator::Divide => {
            if right == 0.0 {
                Err(ErrorKind::DivideByZero)
            } else {
                Ok(left / right)
            }
        }
        BinaryOperator::Modulo => Err(ErrorKind::UnsupportedOperation {
            kind: ExpressionKind::NumLitFloat,
            op,
        }),
    }
}

fn fold_string(op: BinaryOperator, mut left: String, right: &str) -> Result<String, ErrorKind> {
    match op {
        BinaryOperator::Plus => {
            left.push_str(right);
            Ok(left)
        }
        _ => Err(ErrorKind::UnsupportedOperation {
            kind: ExpressionKind::StringLit,
            op,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ToString, vec};

    fn int(value: i64) -> Expression {
        Expression::NumLitInt(value)
    }

    fn float(value: f64) -> Expression {
        Expression::NumLitFloat(value)
    }

    fn string(value: &str) -> Expression {
        Expression::StringLit(value.to_string())
    }

    fn kind_of(result: Result<Expression, Error>) -> Option<ErrorKind> {
        result.err().and_then(|e| e.kind().cloned())
    }

    #[test]
    fn test_int_arithmetic() {
        assert_eq!(fold(BinaryOperator::Plus, int(2), int(3)), Ok(int(5)));
        assert_eq!(fold(BinaryOperator::Minus, int(3), int(10)), Ok(int(-7)));
        assert_eq!(fold(BinaryOperator::Times, int(-2), int(5)), Ok(int(-10)));
        assert_eq!(fold(BinaryOperator::Divide, int(7), int(2)), Ok(int(3)));
        assert_eq!(fold(BinaryOperator::Divide, int(-7), int(2)), Ok(int(-3)));
        assert_eq!(fold(BinaryOperator::Modulo, int(7), int(3)), Ok(int(1)));
        assert_eq!(fold(BinaryOperator::Modulo, int(-7), int(3)), Ok(int(-1)));
    }

    #[test]
    fn test_int_divide_by_zero() {
        assert_eq!(
            kind_of(fold(BinaryOperator::Divide, int(10), int(0))),
            Some(ErrorKind::DivideByZero)
        );
        assert_eq!(
            kind_of(fold(BinaryOperator::Modulo, int(10), int(0))),
            Some(ErrorKind::DivideByZero)
        );
    }

    #[test]
    fn test_int_wrapping_overflow() {
        // Test that we wrap on overflow rather than panic
        assert_eq!(fold(BinaryOperator::Plus, int(i64::MAX), int(1)), Ok(int(i64::MIN)));
        assert_eq!(fold(BinaryOperator::Times, int(i64::MAX), int(2)), Ok(int(-2)));
        assert_eq!(fold(BinaryOperator::Minus, int(i64::MIN), int(1)), Ok(int(i64::MAX)));
        assert_eq!(fold(BinaryOperator::Divide, int(i64::MIN), int(-1)), Ok(int(i64::MIN)));
        assert_eq!(fold(BinaryOperator::Modulo, int(i64::MIN), int(-1)), Ok(int(0)));
    }

    #[test]
    fn test_float_arithmetic() {
        assert_eq!(fold(BinaryOperator::Plus, float(1.5), float(2.5)), Ok(float(4.0)));
        assert_eq!(fold(BinaryOperator::Minus, float(1.0), float(0.25)), Ok(float(0.75)));
        assert_eq!(fold(BinaryOperator::Times, float(1.5), float(2.0)), Ok(float(3.0)));
        assert_eq!(
            fold(BinaryOperator::Divide, float(10.0), float(4.0)),
            Ok(float(2.5))
        );
    }

    #[test]
    fn test_float_divide_by_zero() {
        assert_eq!(
            kind_of(fold(BinaryOperator::Divide, float(1.0), float(0.0))),
            Some(ErrorKind::DivideByZero)
        );
        assert_eq!(
            kind_of(fold(BinaryOperator::Divide, float(1.0), float(-0.0))),
            Some(ErrorKind::DivideByZero)
        );
    }

    #[test]
    fn test_float_modulo_unsupported() {
        assert_eq!(
            kind_of(fold(BinaryOperator::Modulo, float(1.0), float(2.0))),
            Some(ErrorKind::UnsupportedOperation {
                kind: ExpressionKind::NumLitFloat,
                op: BinaryOperator::Modulo,
            })
        );
    }

    #[test]
    fn test_string_concat() {
        assert_eq!(
            fold(BinaryOperator::Plus, string("ab"), string("cd")),
            Ok(string("abcd"))
        );
        assert_eq!(fold(BinaryOperator::Plus, string(""), string("")), Ok(string("")));
    }

    #[test]
    fn test_string_other_operators_unsupported() {
        for op in [
            BinaryOperator::Minus,
            BinaryOperator::Times,
            BinaryOperator::Divide,
            BinaryOperator::Modulo,
        ] {
            assert_eq!(
                kind_of(fold(op, string("a"), string("b"))),
                Some(ErrorKind::UnsupportedOperation {
                    kind: ExpressionKind::StringLit,
                    op,
                })
            );
        }
    }

    #[test]
    fn test_contract_violations() {
        let err = fold(BinaryOperator::Plus, int(1), float(1.0)).unwrap_err();
        assert_eq!(
            err,
            Error::Contract(ContractViolation::MismatchedKinds {
                lhs: ExpressionKind::NumLitInt,
                rhs: ExpressionKind::NumLitFloat,
            })
        );
        assert!(!err.is_recoverable());

        let err = fold(
            BinaryOperator::Plus,
            Expression::Binding("x".to_string()),
            Expression::Binding("y".to_string()),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::Contract(ContractViolation::NonFoldableOperand {
                kind: ExpressionKind::Binding,
            })
        );

        let err = fold(
            BinaryOperator::Plus,
            int(1),
            Expression::ByteList(vec![1]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::Contract(ContractViolation::NonFoldableOperand {
                kind: ExpressionKind::ByteList,
            })
        );
    }

    #[test]
    fn test_combine_folds_same_kind() {
        assert_eq!(combine(BinaryOperator::Times, int(6), int(7)), Ok(int(42)));
    }

    #[test]
    fn test_combine_defers_mixed_kinds() {
        assert_eq!(
            combine(BinaryOperator::Plus, int(1), float(2.0)),
            Ok(Expression::binary(BinaryOperator::Plus, int(1), float(2.0)))
        );
    }

    #[test]
    fn test_combine_never_folds_byte_lists_or_trees() {
        let bytes = Expression::ByteList(vec![1, 2]);
        assert_eq!(
            combine(BinaryOperator::Plus, bytes.clone(), bytes.clone()),
            Ok(Expression::binary(BinaryOperator::Plus, bytes.clone(), bytes))
        );

        let tree = Expression::binary(
            BinaryOperator::Plus,
            Expression::Binding("x".to_string()),
            int(1),
        );
        assert_eq!(
            combine(BinaryOperator::Minus, tree.clone(), tree.clone()),
            Ok(Expression::binary(BinaryOperator::Minus, tree.clone(), tree))
        );
    }

    #[test]
    fn test_combine_propagates_fold_errors() {
        crate::test_utils::init_test_logging();
        assert_eq!(
            kind_of(combine(BinaryOperator::Divide, int(1), int(0))),
            Some(ErrorKind::DivideByZero)
        );
    }
}
