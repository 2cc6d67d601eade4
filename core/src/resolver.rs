//! Binding substitution for expressions deferred at assembly time.
//!
//! Once symbol addresses are known, [`resolve`] replaces `Binding` leaves and
//! re-folds the tree with [`evaluator::combine`], so operations are folded
//! exactly as they would have been during parsing.

use crate::errors::Error;
use crate::evaluator;
use crate::expression::Expression;

/// Substitute every binding `lookup` knows and fold what becomes constant.
///
/// Names the lookup returns `None` for are left as `Binding`. Substituted
/// values are taken as-is and are not resolved again. A fold that fails after
/// substitution (for example `x / y` with `y = 0`) returns the fold error.
///
/// ```
/// use casm_core::parser::parse_source;
/// use casm_core::resolver::resolve;
/// use casm_core::Expression;
///
/// let expr = parse_source("base + 4 * 8").unwrap();
/// let resolved = resolve(expr, |name| match name {
///     "base" => Some(Expression::NumLitInt(0x100)),
///     _ => None,
/// })
/// .unwrap();
/// assert_eq!(resolved, Expression::NumLitInt(0x120));
/// ```
pub fn resolve<F>(expr: Expression, lookup: F) -> Result<Expression, Error>
where
    F: Fn(&str) -> Option<Expression>,
{
    resolve_with(expr, &lookup)
}

fn resolve_with<F>(expr: Expression, lookup: &F) -> Result<Expression, Error>
where
    F: Fn(&str) -> Option<Expression>,
{
    match expr {
        Expression::Binding(name) => match lookup(&name) {
            Some(value) => {
                tracing::debug!(name = %name, value = %value, "resolved binding");
                Ok(value)
            }
            None => Ok(Expression::Binding(name)),
        },
        Expression::BinaryOp { op, lhs, rhs } => {
            let lhs = resolve_with(*lhs, lookup)?;
            let rhs = resolve_with(*rhs, lookup)?;
            evaluator::combine(op, lhs, rhs)
        }
        literal => Ok(literal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::expression::BinaryOperator;
    use crate::parser::parse_source;
    use crate::test_utils::init_test_logging;
    use crate::{ToString, vec};
    use pretty_assertions::assert_eq;

    fn symbols(name: &str) -> Option<Expression> {
        match name {
            "start" => Some(Expression::NumLitInt(0x40)),
            "len" => Some(Expression::NumLitInt(3)),
            "zero" => Some(Expression::NumLitInt(0)),
            "greeting" => Some(Expression::StringLit("hi".to_string())),
            _ => None,
        }
    }

    fn resolved(source: &str) -> Result<Expression, Error> {
        resolve(parse_source(source).unwrap(), symbols)
    }

    #[test]
    fn test_resolve_single_binding() {
        init_test_logging();
        assert_eq!(resolved("start").unwrap(), Expression::NumLitInt(0x40));
    }

    #[test]
    fn test_resolve_refolds_tree() {
        assert_eq!(
            resolved("start + len * 2").unwrap(),
            Expression::NumLitInt(0x46)
        );
        assert_eq!(
            resolved("(start - 1) * (len + 1)").unwrap(),
            Expression::NumLitInt(0x3F * 4)
        );
        assert_eq!(
            resolved(r#"greeting + "!""#).unwrap(),
            Expression::StringLit("hi!".to_string())
        );
    }

    #[test]
    fn test_unknown_bindings_stay() {
        let expr = resolved("start + later").unwrap();
        assert_eq!(
            expr,
            Expression::binary(
                BinaryOperator::Plus,
                Expression::NumLitInt(0x40),
                Expression::Binding("later".to_string()),
            )
        );
        assert!(!expr.is_resolved());
        assert_eq!(expr.bindings(), vec!["later"]);
    }

    #[test]
    fn test_partial_resolution_then_complete() {
        let first = resolved("later - start").unwrap();
        let second = resolve(first, |name| {
            (name == "later").then_some(Expression::NumLitInt(0x50))
        })
        .unwrap();
        assert_eq!(second, Expression::NumLitInt(0x10));
        assert!(second.is_resolved());
    }

    #[test]
    fn test_resolution_reveals_divide_by_zero() {
        let err = resolved("len / zero").unwrap_err();
        assert_eq!(err.kind(), Some(&ErrorKind::DivideByZero));
    }

    #[test]
    fn test_mixed_kinds_stay_deferred() {
        let expr = resolved("greeting + len").unwrap();
        assert_eq!(
            expr,
            Expression::binary(
                BinaryOperator::Plus,
                Expression::StringLit("hi".to_string()),
                Expression::NumLitInt(3),
            )
        );
        assert!(expr.is_resolved());
    }

    #[test]
    fn test_literals_are_idempotent() {
        for source in ["42", "1.5", r#""text""#, "[1, 2]"] {
            let expr = parse_source(source).unwrap();
            assert_eq!(resolve(expr.clone(), symbols).unwrap(), expr);
        }
    }

    #[test]
    fn test_resolving_twice_is_stable() {
        let once = resolved("start + later * 2").unwrap();
        let twice = resolve(once.clone(), symbols).unwrap();
        assert_eq!(once, twice);
    }
}
