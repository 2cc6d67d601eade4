//! Constant folding evaluator.
//!
//! Folds a binary operation between two operands of the same literal kind
//! into a new literal, following a fixed per-kind operator matrix:
//!
//! | Kind   | `+`         | `-`   | `*`   | `/`                 | `%`                 |
//! |--------|-------------|-------|-------|---------------------|---------------------|
//! | Int    | wrapping    | wrapping | wrapping | truncating, zero fails | remainder, zero fails |
//! | Float  | IEEE        | IEEE  | IEEE  | IEEE, zero fails    | unsupported         |
//! | String | concatenate | unsupported | unsupported | unsupported | unsupported   |
//!
//! The parser folds eagerly while parsing; the resolver calls the same
//! [`combine`] after substituting bindings, so assembly-time and link-time
//! results are identical.
//!
//! ## Example
//!
//! ```
//! use casm_core::evaluator::fold;
//! use casm_core::{BinaryOperator, Expression};
//!
//! let sum = fold(BinaryOperator::Plus, Expression::NumLitInt(2), Expression::NumLitInt(3));
//! assert_eq!(sum, Ok(Expression::NumLitInt(5)));
//! ```

mod operators;

pub use operators::{combine, fold};
