//! Expression parser: primary literals plus precedence climbing.
//!
//! ## Example
//!
//! ```
//! use casm_core::parser::parse_source;
//! use casm_core::{BinaryOperator, Expression};
//!
//! assert_eq!(parse_source("1 + 2 * 3").unwrap(), Expression::NumLitInt(7));
//!
//! // Unresolved symbols are kept as bindings for the linker.
//! assert_eq!(
//!     parse_source("x + 1").unwrap(),
//!     Expression::binary(
//!         BinaryOperator::Plus,
//!         Expression::Binding("x".into()),
//!         Expression::NumLitInt(1),
//!     ),
//! );
//! ```

pub mod parser;

pub use parser::ExpressionParser;

use crate::errors::{Error, ErrorKind, ExpressionError};
use crate::expression::Expression;
use crate::lexer;
use crate::options::ParserOptions;
use crate::token::TokenCursor;

/// Parse one expression from the front of `cursor` with default options.
///
/// Tokens after the expression are left in the cursor for the caller.
pub fn parse(cursor: &mut TokenCursor<'_>) -> Result<Expression, Error> {
    parse_with_options(cursor, &ParserOptions::default())
}

/// Parse one expression from the front of `cursor`.
pub fn parse_with_options(
    cursor: &mut TokenCursor<'_>,
    options: &ParserOptions,
) -> Result<Expression, Error> {
    ExpressionParser::new(cursor, options.clone()).parse()
}

/// Tokenize and parse a complete expression with default options.
pub fn parse_source(source: &str) -> Result<Expression, Error> {
    parse_source_with_options(source, &ParserOptions::default())
}

/// Tokenize and parse a complete expression.
///
/// Leftover tokens (for example a dangling `-` in `1 -`) are parsed the way a
/// statement parser would try them next, so they fail with the same error a
/// primary parse reports. If they happen to form an expression, the first
/// leftover token is reported as unexpected.
pub fn parse_source_with_options(
    source: &str,
    options: &ParserOptions,
) -> Result<Expression, Error> {
    let tokens = lexer::tokenize(source)?;
    let mut cursor = TokenCursor::new(&tokens);
    let expr = parse_with_options(&mut cursor, options)?;

    if let Some(leftover) = cursor.peek() {
        parse_with_options(&mut cursor, options)?;
        return Err(ExpressionError::new(
            ErrorKind::UnexpectedToken(leftover.clone()),
            Some(leftover.span.clone()),
        )
        .into());
    }

    Ok(expr)
}
