//! Configuration options for the expression parser.

/// Precedence given to `/` and `%` during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionPrecedence {
    /// `/` and `%` bind looser than `+` and `-` (precedence 0), so `1 + 6 / 2`
    /// is `(1 + 6) / 2`. This is what existing assembly sources were written
    /// against.
    #[default]
    Legacy,

    /// `/` and `%` share the precedence of `*`, so `1 + 6 / 2` is `1 + (6 / 2)`.
    ///
    /// Deviates from the legacy grammar; sources must opt in.
    Multiplicative,
}

/// Configuration options for expression parsing.
///
/// # Example
///
/// ```
/// use casm_core::options::{DivisionPrecedence, ParserOptions};
///
/// let options = ParserOptions {
///     max_depth: 100,
///     division_precedence: DivisionPrecedence::Multiplicative,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Maximum expression nesting depth (parentheses, byte lists, unary minus).
    ///
    /// Default: 500
    pub max_depth: usize,

    /// Precedence of division and modulo.
    ///
    /// Default: [`DivisionPrecedence::Legacy`]
    pub division_precedence: DivisionPrecedence,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: 500,
            division_precedence: DivisionPrecedence::default(),
        }
    }
}
