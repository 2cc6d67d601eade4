use crate::errors::{Error, ErrorKind, ExpressionError};
use crate::evaluator;
use crate::expression::{BinaryOperator, Expression};
use crate::options::ParserOptions;
use crate::syntax::Span;
use crate::syntax::char_literal::unescape_char;
use crate::syntax::number_literal::{NumberLiteral, parse_number_literal};
use crate::token::{Token, TokenCursor, TokenKind};
use crate::Vec;

/// Unary minus binds tighter than every binary operator.
const UNARY_PRECEDENCE: u8 = 3;

/// Precedence-climbing parser over a token cursor.
///
/// Operations whose operands are literals of the same kind are folded while
/// parsing; everything else is kept as a [`Expression::BinaryOp`] tree.
pub struct ExpressionParser<'c, 't> {
    cursor: &'c mut TokenCursor<'t>,
    options: ParserOptions,
    depth: usize,
}

impl<'c, 't> ExpressionParser<'c, 't> {
    pub fn new(cursor: &'c mut TokenCursor<'t>, options: ParserOptions) -> Self {
        Self {
            cursor,
            options,
            depth: 0,
        }
    }

    /// Parse one expression, leaving any following tokens in the cursor.
    pub fn parse(&mut self) -> Result<Expression, Error> {
        self.parse_binary(0)
    }

    fn error(kind: ErrorKind, span: &Span) -> Error {
        ExpressionError::new(kind, Some(span.clone())).into()
    }

    /// Parse a binary expression whose operators bind at least as tightly as
    /// `min_precedence`.
    fn parse_binary(&mut self, min_precedence: u8) -> Result<Expression, Error> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            let kind = ErrorKind::MaxDepthExceeded {
                depth: self.depth,
                max_depth: self.options.max_depth,
            };
            return Err(match self.cursor.peek() {
                Some(token) => Self::error(kind, &token.span),
                None => kind.into(),
            });
        }

        self.depth += 1;
        let result = self.parse_binary_inner(min_precedence);
        self.depth -= 1;

        result
    }

    fn parse_binary_inner(&mut self, min_precedence: u8) -> Result<Expression, Error> {
        let mut result = self.parse_primary()?;

        // An operator is only consumed when something follows it; a trailing
        // operator is left in the cursor.
        while self.cursor.len() > 1 {
            let Some((op, token)) = self.peek_operator() else {
                break;
            };
            let precedence = op.precedence(self.options.division_precedence);
            if precedence < min_precedence {
                break;
            }
            self.cursor.pop();

            let rhs = self.parse_binary(precedence + 1)?;
            result = evaluator::combine(op, result, rhs).map_err(|e| e.with_span(&token.span))?;
        }

        Ok(result)
    }

    fn peek_operator(&self) -> Option<(BinaryOperator, &'t Token)> {
        let token = self.cursor.peek()?;
        BinaryOperator::from_token(token.kind).map(|op| (op, token))
    }

    fn parse_primary(&mut self) -> Result<Expression, Error> {
        let Some(token) = self.cursor.peek() else {
            return Err(ErrorKind::EmptyExpression.into());
        };

        match token.kind {
            TokenKind::NumLit => {
                self.cursor.pop();
                match parse_number_literal(&token.text) {
                    Some(NumberLiteral::Int(value)) => Ok(Expression::NumLitInt(value)),
                    Some(NumberLiteral::Float(value)) => Ok(Expression::NumLitFloat(value)),
                    None => Err(Self::error(
                        ErrorKind::NumberLiteralParseError {
                            text: token.text.clone(),
                        },
                        &token.span,
                    )),
                }
            }
            TokenKind::StringLit => {
                self.cursor.pop();
                Ok(Expression::StringLit(token.text.clone()))
            }
            TokenKind::CharLit => {
                self.cursor.pop();
                unescape_char(&token.text)
                    .map(|ch| Expression::NumLitInt(ch as i64))
                    .map_err(|reason| {
                        Self::error(
                            ErrorKind::CharLiteralParseError {
                                text: token.text.clone(),
                                reason,
                            },
                            &token.span,
                        )
                    })
            }
            TokenKind::Symbol => {
                self.cursor.pop();
                Ok(Expression::Binding(token.text.clone()))
            }
            TokenKind::Minus => self.parse_negation(),
            TokenKind::OpenParen => self.parse_group(),
            TokenKind::OpenBracket => self.parse_byte_list(),
            _ => Err(Self::error(
                ErrorKind::UnexpectedToken(token.clone()),
                &token.span,
            )),
        }
    }

    /// `-operand`: numeric literals are negated, other kinds pass through.
    fn parse_negation(&mut self) -> Result<Expression, Error> {
        self.cursor.pop();
        let operand = self.parse_binary(UNARY_PRECEDENCE)?;
        Ok(match operand {
            Expression::NumLitInt(value) => Expression::NumLitInt(value.wrapping_neg()),
            Expression::NumLitFloat(value) => Expression::NumLitFloat(-value),
            other => other,
        })
    }

    /// `( expression )`
    fn parse_group(&mut self) -> Result<Expression, Error> {
        let open = self.cursor.pop();
        let inner = self.parse_binary(0)?;

        match self.cursor.peek() {
            Some(token) if token.kind == TokenKind::CloseParen => {
                self.cursor.pop();
                Ok(inner)
            }
            _ => Err(Self::error(
                ErrorKind::UnmatchedParen,
                &open.map(|t| t.span.clone()).unwrap_or_default(),
            )),
        }
    }

    /// `[ element, element, ... ]` where elements fold to integers or strings.
    fn parse_byte_list(&mut self) -> Result<Expression, Error> {
        let open_span = self.cursor.pop().map(|t| t.span.clone()).unwrap_or_default();
        let mut bytes = Vec::new();

        while let Some(token) = self.cursor.peek() {
            if token.kind == TokenKind::CloseBracket {
                break;
            }

            match self.parse_binary(0)? {
                Expression::NumLitInt(value) => bytes.push(value as u8),
                Expression::StringLit(value) => bytes.extend_from_slice(value.as_bytes()),
                other => {
                    return Err(Self::error(
                        ErrorKind::UnsupportedByteListElement { kind: other.kind() },
                        &token.span,
                    ));
                }
            }

            match self.cursor.peek() {
                Some(next) if next.kind == TokenKind::Comma => {
                    self.cursor.pop();
                }
                _ => break,
            }
        }

        match self.cursor.peek() {
            Some(token) if token.kind == TokenKind::CloseBracket => {
                self.cursor.pop();
                Ok(Expression::ByteList(bytes))
            }
            _ => Err(Self::error(ErrorKind::UnmatchedBracket, &open_span)),
        }
    }
}
