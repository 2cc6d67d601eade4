//! Character literal unescaping for assembly source.
//!
//! A character literal is the text between a pair of single quotes, e.g. `A`,
//! `\n` or `\x41`. It must decode to exactly one character, whose code point
//! becomes an integer operand.

use crate::errors::CharLiteralError;
use crate::format;
use alloc::string::ToString;
use core::iter::Peekable;
use core::str::CharIndices;

/// Decode the content of a character literal (without the surrounding quotes).
///
/// Supported escapes:
/// - Simple escapes: `\a`, `\b`, `\f`, `\n`, `\r`, `\t`, `\v`, `\\`, `\'`
/// - Octal escapes: `\ooo` (exactly 3 digits, value at most 255)
/// - Hex escapes: `\xHH` (2 digits)
/// - Unicode escapes: `\uNNNN` (4 hex digits), `\UNNNNNNNN` (8 hex digits)
///
/// # Example
///
/// ```
/// use casm_core::syntax::char_literal::unescape_char;
///
/// assert_eq!(unescape_char("A"), Ok('A'));
/// assert_eq!(unescape_char(r"\n"), Ok('\n'));
/// assert_eq!(unescape_char(r"\x41"), Ok('A'));
/// ```
pub fn unescape_char(input: &str) -> Result<char, CharLiteralError> {
    let mut chars = input.char_indices().peekable();

    let decoded = match chars.next() {
        None => return Err(CharLiteralError::Empty),
        Some((pos, '\'')) => return Err(CharLiteralError::UnescapedQuote { pos }),
        Some((pos, '\\')) => decode_escape(pos, &mut chars)?,
        Some((_, ch)) => ch,
    };

    if chars.next().is_some() {
        return Err(CharLiteralError::MultiCharacterLiteral);
    }

    Ok(decoded)
}

fn decode_escape(pos: usize, chars: &mut Peekable<CharIndices<'_>>) -> Result<char, CharLiteralError> {
    match chars.next() {
        Some((_, 'a')) => Ok('\u{07}'),
        Some((_, 'b')) => Ok('\u{08}'),
        Some((_, 'f')) => Ok('\u{0C}'),
        Some((_, 'n')) => Ok('\n'),
        Some((_, 'r')) => Ok('\r'),
        Some((_, 't')) => Ok('\t'),
        Some((_, 'v')) => Ok('\u{0B}'),
        Some((_, '\\')) => Ok('\\'),
        Some((_, '\'')) => Ok('\''),
        Some((_, 'x')) => decode_digits(pos, chars, 16, 2, None),
        Some((_, 'u')) => decode_digits(pos, chars, 16, 4, None),
        Some((_, 'U')) => decode_digits(pos, chars, 16, 8, None),
        Some((_, first @ '0'..='7')) => decode_digits(pos, chars, 8, 3, Some(first)),
        Some((_, other)) => Err(CharLiteralError::InvalidEscape {
            pos,
            seq: format!("\\{}", other),
        }),
        None => Err(CharLiteralError::InvalidEscape {
            pos,
            seq: "\\".to_string(),
        }),
    }
}

/// Read a fixed number of digits in `radix` and turn the value into a char.
///
/// For octal escapes the first digit has already been consumed and is passed
/// in as `first`.
fn decode_digits(
    pos: usize,
    chars: &mut Peekable<CharIndices<'_>>,
    radix: u32,
    expected: usize,
    first: Option<char>,
) -> Result<char, CharLiteralError> {
    let mut value = 0u32;
    let mut got = 0;

    let mut push = |ch: char, got: &mut usize| match ch.to_digit(radix) {
        Some(digit) => {
            value = (value << radix.trailing_zeros()) | digit;
            *got += 1;
            Ok(())
        }
        None => Err(CharLiteralError::InvalidDigit { pos, digit: ch }),
    };

    if let Some(ch) = first {
        push(ch, &mut got)?;
    }
    while got < expected {
        match chars.next() {
            Some((_, ch)) => push(ch, &mut got)?,
            None => {
                return Err(CharLiteralError::IncompleteEscape { pos, expected, got });
            }
        }
    }

    // Octal escapes denote a single byte.
    if radix == 8 && value > 0xFF {
        return Err(CharLiteralError::InvalidCodePoint { pos, value });
    }

    char::from_u32(value).ok_or(CharLiteralError::InvalidCodePoint { pos, value })
}
