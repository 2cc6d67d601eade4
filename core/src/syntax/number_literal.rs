//! Numeric literal parsing.
//!
//! `0x`/`0X` and `0b`/`0B` literals are read as unsigned 64-bit values whose bit
//! pattern is reinterpreted as signed, so `0xFFFFFFFFFFFFFFFF` is `-1`. Anything
//! else is tried as a signed decimal integer first and as a float second.

/// A successfully parsed numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberLiteral {
    Int(i64),
    Float(f64),
}

/// Parse the text of a numeric literal token.
///
/// Returns `None` when the text is neither an integer nor a float.
pub fn parse_number_literal(text: &str) -> Option<NumberLiteral> {
    if let Some(digits) = strip_radix_prefix(text, 'x') {
        return parse_unsigned(digits, 16).map(NumberLiteral::Int);
    }
    if let Some(digits) = strip_radix_prefix(text, 'b') {
        return parse_unsigned(digits, 2).map(NumberLiteral::Int);
    }

    match text.parse::<i64>() {
        Ok(value) => Some(NumberLiteral::Int(value)),
        // Out-of-range decimals fall through to the float parser as well.
        Err(_) => text
            .parse::<f64>()
            .ok()
            // Overflow parses as infinity; treat it as malformed.
            .filter(|value| value.is_finite())
            .map(NumberLiteral::Float),
    }
}

fn strip_radix_prefix(text: &str, marker: char) -> Option<&str> {
    let rest = text.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}

fn parse_unsigned(digits: &str, radix: u32) -> Option<i64> {
    // `from_str_radix` tolerates a leading '+', radix literals do not.
    if digits.starts_with('+') {
        return None;
    }
    u64::from_str_radix(digits, radix)
        .ok()
        .map(|value| value as i64)
}
