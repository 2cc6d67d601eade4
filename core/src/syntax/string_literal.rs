//! String literal escaping for diagnostic rendering.
//!
//! Converts runtime strings (e.g. "hello\n" with an actual newline character)
//! into a double-quoted, source-like representation (`"hello\n"`).

use core::fmt;

/// Escape special characters and write the string surrounded by double quotes.
///
/// - `"` → `\"`
/// - `\` → `\\`
/// - `\n`, `\r`, `\t`, `\0` → their backslash forms
/// - Other control characters → `\uNNNN`
///
/// # Example
///
/// ```
/// use casm_core::syntax::string_literal::escape_string;
///
/// let mut output = String::new();
/// escape_string(&mut output, "hello\nworld").unwrap();
/// assert_eq!(output, r#""hello\nworld""#);
/// ```
pub fn escape_string(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    f.write_char('"')?;

    for ch in s.chars() {
        match ch {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            '\0' => write!(f, "\\0")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }

    f.write_char('"')
}
