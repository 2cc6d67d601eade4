#![allow(dead_code, unused_macros)]

use casm::{Expression, ParserOptions};
use once_cell::sync::Lazy;

/// Declare a test that parses `input` and checks the folded value or error.
///
/// ```ignore
/// test_case!(
///     name,
///     input: "1 + 2",
///     value: Expression::NumLitInt(3),
///     display: "3",
/// );
///
/// test_case!(
///     name,
///     input: "1 / 0",
///     error: ErrorKind::DivideByZero,
/// );
/// ```
macro_rules! test_case {
    (
        $name:ident,
        input: $input:expr,
        value: $value:expr
        $(, display: $display:expr)?
        $(,)?
    ) => {
        #[test]
        fn $name() {
            let parsed = casm::parse_source($input)
                .unwrap_or_else(|e| panic!("Expression parsing failed: {}\n{}", $input, e));
            pretty_assertions::assert_eq!(parsed, $value);
            $(
                pretty_assertions::assert_eq!(parsed.to_string(), $display);
            )?
        }
    };
    (
        $name:ident,
        input: $input:expr,
        error: $kind:pat
        $(,)?
    ) => {
        #[test]
        fn $name() {
            match casm::parse_source($input) {
                Ok(value) => panic!("expected an error for {}, got {}", $input, value),
                Err(err) => assert!(
                    matches!(err.kind(), Some($kind)),
                    "unexpected error for {}: {:?}",
                    $input,
                    err
                ),
            }
        }
    };
}

pub fn int(value: i64) -> Expression {
    Expression::NumLitInt(value)
}

pub fn float(value: f64) -> Expression {
    Expression::NumLitFloat(value)
}

pub fn string(value: &str) -> Expression {
    Expression::StringLit(value.to_string())
}

pub fn binding(name: &str) -> Expression {
    Expression::Binding(name.to_string())
}

/// A source expression and the value it must fold to under given options.
pub struct FoldCase {
    pub name: &'static str,
    pub input: &'static str,
    pub options: ParserOptions,
    pub value: Expression,
}

pub static FOLD_CASES: Lazy<Vec<FoldCase>> = Lazy::new(|| {
    let legacy = ParserOptions::default();
    let multiplicative = ParserOptions {
        division_precedence: casm::DivisionPrecedence::Multiplicative,
        ..Default::default()
    };

    vec![
        FoldCase {
            name: "precedence",
            input: "1+2*3",
            options: legacy.clone(),
            value: int(7),
        },
        FoldCase {
            name: "parenthesized",
            input: "(1+2)*3",
            options: legacy.clone(),
            value: int(9),
        },
        FoldCase {
            name: "left_associative_subtraction",
            input: "10-3-2",
            options: legacy.clone(),
            value: int(5),
        },
        FoldCase {
            name: "float_addition",
            input: "1.5+2.5",
            options: legacy.clone(),
            value: float(4.0),
        },
        FoldCase {
            name: "string_concatenation",
            input: r#""ab"+"cd""#,
            options: legacy.clone(),
            value: string("abcd"),
        },
        FoldCase {
            name: "negated_group",
            input: "-(2+3)",
            options: legacy.clone(),
            value: int(-5),
        },
        FoldCase {
            name: "hex_all_ones",
            input: "0xFFFFFFFFFFFFFFFF",
            options: legacy.clone(),
            value: int(-1),
        },
        FoldCase {
            name: "legacy_division",
            input: "1+6/2",
            options: legacy,
            value: int(3),
        },
        FoldCase {
            name: "multiplicative_division",
            input: "1+6/2",
            options: multiplicative,
            value: int(4),
        },
    ]
});
