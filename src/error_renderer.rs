//! Error rendering using ariadne
//!
//! Errors are drawn against the expression source with the offending token
//! underlined. Errors without a location are printed as a single line.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expression>";

/// Render an error to stderr
///
/// # Example
/// ```no_run
/// use casm::{parse_source, render_error};
///
/// let source = "(1 + 2";
/// if let Err(e) = parse_source(source) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, source: &str, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for logs and editor integrations)
pub fn render_error_to_string(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
///
/// # Example
/// ```
/// use casm::{parse_source, render_error_to_string_no_color};
///
/// let source = "1 / 0";
/// let err = parse_source(source).unwrap_err();
/// let output = render_error_to_string_no_color(&err, source);
/// assert!(output.contains("divide by zero"));
/// ```
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let diag = error.to_diagnostic();
    match diag.span.as_ref() {
        // Tokens built by another lexer may carry spans from a different text.
        Some(span) if span.str_of(source).is_some() => {
            render_diagnostic(source, &diag, span.0.clone(), writer, use_color)
        }
        _ => writeln!(writer, "{}", diag),
    }
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    span: std::ops::Range<usize>,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let kind = match diag.severity {
        Severity::Error => ReportKind::Error,
        Severity::Bug => ReportKind::Custom("Bug", ariadne::Color::Magenta),
    };

    let mut report = Report::build(kind, (SOURCE_ID, span.clone()))
        .with_message(&diag.message)
        .with_config(
            ariadne::Config::default()
                .with_color(use_color)
                // Spans are byte offsets into the source.
                .with_index_type(ariadne::IndexType::Byte),
        );

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    let color = colors.next();
    report = report.with_label(
        Label::new((SOURCE_ID, span))
            .with_message(&diag.message)
            .with_color(color),
    );

    for help_msg in &diag.help {
        report = report.with_help(help_msg);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}
