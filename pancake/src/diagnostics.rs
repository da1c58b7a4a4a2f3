//! Source-annotated rendering of malformed-input errors.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::error::ReadError;

fn build<'a>(error: &ReadError, name: &'a str, color: bool) -> Report<'a, (&'a str, Range<usize>)> {
    let span = error.span();
    let mut report = Report::build(ReportKind::Error, name, span.start)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_message(error.to_string());
    // Empty input has nothing to point at.
    if !span.is_empty() {
        report = report.with_label(
            Label::new((name, span))
                .with_message(error.label())
                .with_color(Color::Red),
        );
    }
    report.finish()
}

/// Writes a report for `error` against `source`, named `name`.
pub fn write_report<W: Write>(
    error: &ReadError,
    name: &str,
    source: &str,
    color: bool,
    out: W,
) -> io::Result<()> {
    build(error, name, color).write((name, Source::from(source)), out)
}

/// Renders a report to a plain string without colors.
pub fn render(error: &ReadError, name: &str, source: &str) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(error, name, source, false, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Prints a colored report to stderr.
pub fn eprint(error: &ReadError, name: &str, source: &str) -> io::Result<()> {
    write_report(error, name, source, true, io::stderr())
}
