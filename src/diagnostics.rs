//! Fancy diagnostics of parse warnings using `ariadne`.
//!
//! Warnings only carry the line number where they occurred, so [`SimpleSource`] maps the line
//! back to its span in the source text, and ariadne renders it with the row and the column.
//!
//! # Example
//!
//! ```rust
//! use osu_rs::{beatmap::parse_beatmap, diagnostics::emit_warnings};
//!
//! let source = "[Metadata]\nTitle:Test\nnot a pair\n";
//! let output = parse_beatmap(source);
//!
//! emit_warnings("test.osu", source, &output.warnings);
//! ```

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::beatmap::{ParseWarning, ParseWarningWithLine};

/// The text of a beatmap with its file name, to locate the lines warnings point at.
///
/// ```rust
/// use osu_rs::diagnostics::SimpleSource;
///
/// let source = SimpleSource::new("test.osu", "[General]\nMode: 0\n");
/// assert_eq!(source.text(), "[General]\nMode: 0\n");
/// assert_eq!(source.line_span(2), 10..17);
/// ```
pub struct SimpleSource<'a> {
    name: &'a str,
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Wraps the text of the file `name`.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Gets the whole text.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Gets the file name shown in reports.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Get the span of the 1-based line in characters, without the line break. A line past the
    /// end is the empty span at the end of the text.
    #[must_use]
    pub fn line_span(&self, line: usize) -> Range<usize> {
        let mut start = 0;
        for (index, content) in self.text.split('\n').enumerate() {
            let len = content.trim_end_matches('\r').chars().count();
            if index + 1 == line {
                return start..start + len;
            }
            start += content.chars().count() + 1;
        }
        let end = self.text.chars().count();
        end..end
    }
}

/// Converts a located warning to a report over the beatmap text.
pub trait ToAriadne {
    /// Builds the report, spanning the whole line of the warning.
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)>;
}

impl ToAriadne for ParseWarningWithLine {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        let (title, label) = match self.content() {
            ParseWarning::UnrecognizedLine(_) => ("unrecognized line", "expected `key:value`"),
            ParseWarning::MalformedTimingPoint(_) => {
                ("malformed timing point", "the offset is missing or not a number")
            }
            ParseWarning::MalformedHitObject(_) => (
                "malformed hit object",
                "expected a position, a time and a type, and a valid repeat count on sliders",
            ),
            ParseWarning::MalformedBreak(_) => {
                ("malformed break", "the times must be unsigned integers")
            }
        };
        build_report(
            src,
            ReportKind::Warning,
            src.line_span(self.line()),
            title,
            label,
            Color::Yellow,
        )
    }
}

/// Builds a report with a single label over `range`, titled `title`.
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, Range<usize>)> {
    let file = src.name().to_owned();
    let label = Label::new((file.clone(), range.clone()))
        .with_message(label_message.to_string())
        .with_color(color);
    Report::build(kind, (file, range))
        .with_message(title)
        .with_label(label)
        .finish()
}

/// Renders the warnings of the beatmap file `file` to the standard error. A report which
/// fails to print is logged and skipped.
pub fn emit_warnings<'a>(
    file: &'a str,
    text: &'a str,
    warnings: impl IntoIterator<Item = &'a ParseWarningWithLine>,
) {
    let located = SimpleSource::new(file, text);
    let cache = (file.to_owned(), Source::from(text));
    for warning in warnings {
        if let Err(err) = warning.to_report(&located).eprint(cache.clone()) {
            log::error!("failed to print the warning at line {}: {err}", warning.line());
        }
    }
}

/// Builds the reports of the warnings without printing them.
#[must_use]
pub fn collect_reports<'a>(
    file: &'a str,
    text: &'a str,
    warnings: impl IntoIterator<Item = &'a ParseWarningWithLine>,
) -> Vec<Report<'a, (String, Range<usize>)>> {
    let located = SimpleSource::new(file, text);
    warnings
        .into_iter()
        .map(|warning| warning.to_report(&located))
        .collect()
}
