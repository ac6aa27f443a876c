//! The span-carrying [`Error`] shared by the `pdiff` crates.
//!
//! An error is a set of byte ranges into the source plus an [`ErrorKind`] describing what went
//! wrong. Kinds only provide text: a message, one label per span and an optional help line. The
//! [`Error`] turns that text into an [`ariadne`] report pointing at the source.

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::{fmt, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::Rgb(52, 235, 152);

/// The text describing one kind of error.
///
/// Most kinds derive this trait with `#[derive(ErrorKind)]` from `pdiff-attrs`.
pub trait ErrorKind: fmt::Debug + Send {
    /// The headline of the report.
    fn message(&self) -> String;

    /// One label per span of the error, in the same order. Missing labels leave their span
    /// highlighted without text.
    fn labels(&self) -> Vec<String> {
        Vec::new()
    }

    /// What the user could do to fix the error.
    fn help(&self) -> Option<String> {
        None
    }
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Builds the report of this error. `src_id` names the source in the rendered output.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        let offset = self.spans.first().map_or(0, |span| span.start);
        let mut labels = self.kind.labels().into_iter();
        let mut builder = Report::build(ReportKind::Error, src_id, offset)
            .with_message(self.kind.message());

        for span in &self.spans {
            let label = Label::new((src_id, span.clone())).with_color(EXPR);
            builder.add_label(match labels.next() {
                Some(text) if !text.is_empty() => label.with_message(text),
                _ => label,
            });
        }

        if let Some(help) = self.kind.help() {
            builder.set_help(help);
        }
        builder.finish()
    }

    /// Writes the report of this error to the given writer, highlighting the given source code.
    pub fn write_report<W: io::Write>(&self, src_id: &str, input: &str, w: W) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), w)
    }

    /// Report this error to stderr.
    ///
    /// [`Report`] has no `Display` implementation, so printing goes through its `eprint` method.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind.message())
    }
}

impl std::error::Error for Error {}
