//! Error kinds produced while reading the input of the pipeline.

use pdiff_attrs::ErrorKind;

/// The input ended before all three lines were given.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing the {} line", line.name()),
    label = "the input ends here",
    help = "the input must have three lines: the formula, the variables to differentiate by, and the bindings",
)]
pub struct MissingLine {
    /// The line that is missing.
    pub line: Line,
}

/// A line of the input that can be missing. The formula line is always present, since even an
/// empty input is an empty formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// The variables to differentiate by.
    Plan,

    /// The `name value` bindings to evaluate at.
    Bindings,
}

impl Line {
    /// Returns a human readable name for the line.
    pub fn name(&self) -> &'static str {
        match self {
            Line::Plan => "differentiation variables",
            Line::Bindings => "bindings",
        }
    }
}
