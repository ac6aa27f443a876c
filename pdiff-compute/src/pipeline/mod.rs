//! The three-line text protocol.
//!
//! The input of the pipeline is three lines:
//!
//! ```text
//! <formula>
//! <variables to differentiate by, separated by whitespace>
//! <name value pairs, separated by whitespace>
//! ```
//!
//! The formula is parsed and simplified, differentiated by each variable in turn, and evaluated
//! at the bindings. The result is written with two decimals.
//!
//! Like [`parse`](crate::symbolic::parse()) and [`Point`], the pipeline never fails on bad
//! content: a malformed formula is `0`, an unbound variable is `0`, and a malformed binding is
//! `NaN`. The only error is an input with fewer than three lines.

pub mod error;

use crate::{
    numerical::{eval::Eval, fmt::{format, FormatOptions}, point::Point},
    symbolic::{expr::Expr, parse::parse, plan::DiffPlan, simplify::step::Step},
};
use error::{Line, MissingLine};
use pdiff_error::Error;
use tracing::debug;

/// The three lines of an input, with line breaks removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input<'a> {
    /// The formula to differentiate.
    pub formula: &'a str,

    /// The variables to differentiate by.
    pub plan: &'a str,

    /// The `name value` bindings to evaluate at.
    pub bindings: &'a str,
}

impl<'a> Input<'a> {
    /// Splits the input at its first two line breaks. Both `\n` and `\r\n` are accepted. Any
    /// further line breaks belong to the bindings.
    ///
    /// Everything before the first line break is the formula, so an empty input is an empty
    /// formula followed by a missing plan line.
    pub fn split(input: &'a str) -> Result<Self, Error> {
        let missing = |line| Error::new(vec![input.len()..input.len()], MissingLine { line });

        let mut lines = input.splitn(3, '\n');
        let formula = lines.next().unwrap_or_default();
        let plan = lines.next().ok_or_else(|| missing(Line::Plan))?;
        let bindings = lines.next().ok_or_else(|| missing(Line::Bindings))?;

        Ok(Self {
            formula: formula.strip_suffix('\r').unwrap_or(formula),
            plan: plan.strip_suffix('\r').unwrap_or(plan),
            bindings,
        })
    }
}

/// The result of running the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The simplified derivative.
    pub derivative: Expr,

    /// The simplification steps taken after each differentiation.
    pub steps: Vec<Vec<Step>>,

    /// The value of the derivative at the bindings.
    pub value: f64,

    /// The formatted value.
    pub output: String,
}

/// Runs the pipeline on the given input, returning the value of the derivative with two
/// decimals.
///
/// ```
/// use pdiff_compute::pipeline::run;
///
/// assert_eq!(run("(x^(y^10))\nx x\nx 1 y 2").unwrap(), "1047552.00");
/// ```
pub fn run(input: &str) -> Result<String, Error> {
    run_with_options(input, FormatOptions::default())
}

/// Runs the pipeline on the given input, formatting the value with the given options.
pub fn run_with_options(input: &str, options: FormatOptions) -> Result<String, Error> {
    run_with_steps(input, options).map(|evaluation| evaluation.output)
}

/// Runs the pipeline on the given input, also returning the derivative it evaluated and the
/// simplification steps taken.
pub fn run_with_steps(input: &str, options: FormatOptions) -> Result<Evaluation, Error> {
    let Input { formula, plan, bindings } = Input::split(input)?;

    let point = Point::new(bindings);
    let f = parse(formula, point.variables());
    debug!(%f, "parsed formula");

    let (derivative, steps) = DiffPlan::new(plan).apply_with_steps(&f);
    let value = derivative.eval(&point);
    let output = format(value, options);
    debug!(%derivative, value, %output, "evaluated");

    Ok(Evaluation { derivative, steps, value, output })
}
