//! Symbolic manipulation of formulas.
//!
//! A formula is read into an [`Expr`] with [`parse`] (or [`try_parse`] to keep the parse error),
//! which also [simplifies](simplify()) it. [`derivative`] differentiates an expression with
//! respect to one variable, and a [`DiffPlan`] chains derivatives to compute repeated and mixed
//! partials, simplifying after every step.
//!
//! ```
//! use pdiff_compute::symbolic::{parse, DiffPlan, Expr};
//!
//! let f = parse("x^5 + 3*y", &["x", "y"]);
//! let df = DiffPlan::new("x").apply(&f);
//! assert_eq!(df, Expr::mul(vec![
//!     Expr::Number(5.0),
//!     Expr::pow(Expr::var("x"), Expr::Number(4.0)),
//! ]));
//! assert_eq!(df.to_string(), "5 * x ^ 4");
//! ```

pub mod derivative;
pub mod expr;
pub mod parse;
pub mod plan;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use expr::{Expr, Op};
pub use parse::{parse, try_parse};
pub use plan::{apply_all, DiffPlan};
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
