//! Symbolic partial differentiation of formulas, and numerical evaluation of the result.
//!
//! The [`symbolic`] module turns a formula into an [`Expr`](symbolic::Expr) tree, simplifies it,
//! and differentiates it with respect to a sequence of variables. The [`numerical`] module binds
//! values to variables, evaluates trees to numbers and formats the result. The [`pipeline`] module
//! ties both together behind the three-line text protocol:
//!
//! ```
//! use pdiff_compute::pipeline::run;
//!
//! // d/dx 5xy at x = 2, y = 6
//! assert_eq!(run("(5*(x*y))\nx\nx 2 y 6").unwrap(), "30.00");
//! ```

pub mod consts;
pub mod numerical;
pub mod pipeline;
pub mod symbolic;
