//! Numerical evaluation of expressions.
//!
//! A [`Point`](point::Point) binds numbers to variable names, [`Eval`](eval::Eval) computes the
//! value of an expression at a point, and [`fmt`] renders the result.

pub mod eval;
pub mod fmt;
pub mod point;
