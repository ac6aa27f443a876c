//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given; the operands of that node
//! are already simplified.

pub mod add;
pub mod constant;
pub mod multiply;
pub mod power;
pub mod structure;

use crate::symbolic::{expr::{Expr, Op}, step_collector::StepCollector};
use super::step::Step;

/// If the expression is an add expression, calls the given transformation function with the terms.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(expr: &Expr, f: impl Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    match expr {
        Expr::Operation(Op::Add, terms) => f(terms),
        _ => None,
    }
}

/// If the expression is a multiplication expression, calls the given transformation function with
/// the factors.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_multiply(expr: &Expr, f: impl Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    match expr {
        Expr::Operation(Op::Multiply, factors) => f(factors),
        _ => None,
    }
}

/// If the expression is a power expression, calls the given transformation function with the base
/// and the exponent.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_power(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    match expr {
        Expr::Operation(Op::Power, operands) => match operands.as_slice() {
            [base, exp] => f(base, exp),
            _ => None,
        },
        _ => None,
    }
}

/// Applies the first rule that matches, trying the rules in a fixed order.
///
/// Constant folding runs first, so a node whose operands are all numbers never reaches the
/// identity rules; `0^0` folds to `1` rather than being decided by [`power::power_zero`].
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    constant::fold_constants(expr, step_collector)
        .or_else(|| structure::unwrap(expr, step_collector))
        .or_else(|| structure::flatten(expr, step_collector))
        .or_else(|| constant::collapse_constants(expr, step_collector))
        .or_else(|| add::all(expr, step_collector))
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
}
