//! Evaluation of expressions at a [`Point`].
//!
//! Evaluation is total: unbound variables are `0`, and arithmetic follows IEEE 754, so `ln 0` is
//! `-inf` and `ln -1` is `NaN`. Neither is treated as an error.

use crate::symbolic::expr::{Expr, Op};
use super::point::Point;

/// Applies the operator to already evaluated operands.
///
/// # Panics
///
/// Panics if the number of operands does not match the operator.
pub fn apply(op: Op, args: &[f64]) -> f64 {
    match (op, args) {
        (Op::Add, args) => args.iter().sum(),
        (Op::Multiply, args) => args.iter().product(),
        (Op::Subtract, [lhs, rhs]) => lhs - rhs,
        (Op::Power, [base, exp]) => base.powf(*exp),
        (Op::Ln, [arg]) => arg.ln(),
        (Op::Sin, [arg]) => arg.sin(),
        (Op::Cos, [arg]) => arg.cos(),
        (op, args) => unreachable!("`{}` applied to {} operands", op.symbol(), args.len()),
    }
}

/// Any type that can be evaluated to a number at a [`Point`].
pub trait Eval {
    /// Evaluates `self` with the variables bound by the given point.
    fn eval(&self, point: &Point) -> f64;
}

impl Eval for Expr {
    fn eval(&self, point: &Point) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Variable(name) => point.get(name),
            Expr::Operation(op, operands) => {
                let values = operands.iter()
                    .map(|operand| operand.eval(point))
                    .collect::<Vec<_>>();
                apply(*op, &values)
            },
        }
    }
}

/// Evaluates the expression at the given point.
pub fn evaluate(expr: &Expr, point: &Point) -> f64 {
    expr.eval(point)
}
