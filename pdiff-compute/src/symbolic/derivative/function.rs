//! Symbolic derivatives of the built-in functions, with the chain rule applied.

use crate::symbolic::expr::{Expr, Op};
use super::derivative;

/// Computes the derivative of `op arg`.
pub(super) fn function_derivative(op: Op, arg: &Expr, with: &str) -> Expr {
    match op {
        Op::Ln => {
            let reciprocal = Expr::pow(arg.clone(), Expr::Number(-1.0));
            if arg.as_variable() == Some(with) {
                reciprocal
            } else {
                Expr::mul(vec![reciprocal, derivative(arg, with)])
            }
        },
        Op::Sin => Expr::mul(vec![Expr::cos(arg.clone()), derivative(arg, with)]),
        Op::Cos => Expr::mul(vec![
            Expr::Number(-1.0),
            Expr::sin(arg.clone()),
            derivative(arg, with),
        ]),
        _ => unreachable!("`{}` is not a function", op.symbol()),
    }
}
