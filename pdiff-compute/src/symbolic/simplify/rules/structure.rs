//! Rules that change the shape of sums and products without looking at their values.

use crate::symbolic::{
    expr::{Expr, Op},
    simplify::step::Step,
    step_collector::StepCollector,
};

/// Replaces a sum or product of a single operand with that operand.
///
/// `+(a) = a`
/// `*(a) = a`
pub fn unwrap(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Operation(Op::Add | Op::Multiply, operands) = expr else {
        return None;
    };

    match operands.as_slice() {
        [operand] => {
            step_collector.push(Step::Unwrap);
            Some(operand.clone())
        },
        _ => None,
    }
}

/// Splices the operands of nested sums into the enclosing sum, and the operands of nested products
/// into the enclosing product, in place.
///
/// `a+(b+c) = a+b+c`
/// `a*(b*c)*d = a*b*c*d`
pub fn flatten(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Operation(op @ (Op::Add | Op::Multiply), operands) = expr else {
        return None;
    };

    let nested = |operand: &Expr| matches!(operand, Expr::Operation(inner, _) if inner == op);
    if !operands.iter().any(nested) {
        return None;
    }

    let mut new_operands = Vec::with_capacity(operands.len());
    for operand in operands {
        match operand {
            Expr::Operation(inner, inner_operands) if inner == op => {
                new_operands.extend(inner_operands.iter().cloned());
            },
            _ => new_operands.push(operand.clone()),
        }
    }

    step_collector.push(Step::Flatten);
    Some(Expr::Operation(*op, new_operands))
}
