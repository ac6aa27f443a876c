//! Rules that evaluate the numeric parts of an expression ahead of time.

use crate::numerical::eval::apply;
use crate::symbolic::{
    expr::{Expr, Op},
    simplify::step::Step,
    step_collector::StepCollector,
};

/// Replaces an operation whose operands are all numbers with the number it evaluates to.
///
/// `2*3 = 6`
/// `ln 1 = 0`
/// `0^0 = 1`
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Operation(op, operands) = expr else {
        return None;
    };

    let values = operands.iter()
        .map(Expr::as_number)
        .collect::<Option<Vec<_>>>()?;

    step_collector.push(Step::FoldConstants);
    Some(Expr::Number(apply(*op, &values)))
}

/// Folds the numbers among the operands of a sum or product into a single number placed first,
/// keeping the other operands in order. Applies when at least two, but not all, operands are
/// numbers.
///
/// `a+2+b+3 = 5+a+b`
/// `2*a*5 = 10*a`
pub fn collapse_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Operation(op @ (Op::Add | Op::Multiply), operands) = expr else {
        return None;
    };

    let (numbers, rest): (Vec<_>, Vec<_>) = operands.iter()
        .cloned()
        .partition(|operand| operand.as_number().is_some());
    if numbers.len() < 2 || rest.is_empty() {
        return None;
    }

    let values = numbers.iter()
        .filter_map(Expr::as_number)
        .collect::<Vec<_>>();
    let mut new_operands = Vec::with_capacity(rest.len() + 1);
    new_operands.push(Expr::Number(apply(*op, &values)));
    new_operands.extend(rest);

    step_collector.push(Step::CollapseConstants);
    Some(Expr::Operation(*op, new_operands))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fold_all_operators() {
        let cases = [
            (Expr::add(vec![Expr::Number(1.0), Expr::Number(2.0), Expr::Number(3.5)]), 6.5),
            (Expr::sub(Expr::Number(1.0), Expr::Number(2.0)), -1.0),
            (Expr::mul(vec![Expr::Number(4.0), Expr::Number(0.5)]), 2.0),
            (Expr::pow(Expr::Number(2.0), Expr::Number(10.0)), 1024.0),
            (Expr::ln(Expr::Number(1.0)), 0.0),
            (Expr::sin(Expr::Number(0.0)), 0.0),
            (Expr::cos(Expr::Number(0.0)), 1.0),
        ];
        for (expr, expected) in cases {
            assert_eq!(fold_constants(&expr, &mut ()), Some(Expr::Number(expected)));
        }
    }

    #[test]
    fn fold_keeps_full_precision() {
        let expr = Expr::ln(Expr::Number(2.0));
        assert_eq!(fold_constants(&expr, &mut ()), Some(Expr::Number(std::f64::consts::LN_2)));

        let expr = Expr::mul(vec![Expr::Number(0.125), Expr::Number(3.0)]);
        assert_eq!(fold_constants(&expr, &mut ()), Some(Expr::Number(0.375)));
    }

    #[test]
    fn collapse_keeps_full_precision() {
        let expr = Expr::mul(vec![Expr::Number(0.125), Expr::var("x"), Expr::Number(3.0)]);
        assert_eq!(
            collapse_constants(&expr, &mut ()),
            Some(Expr::mul(vec![Expr::Number(0.375), Expr::var("x")])),
        );
    }

    #[test]
    fn fold_zero_to_the_zero() {
        let expr = Expr::pow(Expr::Number(0.0), Expr::Number(0.0));
        assert_eq!(fold_constants(&expr, &mut ()), Some(Expr::Number(1.0)));
    }

    #[test]
    fn fold_needs_every_operand() {
        let expr = Expr::mul(vec![Expr::Number(2.0), Expr::var("x")]);
        assert_eq!(fold_constants(&expr, &mut ()), None);
    }

    #[test]
    fn collapse_product() {
        let expr = Expr::mul(vec![Expr::Number(2.0), Expr::Number(5.0), Expr::var("y")]);
        let mut steps = Vec::new();
        assert_eq!(
            collapse_constants(&expr, &mut steps),
            Some(Expr::mul(vec![Expr::Number(10.0), Expr::var("y")])),
        );
        assert_eq!(steps, vec![Step::CollapseConstants]);
    }

    #[test]
    fn collapse_keeps_order_of_symbols() {
        let expr = Expr::add(vec![
            Expr::var("a"),
            Expr::Number(2.0),
            Expr::var("b"),
            Expr::Number(3.0),
            Expr::var("c"),
        ]);
        assert_eq!(
            collapse_constants(&expr, &mut ()),
            Some(Expr::add(vec![Expr::Number(5.0), Expr::var("a"), Expr::var("b"), Expr::var("c")])),
        );
    }

    #[test]
    fn collapse_needs_two_numbers() {
        let expr = Expr::mul(vec![Expr::Number(2.0), Expr::var("x"), Expr::var("y")]);
        assert_eq!(collapse_constants(&expr, &mut ()), None);
    }
}
