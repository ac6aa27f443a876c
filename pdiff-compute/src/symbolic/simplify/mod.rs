//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into a canonical
//! form with the same value. Operands are simplified before the node that holds them; then the
//! [rules](rules::all) are applied to the node until none of them applies.
//!
//! The rules evaluate constant subexpressions, splice nested sums and products into their parent,
//! gather the numbers of a sum or product into one leading number, and remove the identities
//! `a+0`, `a*0`, `a*1`, `a^0`, `a^1` and `1^a`. Like terms are never combined and no operands are
//! reordered, other than moving numbers to the front.
//!
//! Simplifying a simplified expression returns it unchanged.

pub mod rules;
pub mod step;

use crate::symbolic::{
    expr::Expr,
    step_collector::{StepCollector, Traced},
};
use step::Step;

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let mut expr = match expr {
        Expr::Operation(op, operands) => Expr::Operation(
            *op,
            operands.iter()
                .map(|operand| inner_simplify(operand, step_collector))
                .collect(),
        ),
        leaf => leaf.clone(),
    };

    // every rule keeps the operands of its result simplified, so only this node needs another look
    while let Some(new_expr) = rules::all(&expr, step_collector) {
        expr = new_expr;
    }

    expr
}

/// Simplify the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut Traced::<Step>(&mut ()))
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned. This is useful for debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut Traced::<Step>(&mut steps));
    (expr, steps)
}

#[cfg(test)]
mod tests {
    use crate::numerical::{eval::Eval, point::Point};
    use pretty_assertions::assert_eq;
    use super::*;

    fn convert(source: &str) -> Expr {
        pdiff_parser::parse(source).unwrap().into()
    }

    #[test]
    fn collapse_product_constants() {
        let expr = Expr::mul(vec![Expr::Number(2.0), Expr::Number(5.0), Expr::var("y")]);
        assert_eq!(simplify(&expr), Expr::mul(vec![Expr::Number(10.0), Expr::var("y")]));
    }

    #[test]
    fn drop_one_after_collapse() {
        let expr = Expr::mul(vec![Expr::Number(1.0), Expr::Number(5.0), Expr::var("y")]);
        assert_eq!(simplify(&expr), Expr::mul(vec![Expr::Number(5.0), Expr::var("y")]));
    }

    #[test]
    fn drop_zero_terms() {
        let expr = Expr::add(vec![
            Expr::var("a"),
            Expr::var("b"),
            Expr::Number(0.0),
            Expr::var("c"),
            Expr::Number(0.0),
        ]);
        assert_eq!(simplify(&expr), Expr::add(vec![Expr::var("a"), Expr::var("b"), Expr::var("c")]));
    }

    #[test]
    fn zero_factor() {
        let expr = Expr::mul(vec![Expr::ln(Expr::var("z")), Expr::Number(0.0)]);
        assert_eq!(simplify(&expr), Expr::Number(0.0));
    }

    #[test]
    fn flatten_nested_products() {
        assert_eq!(simplify(&convert("(5*((x^4)*(y^2)))")), Expr::mul(vec![
            Expr::Number(5.0),
            Expr::pow(Expr::var("x"), Expr::Number(4.0)),
            Expr::pow(Expr::var("y"), Expr::Number(2.0)),
        ]));
    }

    #[test]
    fn flatten_left_nested_sums() {
        assert_eq!(simplify(&convert("a+b*c*d+e")), Expr::add(vec![
            Expr::var("a"),
            Expr::mul(vec![Expr::var("b"), Expr::var("c"), Expr::var("d")]),
            Expr::var("e"),
        ]));
    }

    #[test]
    fn subtraction_is_not_flattened() {
        assert_eq!(simplify(&convert("a-b-c")), convert("a-b-c"));
    }

    #[test]
    fn fold_functions_of_constants() {
        assert_eq!(simplify(&convert("cos 0 + 2*ln 1 + x^1")), Expr::add(vec![
            Expr::Number(1.0),
            Expr::var("x"),
        ]));
    }

    #[test]
    fn power_identities() {
        assert_eq!(simplify(&convert("x^0")), Expr::Number(1.0));
        assert_eq!(simplify(&convert("(0*x)^0")), Expr::Number(1.0));
        assert_eq!(simplify(&convert("1^(x+y)")), Expr::Number(1.0));
        assert_eq!(simplify(&convert("(x+y)^(2-1)")), convert("x+y"));
    }

    #[test]
    fn cascade_to_constant() {
        assert_eq!(simplify(&convert("1*3*1*(1+(x^2+5*x+6)*0)*1")), Expr::Number(3.0));
    }

    #[test]
    fn steps_are_collected() {
        let (expr, steps) = simplify_with_steps(&convert("0+x*1"));
        assert_eq!(expr, Expr::var("x"));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::AddZero]);
    }

    #[test]
    fn idempotent() {
        let sources = [
            "y+2*z^x^sin y*z+y*cos pi^2*ln x",
            "(((x^2)+(2*(z^5)))+(((18*(x^-1))+y)+z))",
            "(cos pi+2*ln e)*0.50*x*y^2+z",
            "2*(3*(x*4))+0*y-(1*z)^1",
            "ln(ln(ln(ln x)))",
        ];
        for source in sources {
            let once = simplify(&convert(source));
            assert_eq!(simplify(&once), once);
        }
    }

    #[test]
    fn value_preserving() {
        let point = Point::new("x 2.5 y -1.25 z 0.75");
        let sources = [
            "y+2*z^x^sin y*z+y*cos pi^2*ln x",
            "(((x^2)*(2*(z^5)))*((x+y)+z))",
            "2*(3*(x*4))+0*y-(1*z)^1",
            "(sin x^-2+pi^-1)^-1",
        ];
        for source in sources {
            let expr = convert(source);
            let before = expr.eval(&point);
            let after = simplify(&expr).eval(&point);
            assert!((before - after).abs() <= 1e-9 * before.abs().max(1.0), "{source}: {before} != {after}");
        }
    }
}
