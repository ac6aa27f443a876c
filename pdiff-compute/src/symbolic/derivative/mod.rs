//! Symbolic partial derivatives.
//!
//! [`derivative`] differentiates an expression with respect to one variable by structural
//! recursion. The result is not simplified: it keeps every `0` and `1` the rules produce, so the
//! caller should [`simplify`](super::simplify()) it, as [`DiffPlan`](super::plan::DiffPlan) does
//! after every step.

mod function;
mod power;

use super::expr::{Expr, Op};

/// `(f + g)' = f' + g'`
fn sum_rule(terms: &[Expr], with: &str) -> Expr {
    Expr::add(terms.iter().map(|term| derivative(term, with)).collect())
}

/// `(f - g)' = f' - g'`
fn difference_rule(lhs: &Expr, rhs: &Expr, with: &str) -> Expr {
    Expr::sub(derivative(lhs, with), derivative(rhs, with))
}

/// `(f * g * h)' = f' * g * h + g' * f * h + h' * f * g`
///
/// Each product starts with the differentiated factor, followed by the other factors in their
/// original order.
fn product_rule(product: &[Expr], with: &str) -> Expr {
    let terms = (0..product.len())
        .map(|derivative_index| {
            let mut factors = Vec::with_capacity(product.len());
            factors.push(derivative(&product[derivative_index], with));
            factors.extend(
                product.iter()
                    .enumerate()
                    .filter(|(term_index, _)| *term_index != derivative_index)
                    .map(|(_, factor)| factor.clone()),
            );
            Expr::mul(factors)
        })
        .collect();

    Expr::add(terms)
}

/// Computes the partial derivative of the given expression with respect to the variable `with`.
/// Every other variable is treated as a constant.
///
/// # Panics
///
/// Panics if an operation has the wrong number of operands for its operator. Expressions built
/// by parsing, simplifying or differentiating always have the right number.
pub fn derivative(f: &Expr, with: &str) -> Expr {
    match f {
        Expr::Number(_) => Expr::Number(0.0),
        Expr::Variable(name) => Expr::Number(if name == with { 1.0 } else { 0.0 }),
        Expr::Operation(op, operands) => match (op, operands.as_slice()) {
            (Op::Add, terms) => sum_rule(terms, with),
            (Op::Multiply, factors) => product_rule(factors, with),
            (Op::Subtract, [lhs, rhs]) => difference_rule(lhs, rhs, with),
            (Op::Power, [base, exp]) => power::power_rule(base, exp, with),
            (Op::Ln | Op::Sin | Op::Cos, [arg]) => function::function_derivative(*op, arg, with),
            (op, operands) => unreachable!("`{}` applied to {} operands", op.symbol(), operands.len()),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::numerical::{eval::Eval, point::Point};
    use crate::symbolic::{parse::try_parse, simplify};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Differentiates the formula once and simplifies the result.
    fn diff(source: &str, with: &str) -> Expr {
        simplify(&derivative(&try_parse(source).unwrap(), with))
    }

    /// Compares the symbolic derivative against a central finite difference at the given point.
    fn check_numerically(source: &str, with: &str, bindings: &str) {
        let expr = try_parse(source).unwrap();
        let symbolic = diff(source, with).eval(&Point::new(bindings));

        let h = 1e-6;
        let mut ahead = Point::new(bindings);
        let mut behind = Point::new(bindings);
        let at = ahead.get(with);
        ahead.add_var(with, at + h);
        behind.add_var(with, at - h);
        let numeric = (expr.eval(&ahead) - expr.eval(&behind)) / (2.0 * h);

        assert!(
            (symbolic - numeric).abs() <= 1e-5 * symbolic.abs().max(1.0),
            "d/d{with} {source}: symbolic {symbolic}, numeric {numeric}",
        );
    }

    #[test]
    fn constant_factor() {
        assert_eq!(diff("4*x", "x"), Expr::Number(4.0));
    }

    #[test]
    fn power_of_variable() {
        assert_eq!(diff("x^5", "x"), Expr::mul(vec![
            Expr::Number(5.0),
            Expr::pow(Expr::var("x"), Expr::Number(4.0)),
        ]));
    }

    #[test]
    fn sum_of_powers() {
        assert_eq!(diff("x+x^2", "x"), Expr::add(vec![
            Expr::Number(1.0),
            Expr::mul(vec![Expr::Number(2.0), Expr::var("x")]),
        ]));
    }

    #[test]
    fn natural_log_of_variable() {
        assert_eq!(diff("ln(x)", "x"), Expr::pow(Expr::var("x"), Expr::Number(-1.0)));
    }

    #[test]
    fn unrelated_variable() {
        assert_eq!(diff("5*(x*(y^2))", "z"), Expr::Number(0.0));
    }

    #[test]
    fn unsimplified_product_rule() {
        assert_eq!(derivative(&Expr::mul(vec![Expr::var("x"), Expr::var("y")]), "x"), Expr::add(vec![
            Expr::mul(vec![Expr::Number(1.0), Expr::var("y")]),
            Expr::mul(vec![Expr::Number(0.0), Expr::var("x")]),
        ]));
    }

    #[test]
    fn difference() {
        assert_eq!(diff("x^2-3*x", "x"), Expr::sub(
            Expr::mul(vec![Expr::Number(2.0), Expr::var("x")]),
            Expr::Number(3.0),
        ));
    }

    #[test]
    fn matches_finite_differences() {
        let cases = [
            ("(5*((x^4)*(y^2)))", "y", "x 1.5 y -0.5"),
            ("x^(x+1)", "x", "x 1.3"),
            ("x^x", "x", "x 0.7"),
            ("(sin x)^(sin x)", "x", "x 1"),
            ("ln(ln(ln(ln x)))", "x", "x 15.16"),
            ("4^(x^e)", "x", "x 1"),
            ("y+2*z^x^sin y*z+y*cos pi^2*ln x", "x", "x 2.72 y 2 z 3"),
            ("y+2*z^x^sin y*z+y*cos pi^2*ln x", "z", "x 2.72 y 2 z 3"),
            ("(sin x^-2+pi^-1)^-1", "x", "x 3"),
            ("cos(x*y)-sin(x)*y", "y", "x 0.4 y 2"),
            ("-x^3+2^-x", "x", "x 0.9"),
        ];
        for (source, with, bindings) in cases {
            check_numerically(source, with, bindings);
        }
    }
}
