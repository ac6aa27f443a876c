//! Derivative of `p ^ n`, split by which side depends on the variable.

use crate::symbolic::expr::Expr;
use super::derivative;

/// Computes the derivative of `base ^ exp`.
pub(super) fn power_rule(base: &Expr, exp: &Expr, with: &str) -> Expr {
    match (base.depends_on(with), exp.depends_on(with)) {
        (true, true) if base == exp => self_power(base, with),
        (true, true) => general_power(base, exp, with),
        (true, false) => constant_exponent(base, exp, with),
        (false, true) => constant_base(base, exp, with),
        (false, false) => Expr::Number(0.0),
    }
}

/// `(p^p)' = (ln p + 1) * p^p * p'`
fn self_power(base: &Expr, with: &str) -> Expr {
    Expr::mul(vec![
        Expr::add(vec![Expr::ln(base.clone()), Expr::Number(1.0)]),
        Expr::pow(base.clone(), base.clone()),
        derivative(base, with),
    ])
}

/// `(p^n)' = p^n * (n' * ln p + n * p^-1 * p')`
fn general_power(base: &Expr, exp: &Expr, with: &str) -> Expr {
    Expr::mul(vec![
        Expr::pow(base.clone(), exp.clone()),
        Expr::add(vec![
            Expr::mul(vec![derivative(exp, with), Expr::ln(base.clone())]),
            Expr::mul(vec![
                exp.clone(),
                Expr::pow(base.clone(), Expr::Number(-1.0)),
                derivative(base, with),
            ]),
        ]),
    ])
}

/// `(p^n)' = n * p^(n - 1) * p'`
///
/// A numeric exponent is lowered directly; a symbolic one becomes `n + -1`.
fn constant_exponent(base: &Expr, exp: &Expr, with: &str) -> Expr {
    if exp.is_number(0.0) {
        return Expr::Number(0.0);
    }

    let lowered = match exp.as_number() {
        Some(n) => Expr::Number(n - 1.0),
        None => Expr::add(vec![exp.clone(), Expr::Number(-1.0)]),
    };
    Expr::mul(vec![
        exp.clone(),
        Expr::pow(base.clone(), lowered),
        derivative(base, with),
    ])
}

/// `(p^n)' = p^n * ln p * n'`
fn constant_base(base: &Expr, exp: &Expr, with: &str) -> Expr {
    if base.is_number(0.0) || base.is_number(1.0) {
        return Expr::Number(0.0);
    }

    Expr::mul(vec![
        Expr::pow(base.clone(), exp.clone()),
        Expr::ln(base.clone()),
        derivative(exp, with),
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn variable_to_itself() {
        let x = Expr::var("x");
        assert_eq!(power_rule(&x, &x, "x"), Expr::mul(vec![
            Expr::add(vec![Expr::ln(x.clone()), Expr::Number(1.0)]),
            Expr::pow(x.clone(), x.clone()),
            Expr::Number(1.0),
        ]));
    }

    #[test]
    fn symbolic_exponent_is_lowered_with_add() {
        let y = Expr::var("y");
        let x = Expr::var("x");
        assert_eq!(power_rule(&y, &x, "y"), Expr::mul(vec![
            x.clone(),
            Expr::pow(y.clone(), Expr::add(vec![x.clone(), Expr::Number(-1.0)])),
            Expr::Number(1.0),
        ]));
    }

    #[test]
    fn zero_or_one_base() {
        let x = Expr::var("x");
        assert_eq!(power_rule(&Expr::Number(1.0), &x, "x"), Expr::Number(0.0));
        assert_eq!(power_rule(&Expr::Number(0.0), &x, "x"), Expr::Number(0.0));
    }

    #[test]
    fn constant_power() {
        assert_eq!(power_rule(&Expr::var("y"), &Expr::Number(3.0), "x"), Expr::Number(0.0));
    }
}
