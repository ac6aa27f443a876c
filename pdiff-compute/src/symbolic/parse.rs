//! Reading formulas into simplified [`Expr`] trees.

use crate::consts::is_reserved;
use pdiff_error::Error;
use std::collections::HashSet;
use super::{expr::Expr, simplify::simplify};
use tracing::{debug, warn};

/// Parses the given formula and simplifies it, returning the parse error if the formula is
/// malformed.
///
/// The error's spans are byte ranges into `text`.
pub fn try_parse(text: &str) -> Result<Expr, Error> {
    let ast = pdiff_parser::parse(text)?;
    Ok(simplify(&Expr::from(ast)))
}

/// Parses the given formula and simplifies it.
///
/// A malformed formula is not an error: it is read as the number `0`, and the failure is logged
/// at `warn` level. Use [`try_parse`] to get the error instead.
///
/// `known_variables` names the variables the caller expects to appear in the formula. Any other
/// variable is still accepted (it evaluates to `0` when unbound); it is only logged.
pub fn parse<S: AsRef<str>>(text: &str, known_variables: &[S]) -> Expr {
    let expr = match try_parse(text) {
        Ok(expr) => expr,
        Err(err) => {
            warn!(formula = text, spans = ?err.spans, error = ?err.kind, "malformed formula, using 0");
            return Expr::Number(0.0);
        },
    };

    let known = known_variables.iter()
        .map(AsRef::as_ref)
        .collect::<HashSet<_>>();
    let mut reported = HashSet::new();
    for name in expr.post_order_iter().filter_map(Expr::as_variable) {
        if !known.contains(name) && !is_reserved(name) && reported.insert(name) {
            debug!(name, "formula uses a variable that is not bound");
        }
    }

    expr
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn nested_product() {
        assert_eq!(parse("(5*(x*y))", &["x", "y"]), Expr::mul(vec![
            Expr::Number(5.0),
            Expr::var("x"),
            Expr::var("y"),
        ]));
    }

    #[test]
    fn precedence() {
        assert_eq!(parse("a+b*c", &["a", "b", "c"]), Expr::add(vec![
            Expr::var("a"),
            Expr::mul(vec![Expr::var("b"), Expr::var("c")]),
        ]));
    }

    #[test]
    fn nested_functions() {
        assert_eq!(parse("ln ln x", &["x"]), Expr::ln(Expr::ln(Expr::var("x"))));
    }

    #[test]
    fn right_associative_power() {
        assert_eq!(parse("a^b^c", &["a", "b", "c"]), Expr::pow(
            Expr::var("a"),
            Expr::pow(Expr::var("b"), Expr::var("c")),
        ));
    }

    #[test]
    fn function_in_exponent() {
        assert_eq!(parse("2*z^x^sin y*z", &["x", "y", "z"]), Expr::mul(vec![
            Expr::Number(2.0),
            Expr::pow(Expr::var("z"), Expr::pow(Expr::var("x"), Expr::sin(Expr::var("y")))),
            Expr::var("z"),
        ]));
    }

    #[test]
    fn negative_exponent() {
        assert_eq!(parse("(x^-1)", &["x"]), Expr::pow(Expr::var("x"), Expr::Number(-1.0)));
    }

    #[test]
    fn sum_of_powers() {
        assert_eq!(parse("((x^3)+(x^2))", &["x"]), Expr::add(vec![
            Expr::pow(Expr::var("x"), Expr::Number(3.0)),
            Expr::pow(Expr::var("x"), Expr::Number(2.0)),
        ]));
    }

    #[test]
    fn constants_fold() {
        assert_eq!(parse::<&str>("cos 0 + 2 * ln 1 - 3^2", &[]), Expr::Number(-8.0));
    }

    #[test]
    fn reserved_names_stay_symbolic() {
        assert_eq!(parse::<&str>("ln e", &[]), Expr::ln(Expr::var("e")));
    }

    #[test]
    fn unknown_variables_are_kept() {
        assert_eq!(parse("x*w", &["x"]), Expr::mul(vec![Expr::var("x"), Expr::var("w")]));
    }

    #[test]
    fn malformed_formula_is_zero() {
        assert_eq!(parse("5*+", &["x"]), Expr::Number(0.0));
        assert_eq!(parse("(x+1", &["x"]), Expr::Number(0.0));
        assert_eq!(parse::<&str>("", &[]), Expr::Number(0.0));
    }

    #[test]
    fn malformed_formula_error() {
        let err = try_parse("x*(y+1").unwrap_err();
        assert_eq!(err.spans, vec![2..3]);
    }
}
