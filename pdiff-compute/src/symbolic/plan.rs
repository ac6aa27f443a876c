//! Repeated and mixed partial derivatives.

use super::{
    derivative::derivative,
    expr::Expr,
    simplify::{simplify, simplify_with_steps, step::Step},
};
use tracing::debug;

/// An ordered sequence of variables to differentiate by.
///
/// Applying the plan `x y` to `f` computes `d/dy (d/dx f)`, simplifying after every step. The
/// order is kept exactly as given; mixed partials are never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffPlan {
    vars: Vec<String>,
}

impl DiffPlan {
    /// Reads a plan from whitespace-separated variable names. An empty or blank string gives the
    /// empty plan, which leaves the formula as is.
    pub fn new(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    /// The variables of the plan, in the order they are differentiated by.
    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    /// Returns true if the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Applies the plan to the given expression.
    pub fn apply(&self, f: &Expr) -> Expr {
        apply_all(&self.vars, f)
    }

    /// Applies the plan to the given expression, returning the simplification steps taken after
    /// each differentiation, in order.
    pub fn apply_with_steps(&self, f: &Expr) -> (Expr, Vec<Vec<Step>>) {
        let mut all_steps = Vec::with_capacity(self.vars.len());
        let expr = self.vars.iter().fold(f.clone(), |expr, var| {
            let (expr, steps) = simplify_with_steps(&derivative(&expr, var));
            debug!(with = %var, %expr, steps = steps.len(), "differentiated");
            all_steps.push(steps);
            expr
        });
        (expr, all_steps)
    }
}

impl<S: Into<String>> FromIterator<S> for DiffPlan {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { vars: iter.into_iter().map(Into::into).collect() }
    }
}

/// Differentiates `f` by each variable of `plan` in turn, simplifying after every step.
pub fn apply_all<S: AsRef<str>>(plan: &[S], f: &Expr) -> Expr {
    plan.iter().fold(f.clone(), |expr, var| {
        let var = var.as_ref();
        let expr = simplify(&derivative(&expr, var));
        debug!(with = %var, %expr, "differentiated");
        expr
    })
}

#[cfg(test)]
mod tests {
    use crate::symbolic::parse::try_parse;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn read_plan() {
        assert_eq!(DiffPlan::new(" y  x\tz ").vars(), ["y", "x", "z"]);
        assert!(DiffPlan::new("   ").is_empty());
    }

    #[test]
    fn empty_plan_keeps_formula() {
        let f = try_parse("x*y+1").unwrap();
        assert_eq!(DiffPlan::default().apply(&f), f);
    }

    #[test]
    fn second_derivative() {
        let f = try_parse("(5*((x^4)*(y^2)))").unwrap();
        assert_eq!(DiffPlan::new("x x").apply(&f), Expr::mul(vec![
            Expr::Number(60.0),
            Expr::pow(Expr::var("x"), Expr::Number(2.0)),
            Expr::pow(Expr::var("y"), Expr::Number(2.0)),
        ]));
    }

    #[test]
    fn mixed_partial() {
        let f = try_parse("(5*(x*(y^2)))").unwrap();
        assert_eq!(apply_all(&["y", "x"], &f), Expr::mul(vec![
            Expr::Number(10.0),
            Expr::var("y"),
        ]));
    }

    #[test]
    fn steps_per_variable() {
        let f = try_parse("x^3").unwrap();
        let plan = DiffPlan::from_iter(["x", "x"]);
        let (expr, steps) = plan.apply_with_steps(&f);
        assert_eq!(expr, plan.apply(&f));
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|steps| !steps.is_empty()));
    }
}
