//! Simplification rules for powers.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};

/// `a^0 = 1`
///
/// A zero base gives `0` instead. This only matters when the rule is applied on its own: inside
/// [`all`](super::all), `0^0` is constant folded before this rule is tried.
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        if !exp.is_number(0.0) {
            return None;
        }

        if base.is_number(0.0) {
            Some(Expr::Number(0.0))
        } else {
            Some(Expr::Number(1.0))
        }
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        if exp.is_number(1.0) {
            Some(base.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `1^a = 1`
pub fn power_one_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, _| {
        if base.is_number(1.0) {
            Some(Expr::Number(1.0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOneLeft);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_one_left(expr, step_collector))
}
