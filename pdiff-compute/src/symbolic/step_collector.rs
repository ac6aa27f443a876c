use std::fmt::Debug;
use tracing::trace;

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you don't
/// want to know the steps taken by an algorithm.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// Wraps another collector, logging every step at `trace` level before passing it on.
pub struct Traced<'a, S>(pub &'a mut dyn StepCollector<S>);

impl<S: Debug> StepCollector<S> for Traced<'_, S> {
    fn push(&mut self, step: S) {
        trace!(?step, "applied rule");
        self.0.push(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traced_forwards_steps() {
        let mut steps = Vec::new();
        let mut traced = Traced::<u8>(&mut steps);
        traced.push(1);
        traced.push(2);
        assert_eq!(steps, vec![1, 2]);
    }
}
