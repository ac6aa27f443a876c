/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `2*3 = 6`
    /// `ln 1 = 0`
    FoldConstants,

    /// `+(a) = a`
    /// `*(a) = a`
    Unwrap,

    /// `a+(b+c) = a+b+c`
    /// `a*(b*c) = a*b*c`
    Flatten,

    /// `a+2+b+3 = 5+a+b`
    /// `2*a*5 = 10*a`
    CollapseConstants,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `1^a = 1`
    PowerOneLeft,
}
