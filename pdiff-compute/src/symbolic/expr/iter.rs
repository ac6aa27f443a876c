use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression is the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        self.last_visited.map_or(false, |last_visited| std::ptr::eq(last_visited, expr))
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            let Expr::Operation(_, operands) = expr else {
                return self.visit();
            };

            match operands.last() {
                // all operands have been visited, or there are none
                Some(last) if !self.is_last_visited(last) => self.stack.extend(operands.iter().rev()),
                _ => return self.visit(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn post_order() {
        // ln(x) * (y + 2)
        let expr = Expr::mul(vec![
            Expr::ln(Expr::var("x")),
            Expr::add(vec![Expr::var("y"), Expr::Number(2.0)]),
        ]);
        let visited = expr.post_order_iter().map(|expr| expr.to_string()).collect::<Vec<_>>();
        assert_eq!(visited, vec!["x", "ln x", "y", "2", "y + 2", "ln x * (y + 2)"]);
    }

    #[test]
    fn leaf_only() {
        let expr = Expr::var("x");
        assert_eq!(expr.post_order_iter().count(), 1);
    }
}
