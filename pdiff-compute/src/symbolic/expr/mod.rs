//! The expression tree that every symbolic and numerical operation works on.
//!
//! The [`Expr`](pdiff_parser::ast::Expr) type from `pdiff_parser` keeps every detail of the
//! source: spans, parentheses and the binary shape of `a + b + c`. That is convenient for
//! reporting errors, but not for algebra. This module defines a separate [`Expr`], a closed sum
//! of numbers, variables and operations, where [`Op::Add`] and [`Op::Multiply`] hold any number
//! of operands.
//!
//! Conversion from the AST is structural: it drops spans and parentheses, turns negation `-a`
//! into `-1 * a`, and keeps one operation node per binary operator. Flattening `a + (b + c)` into
//! a single sum is left to the [simplifier](super::simplify).
//!
//! Equality is structural and order-sensitive: `x + y` and `y + x` are different expressions.
//! Trees are never shared; every transformation returns a new tree.

mod iter;

use iter::ExprIter;
use pdiff_parser::ast::{BinOp, Expr as AstExpr, ExprKind, Func};
use std::fmt::{self, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operator of an [`Expr::Operation`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Op {
    /// The sum of two or more operands.
    Add,

    /// The first operand minus the second.
    Subtract,

    /// The product of two or more operands.
    Multiply,

    /// The first operand raised to the second.
    Power,

    /// The natural logarithm of the only operand.
    Ln,

    /// The sine of the only operand, in radians.
    Sin,

    /// The cosine of the only operand, in radians.
    Cos,
}

impl Op {
    /// Returns the exact number of operands this operator takes, or [`None`] if it takes any
    /// number of operands.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Op::Add | Op::Multiply => None,
            Op::Subtract | Op::Power => Some(2),
            Op::Ln | Op::Sin | Op::Cos => Some(1),
        }
    }

    /// Returns true if the operator is a function applied to a single operand.
    pub fn is_func(&self) -> bool {
        matches!(self, Op::Ln | Op::Sin | Op::Cos)
    }

    /// Returns the symbol or keyword used to write the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Multiply => "*",
            Op::Power => "^",
            Op::Ln => "ln",
            Op::Sin => "sin",
            Op::Cos => "cos",
        }
    }

    /// Returns how tightly the operator binds when written out. Higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Op::Add | Op::Subtract => 1,
            Op::Multiply => 2,
            Op::Power => 3,
            Op::Ln | Op::Sin | Op::Cos => 4,
        }
    }
}

impl From<Func> for Op {
    fn from(func: Func) -> Self {
        match func {
            Func::Ln => Op::Ln,
            Func::Sin => Op::Sin,
            Func::Cos => Op::Cos,
        }
    }
}

/// A mathematical expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A constant.
    Number(f64),

    /// A named variable, such as `x` or `Var_1`.
    Variable(String),

    /// An operator applied to an ordered list of operands.
    Operation(Op, Vec<Expr>),
}

impl Expr {
    /// Creates a variable with the given name.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates the sum of the given terms.
    pub fn add(terms: Vec<Expr>) -> Self {
        Self::Operation(Op::Add, terms)
    }

    /// Creates `lhs - rhs`.
    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::Operation(Op::Subtract, vec![lhs, rhs])
    }

    /// Creates the product of the given factors.
    pub fn mul(factors: Vec<Expr>) -> Self {
        Self::Operation(Op::Multiply, factors)
    }

    /// Creates `base ^ exp`.
    pub fn pow(base: Expr, exp: Expr) -> Self {
        Self::Operation(Op::Power, vec![base, exp])
    }

    /// Creates `ln arg`.
    pub fn ln(arg: Expr) -> Self {
        Self::Operation(Op::Ln, vec![arg])
    }

    /// Creates `sin arg`.
    pub fn sin(arg: Expr) -> Self {
        Self::Operation(Op::Sin, vec![arg])
    }

    /// Creates `cos arg`.
    pub fn cos(arg: Expr) -> Self {
        Self::Operation(Op::Cos, vec![arg])
    }

    /// If the expression is a [`Expr::Number`], returns the contained number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if the expression is the given number.
    pub fn is_number(&self, value: f64) -> bool {
        self.as_number() == Some(value)
    }

    /// If the expression is a [`Expr::Variable`], returns the name of the variable.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the operands of the expression. Numbers and variables have none.
    pub fn operands(&self) -> &[Expr] {
        match self {
            Self::Operation(_, operands) => operands,
            _ => &[],
        }
    }

    /// Returns true if the given variable occurs anywhere in the expression.
    pub fn depends_on(&self, var: &str) -> bool {
        self.post_order_iter().any(|expr| expr.as_variable() == Some(var))
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`Op::Add`] with zero / one term, or an [`Op::Multiply`]
    /// with zero / one factor. This function checks for these cases and simplifies the expression
    /// into the single term / factor, or the number 0 or 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Operation(op @ (Op::Add | Op::Multiply), mut operands) => match operands.len() {
                0 if op == Op::Add => Self::Number(0.0),
                0 => Self::Number(1.0),
                1 => operands.remove(0),
                _ => Self::Operation(op, operands),
            },
            _ => self,
        }
    }

    /// Returns how tightly the expression binds when written out. Numbers and variables bind
    /// tightest.
    fn precedence(&self) -> u8 {
        match self {
            Self::Operation(op, _) => op.precedence(),
            _ => u8::MAX,
        }
    }
}

/// Writes the operand, wrapped in parentheses if requested.
fn fmt_operand(f: &mut fmt::Formatter<'_>, operand: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

/// Writes the expression in the syntax accepted by the parser, adding parentheses only where the
/// precedence or associativity of the operators requires them.
///
/// Parsing the output gives back the same tree as long as every number is finite. `NaN` and the
/// infinities are written as `NaN`, `inf` and `-inf`, which the parser reads as variables.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Operation(op, operands) if op.is_func() => {
                f.write_str(op.symbol())?;
                for operand in operands {
                    f.write_char(' ')?;
                    fmt_operand(f, operand, operand.precedence() < op.precedence())?;
                }
                Ok(())
            },
            Self::Operation(op, operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", op.symbol())?;
                    }

                    let parens = match (op, i) {
                        // right-associative; `-2 ^ x` would read as a negative literal base
                        (Op::Power, 0) => operand.precedence() <= op.precedence()
                            || operand.as_number().map_or(false, |n| n.is_sign_negative()),
                        (Op::Power, _) => operand.precedence() < op.precedence(),
                        // left-associative
                        (_, 0) => operand.precedence() < op.precedence(),
                        _ => operand.precedence() <= op.precedence(),
                    };
                    fmt_operand(f, operand, parens)?;
                }
                Ok(())
            },
        }
    }
}

impl From<AstExpr> for Expr {
    fn from(expr: AstExpr) -> Self {
        match expr.kind {
            ExprKind::Number(n) => Self::Number(n),
            ExprKind::Name(name) => Self::Variable(name),
            ExprKind::Paren(inner) => Self::from(*inner),
            ExprKind::Call(func, arg) => Self::Operation(func.into(), vec![Self::from(*arg)]),
            // treat this as -1 * operand
            ExprKind::Neg(operand) => Self::mul(vec![Self::Number(-1.0), Self::from(*operand)]),
            ExprKind::Binary(op, lhs, rhs) => {
                let lhs = Self::from(*lhs);
                let rhs = Self::from(*rhs);
                match op {
                    BinOp::Add => Self::add(vec![lhs, rhs]),
                    BinOp::Sub => Self::sub(lhs, rhs),
                    BinOp::Mul => Self::mul(vec![lhs, rhs]),
                    BinOp::Pow => Self::pow(lhs, rhs),
                }
            },
        }
    }
}
