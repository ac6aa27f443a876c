//! The abstract syntax tree produced by [`parse`](crate::parse).

use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of the syntax tree, along with the region of the source it was parsed from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expr {
    /// What the node is.
    pub kind: ExprKind,

    /// The region of the source code that this node was parsed from.
    pub span: Range<usize>,
}

impl Expr {
    /// Creates a node covering the given span.
    pub fn new(kind: ExprKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

/// The different kinds of nodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExprKind {
    /// A number literal. Negative literals come from a `-` written directly against the digits.
    Number(f64),

    /// A variable name, such as `x` or `Var_2`.
    Name(String),

    /// An expression in parentheses.
    Paren(Box<Expr>),

    /// A negated expression, such as `-x`.
    Neg(Box<Expr>),

    /// A function applied to its argument, such as `sin x` or `ln(x + 1)`.
    Call(Func, Box<Expr>),

    /// A binary operation.
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

/// The functions that can be called in a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    Ln,
    Sin,
    Cos,
}

impl Func {
    /// Returns the function with the given name, if there is one.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ln" => Some(Self::Ln),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            _ => None,
        }
    }

    /// The name of the function as written in a formula.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ln => "ln",
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The binary operators, from loosest to tightest binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Pow,
}

/// The precedence of prefix negation. It binds tighter than `*` but looser than `^`, so `-x^2`
/// is `-(x^2)`.
pub const NEG_PRECEDENCE: u8 = 3;

impl BinOp {
    /// The precedence of the operator. Operators with higher precedence bind tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul => 2,
            Self::Pow => 4,
        }
    }

    /// Whether `a op b op c` groups as `a op (b op c)`.
    pub fn is_right_associative(&self) -> bool {
        matches!(self, Self::Pow)
    }

    /// The symbol of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Pow => "^",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(n) => write!(f, "{}", n),
            ExprKind::Name(name) => f.write_str(name),
            ExprKind::Paren(inner) => write!(f, "({})", inner),
            ExprKind::Neg(operand) => write!(f, "-{}", operand),
            ExprKind::Call(func, arg) => write!(f, "{} {}", func, arg),
            ExprKind::Binary(op, lhs, rhs) => write!(f, "{} {} {}", lhs, op, rhs),
        }
    }
}
