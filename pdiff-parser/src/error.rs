//! Error kinds produced while parsing a formula.

use ariadne::Fmt;
use pdiff_attrs::ErrorKind;
use pdiff_error::EXPR;

/// A character that cannot start any token.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", found),
    label = "this character is not part of any formula",
    help = "formulas use numbers, names, parentheses and the operators `+`, `-`, `*` and `^`",
)]
pub struct UnexpectedCharacter {
    /// The character that was found.
    pub found: String,
}

/// The formula ended where an operand was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of formula",
    label = format!("add an {} here", "operand".fg(EXPR)),
)]
pub struct UnexpectedEof;

/// A token that cannot start an operand.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected an operand, found {}", found),
    label = "expected a number, a name, a function or `(` here",
)]
pub struct ExpectedOperand {
    /// Description of the token that was found.
    pub found: String,
}

/// A complete formula was read, but tokens remain.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of formula",
    label = "I could not understand the rest of the formula",
    help = "operators must be written explicitly, as in `2*x` instead of `2 x`",
)]
pub struct ExpectedEof;

/// An opening parenthesis without its closing parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    label = "this parenthesis is never closed",
    help = "add a closing parenthesis `)` somewhere after this",
)]
pub struct UnclosedParenthesis;

/// A closing parenthesis without an opening parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unmatched parenthesis",
    label = "this parenthesis closes nothing",
    help = "add an opening parenthesis `(` somewhere before this",
)]
pub struct UnmatchedParenthesis;

/// A pair of parentheses with nothing inside.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "missing expression inside parentheses", label = "add an expression here")]
pub struct EmptyParenthesis;
