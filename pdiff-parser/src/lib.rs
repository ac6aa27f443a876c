//! Parser for the formula language of `pdiff`.
//!
//! Formulas are arithmetic expressions over named variables, built from numbers, the binary
//! operators `+`, `-`, `*` and `^`, parentheses, and the prefix functions `ln`, `sin` and `cos`.
//! The [`lexer`] turns the source into tokens, and [`parse`] builds a span-carrying
//! [`ast::Expr`] from them.
//!
//! ```
//! let expr = pdiff_parser::parse("y+2*z^x^sin y*z").unwrap();
//! assert_eq!(expr.to_string(), "y + 2 * z ^ x ^ sin y * z");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
mod parser;

pub use parser::parse;
