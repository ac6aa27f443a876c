//! Splits a formula into tokens.

use logos::Logos;
use pdiff_error::Error;
use std::{fmt, ops::Range};
use super::error::UnexpectedCharacter;

/// A token of the formula language. Whitespace is skipped, but the spans of the remaining tokens
/// still tell whether two tokens touched in the source.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("^")]
    Caret,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+(\.[0-9]*)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Name(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => f.write_str("`+`"),
            Self::Minus => f.write_str("`-`"),
            Self::Star => f.write_str("`*`"),
            Self::Caret => f.write_str("`^`"),
            Self::OpenParen => f.write_str("`(`"),
            Self::CloseParen => f.write_str("`)`"),
            Self::Number(n) => write!(f, "the number `{}`", n),
            Self::Name(name) => write!(f, "the name `{}`", name),
        }
    }
}

/// Tokenizes the whole source, failing at the first character that starts no token.
pub fn lex(source: &str) -> Result<Vec<(Token, Range<usize>)>, Error> {
    Token::lexer(source)
        .spanned()
        .map(|(token, span)| match token {
            Ok(token) => Ok((token, span)),
            Err(()) => Err(Error::new(vec![span.clone()], UnexpectedCharacter {
                found: source[span].to_owned(),
            })),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        lex(source).unwrap().into_iter().map(|(token, _)| token).collect()
    }

    #[test]
    fn nested_product() {
        assert_eq!(tokens("(5*(x*y))"), vec![
            Token::OpenParen,
            Token::Number(5.0),
            Token::Star,
            Token::OpenParen,
            Token::Name(String::from("x")),
            Token::Star,
            Token::Name(String::from("y")),
            Token::CloseParen,
            Token::CloseParen,
        ]);
    }

    #[test]
    fn names_and_decimals() {
        assert_eq!(tokens("Var_1^ln x2 - 0.50"), vec![
            Token::Name(String::from("Var_1")),
            Token::Caret,
            Token::Name(String::from("ln")),
            Token::Name(String::from("x2")),
            Token::Minus,
            Token::Number(0.5),
        ]);
    }

    #[test]
    fn function_prefix_is_part_of_name() {
        assert_eq!(tokens("sinx lnln"), vec![
            Token::Name(String::from("sinx")),
            Token::Name(String::from("lnln")),
        ]);
    }

    #[test]
    fn spans_skip_whitespace() {
        let spans = lex(" x ^ -1").unwrap()
            .into_iter()
            .map(|(_, span)| span)
            .collect::<Vec<_>>();
        assert_eq!(spans, vec![1..2, 3..4, 5..6, 6..7]);
    }

    #[test]
    fn unknown_character() {
        let err = lex("x/$").unwrap_err();
        assert_eq!(err.spans, vec![1..2]);
        assert_eq!(err.to_string(), "unexpected character `/`");
    }
}
