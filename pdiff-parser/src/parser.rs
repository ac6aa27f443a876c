use pdiff_error::Error;
use std::ops::Range;
use super::{
    ast::{BinOp, Expr, ExprKind, Func, NEG_PRECEDENCE},
    error::*,
    lexer::{lex, Token},
};

/// Parses a whole formula into its syntax tree.
pub fn parse(source: &str) -> Result<Expr, Error> {
    let mut parser = Parser {
        tokens: lex(source)?,
        cursor: 0,
        eof: source.len(),
    };
    let expr = parser.expr(0)?;
    parser.finish()?;
    Ok(expr)
}

/// A precedence climber over the tokens of one formula.
struct Parser {
    tokens: Vec<(Token, Range<usize>)>,
    cursor: usize,

    /// The byte offset of the end of the source.
    eof: usize,
}

impl Parser {
    fn peek(&self) -> Option<&(Token, Range<usize>)> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Result<(Token, Range<usize>), Error> {
        let token = self.tokens.get(self.cursor)
            .cloned()
            .ok_or_else(|| Error::new(vec![self.eof..self.eof], UnexpectedEof))?;
        self.cursor += 1;
        Ok(token)
    }

    fn peek_op(&self) -> Option<BinOp> {
        match self.peek()? {
            (Token::Plus, _) => Some(BinOp::Add),
            (Token::Minus, _) => Some(BinOp::Sub),
            (Token::Star, _) => Some(BinOp::Mul),
            (Token::Caret, _) => Some(BinOp::Pow),
            _ => None,
        }
    }

    /// Parses binary operations whose operators bind at least as tight as `min_precedence`.
    fn expr(&mut self, min_precedence: u8) -> Result<Expr, Error> {
        let mut lhs = self.prefix()?;
        while let Some(op) = self.peek_op() {
            if op.precedence() < min_precedence {
                break;
            }
            self.cursor += 1;

            let rhs_precedence = if op.is_right_associative() {
                op.precedence()
            } else {
                op.precedence() + 1
            };
            let rhs = self.expr(rhs_precedence)?;
            let span = lhs.span.start..rhs.span.end;
            lhs = Expr::new(ExprKind::Binary(op, Box::new(lhs), Box::new(rhs)), span);
        }
        Ok(lhs)
    }

    /// Parses an operand: a literal, a name, a parenthesized expression, a negation or a function
    /// call.
    fn prefix(&mut self) -> Result<Expr, Error> {
        let (token, span) = self.next()?;
        match token {
            Token::Number(n) => Ok(Expr::new(ExprKind::Number(n), span)),
            Token::Minus => {
                if let Some((Token::Number(n), number_span)) = self.peek() {
                    if number_span.start == span.end {
                        let literal = Expr::new(ExprKind::Number(-n), span.start..number_span.end);
                        self.cursor += 1;
                        return Ok(literal);
                    }
                }

                let operand = self.expr(NEG_PRECEDENCE)?;
                let span = span.start..operand.span.end;
                Ok(Expr::new(ExprKind::Neg(Box::new(operand)), span))
            },
            Token::Name(name) => match Func::from_name(&name) {
                Some(func) if self.starts_argument(&span) => {
                    let arg = self.prefix()?;
                    let span = span.start..arg.span.end;
                    Ok(Expr::new(ExprKind::Call(func, Box::new(arg)), span))
                },
                _ => Ok(Expr::new(ExprKind::Name(name), span)),
            },
            Token::OpenParen => self.paren(span),
            found => Err(Error::new(vec![span], ExpectedOperand { found: found.to_string() })),
        }
    }

    /// A function name is a call only when its argument is separated from it by whitespace or
    /// starts with `(`. Otherwise it is a variable, as in `ln+1`.
    fn starts_argument(&self, name_span: &Range<usize>) -> bool {
        match self.peek() {
            Some((Token::OpenParen, _)) => true,
            Some((Token::CloseParen, _)) | None => false,
            Some((_, span)) => span.start > name_span.end,
        }
    }

    /// Parses the rest of a parenthesized expression, after its opening parenthesis.
    fn paren(&mut self, open: Range<usize>) -> Result<Expr, Error> {
        if let Some((Token::CloseParen, close)) = self.peek() {
            return Err(Error::new(vec![open.start..close.end], EmptyParenthesis));
        }

        let inner = self.expr(0)?;
        match self.peek() {
            Some((Token::CloseParen, close)) => {
                let span = open.start..close.end;
                self.cursor += 1;
                Ok(Expr::new(ExprKind::Paren(Box::new(inner)), span))
            },
            _ => Err(Error::new(vec![open], UnclosedParenthesis)),
        }
    }

    /// Fails if any tokens remain after the formula.
    fn finish(&self) -> Result<(), Error> {
        match self.peek() {
            None => Ok(()),
            Some((Token::CloseParen, span)) => {
                Err(Error::new(vec![span.clone()], UnmatchedParenthesis))
            },
            Some((_, span)) => Err(Error::new(vec![span.start..self.eof], ExpectedEof)),
        }
    }
}
