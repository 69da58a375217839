use crate::error::SyntaxError;

use super::expr::{BinOp, Expr};
use super::lexer::{Spanned, Token, tokenize};

/// Parse one sentence. Precedence from loosest to tightest is
/// `<=>`, `=>`, `|`, `&`, `!`; binary operators associate to the left.
///
/// Operators and open parentheses wait on an explicit stack, so nesting depth
/// costs heap, not call frames.
pub fn parse(line: &str) -> Result<Expr, SyntaxError> {
    let tokens = tokenize(line)?;
    let mut p = Parser::default();
    let mut want_operand = true;

    for Spanned { token, column } in tokens {
        if want_operand {
            match token {
                Token::Not => p.pending.push(Pending::Not),
                Token::LParen => p.pending.push(Pending::Paren(column)),
                Token::Atom(name) => {
                    p.operands.push(Expr::Atom(name));
                    want_operand = false;
                }
                other => {
                    return Err(SyntaxError::UnexpectedToken {
                        found: other.to_string(),
                        column,
                    });
                }
            }
            continue;
        }

        if let Some(op) = token_op(&token) {
            p.reduce_above(op.precedence())?;
            p.pending.push(Pending::Binary(op));
            want_operand = true;
        } else if token == Token::RParen {
            if !p.close_paren()? {
                return Err(SyntaxError::UnexpectedToken {
                    found: token.to_string(),
                    column,
                });
            }
        } else if p.open_parens() > 0 {
            return Err(SyntaxError::UnexpectedToken {
                found: token.to_string(),
                column,
            });
        } else {
            return Err(SyntaxError::TrailingInput {
                found: token.to_string(),
                column,
            });
        }
    }

    if want_operand {
        return Err(SyntaxError::UnexpectedEnd);
    }
    p.finish()
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    Not,
    Paren(usize),
    Binary(BinOp),
}

#[derive(Debug, Default)]
struct Parser {
    operands: Vec<Expr>,
    pending: Vec<Pending>,
}

impl Parser {
    fn open_parens(&self) -> usize {
        self.pending
            .iter()
            .filter(|p| matches!(p, Pending::Paren(_)))
            .count()
    }

    fn pop_operand(&mut self) -> Result<Expr, SyntaxError> {
        self.operands.pop().ok_or(SyntaxError::UnexpectedEnd)
    }

    fn apply(&mut self, pending: Pending) -> Result<(), SyntaxError> {
        let expr = match pending {
            Pending::Not => Expr::not(self.pop_operand()?),
            Pending::Binary(op) => {
                let right = self.pop_operand()?;
                let left = self.pop_operand()?;
                Expr::binary(op, left, right)
            }
            Pending::Paren(_) => return Ok(()),
        };
        self.operands.push(expr);
        Ok(())
    }

    /// Fold every pending `!` and every binary operator binding at least as
    /// tight as `precedence`, stopping at an open parenthesis.
    fn reduce_above(&mut self, precedence: u8) -> Result<(), SyntaxError> {
        while let Some(&top) = self.pending.last() {
            match top {
                Pending::Not => {}
                Pending::Binary(op) if op.precedence() >= precedence => {}
                _ => break,
            }
            self.pending.pop();
            self.apply(top)?;
        }
        Ok(())
    }

    /// Fold down to the innermost open parenthesis and drop it. False when no
    /// parenthesis is open.
    fn close_paren(&mut self) -> Result<bool, SyntaxError> {
        while let Some(top) = self.pending.pop() {
            if let Pending::Paren(_) = top {
                return Ok(true);
            }
            self.apply(top)?;
        }
        Ok(false)
    }

    fn finish(mut self) -> Result<Expr, SyntaxError> {
        while let Some(top) = self.pending.pop() {
            if let Pending::Paren(column) = top {
                return Err(SyntaxError::UnclosedParen { column });
            }
            self.apply(top)?;
        }
        self.pop_operand()
    }
}

fn token_op(tok: &Token) -> Option<BinOp> {
    match tok {
        Token::And => Some(BinOp::And),
        Token::Or => Some(BinOp::Or),
        Token::Implies => Some(BinOp::Implies),
        Token::Iff => Some(BinOp::Iff),
        _ => None,
    }
}
