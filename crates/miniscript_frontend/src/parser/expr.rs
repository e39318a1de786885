use super::{ParseError, ParseErrorKind, ParseResult, Parser};
use crate::ast::*;
use crate::token::TokenKind;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Prec {
    Term,
    Factor,
}

fn binop_prec(binop: BinOp) -> Prec {
    match binop {
        BinOp::Add | BinOp::Sub => Prec::Term,
        BinOp::Mul | BinOp::Div | BinOp::Mod => Prec::Factor,
    }
}

impl Parser<'_> {
    /// `term (("+" | "-") term)*`
    pub(super) fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Prec::Term, Self::parse_term)
    }

    /// `factor (("*" | "/" | "%") factor)*`
    fn parse_term(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Prec::Factor, Self::parse_factor)
    }

    fn parse_left_assoc(
        &mut self,
        prec: Prec,
        mut operand: impl FnMut(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut expr = operand(self)?;

        while let Some(op) = self.peek_bin_op(prec) {
            self.advance();

            let rhs = operand(self)?;

            let span = expr.span.union(rhs.span);
            expr = Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(expr),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(expr)
    }

    fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.cur.kind {
            TokenKind::Number => {
                let token = self.advance();
                let value = token.text.parse::<f64>().map_err(|_| ParseError {
                    kind: ParseErrorKind::InvalidNumber(token.text.to_owned()),
                    span: token.span,
                })?;

                Ok(Expr::new(ExprKind::Number(value), token.span))
            }

            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Expr::new(
                    ExprKind::Var(Ident::new(token.text, token.span)),
                    token.span,
                ))
            }

            TokenKind::Symbol('(') => {
                let open = self.advance();
                let expr = self.parse_expr()?;
                let close = self.expect_symbol(')')?;

                Ok(Expr::new(expr.kind, open.span.union(close.span)))
            }

            _ => Err(self.error_expected("an expression")),
        }
    }

    fn peek_bin_op(&self, prec: Prec) -> Option<BinOp> {
        let TokenKind::Symbol(ch) = self.cur.kind else {
            return None;
        };

        BinOp::from_symbol(ch).filter(|&op| binop_prec(op) == prec)
    }
}
