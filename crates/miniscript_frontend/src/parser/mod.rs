
mod expr;

use miniscript_diagnostic::span::Span;
use miniscript_diagnostic::{Diagnostic, IntoDiagnostic, Snippet};

use crate::ast::*;
use crate::lexer::Lexer;
use crate::token::{Keyword, Token, TokenKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: String },

    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}

impl IntoDiagnostic for ParseError {
    fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error()
            .with_message("syntax error")
            .with_snippet(Snippet::new(self.kind.to_string(), self.span))
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive descent parser with a single token of lookahead.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    cur: Token<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let cur = lexer.next_token();

        Self { lexer, cur }
    }

    /// Parses `function name() { ... }`, which must make up the whole source.
    pub fn parse_function(mut self) -> ParseResult<FunctionDef> {
        self.expect_keyword(Keyword::Function)?;
        let name = self.parse_ident()?;

        self.expect_symbol('(')?;
        self.expect_symbol(')')?;
        self.expect_symbol('{')?;

        let mut body = vec![];
        while !self.cur.is_symbol('}') && !self.cur.is_end() {
            body.push(self.parse_statement()?);
        }

        self.expect_symbol('}')?;

        if !self.cur.is_end() {
            return Err(self.error_expected("end of input"));
        }

        Ok(FunctionDef { name, body })
    }

    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.cur.kind {
            TokenKind::Keyword(Keyword::Var) => {
                self.advance();

                let name = self.parse_ident()?;
                self.expect_symbol('=')?;
                let expr = self.parse_expr()?;
                self.expect_symbol(';')?;

                Ok(Stmt::VarAssign { name, expr })
            }

            TokenKind::Identifier => {
                let func = self.parse_ident()?;
                self.expect_symbol('(')?;

                let mut args = vec![];
                if !self.cur.is_symbol(')') {
                    args.push(self.parse_expr()?);
                    while self.eat_symbol(',') {
                        args.push(self.parse_expr()?);
                    }
                }

                self.expect_symbol(')')?;
                self.expect_symbol(';')?;

                Ok(Stmt::Call { func, args })
            }

            _ => Err(self.error_expected("a statement")),
        }
    }

    fn parse_ident(&mut self) -> ParseResult<Ident> {
        match self.cur.kind {
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Ident::new(token.text, token.span))
            }
            _ => Err(self.error_expected("an identifier")),
        }
    }

    /// Moves to the next token, returning the one that was current.
    fn advance(&mut self) -> Token<'src> {
        std::mem::replace(&mut self.cur, self.lexer.next_token())
    }

    fn expect_keyword(&mut self, kw: Keyword) -> ParseResult<Token<'src>> {
        if self.cur.kind == TokenKind::Keyword(kw) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(format!("keyword `{}`", kw.as_str())))
        }
    }

    fn expect_symbol(&mut self, ch: char) -> ParseResult<Token<'src>> {
        if self.cur.is_symbol(ch) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(format!("`{ch}`")))
        }
    }

    fn eat_symbol(&mut self, ch: char) -> bool {
        let matched = self.cur.is_symbol(ch);
        if matched {
            self.advance();
        }
        matched
    }

    fn error_expected(&self, expected: impl Into<String>) -> ParseError {
        ParseError {
            kind: ParseErrorKind::Expected {
                expected: expected.into(),
                found: self.cur.describe(),
            },
            span: self.cur.span,
        }
    }
}
