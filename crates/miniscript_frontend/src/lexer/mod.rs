
use std::str::Chars;

use miniscript_diagnostic::span::Span;
use miniscript_utils::peek::Peek;

use crate::token::*;

/// Produces tokens on demand. Never fails: anything it does not recognise
/// becomes a one character symbol.
#[derive(Clone)]
pub struct Lexer<'src> {
    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            all: source,
            chars: source.chars(),

            token_start: 0,
        }
    }

    /// Returns [`TokenKind::EndOfInput`] forever once the source is exhausted.
    pub fn next_token(&mut self) -> Token<'src> {
        self.chars.eat_while(|ch| ch.is_whitespace());
        self.token_start = self.byte_pos();

        let kind = match self.chars.next() {
            None => TokenKind::EndOfInput,

            Some(ch) if ch.is_alphabetic() => self.lex_alpha(),
            Some(ch) if ch.is_ascii_digit() => self.lex_number(),
            Some(quote @ ('"' | '\'')) => return self.lex_string(quote),

            Some(ch) => TokenKind::Symbol(ch),
        };

        self.token(kind, self.token_start, self.byte_pos())
    }

    fn lex_alpha(&mut self) -> TokenKind {
        self.chars.eat_while(|&ch| ch.is_alphanumeric() || ch == '_');

        match Keyword::from_ident(&self.all[self.token_start..self.byte_pos()]) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier,
        }
    }

    // dots are not validated here, `1.2.3` fails when converted to a number
    fn lex_number(&mut self) -> TokenKind {
        self.chars.eat_while(|&ch| ch.is_ascii_digit() || ch == '.');
        TokenKind::Number
    }

    fn lex_string(&mut self, quote: char) -> Token<'src> {
        let contents_start = self.byte_pos();
        self.chars.eat_while(|&ch| ch != quote);
        let contents_end = self.byte_pos();

        // unterminated strings run to the end of input
        self.chars.eat(quote);

        Token {
            kind: TokenKind::String,
            text: &self.all[contents_start..contents_end],
            span: Span::new(self.token_start, self.byte_pos()),
        }
    }

    fn token(&self, kind: TokenKind, start: usize, end: usize) -> Token<'src> {
        Token {
            kind,
            text: &self.all[start..end],
            span: Span::new(start, end),
        }
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_end()).then_some(token)
    }
}
