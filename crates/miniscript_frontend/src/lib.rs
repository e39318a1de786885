#[macro_use]
extern crate macro_rules_attribute;

mod lexer;
mod parser;

pub mod ast;
pub mod token;

pub use lexer::Lexer;
pub use parser::{ParseError, ParseErrorKind, ParseResult, Parser};

use ast::FunctionDef;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)];
}

pub fn lex(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

pub fn parse(source: &str) -> ParseResult<FunctionDef> {
    Parser::new(source).parse_function()
}
