use miniscript_diagnostic::span::Span;

use crate::NodeCopy;

#[derive(NodeCopy!)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Source text of the token. For strings this excludes the quotes.
    pub text: &'src str,
    pub span: Span,
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier,
    Number,
    /// Lexed but not yet part of the grammar.
    String,
    Symbol(char),
    EndOfInput,
}

#[derive(NodeCopy!)]
pub enum Keyword {
    Function,
    Var,
}

impl Keyword {
    pub fn from_ident(s: &str) -> Option<Self> {
        match s {
            "function" => Some(Keyword::Function),
            "var" => Some(Keyword::Var),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Function => "function",
            Keyword::Var => "var",
        }
    }
}

impl Token<'_> {
    pub fn is_symbol(&self, ch: char) -> bool {
        self.kind == TokenKind::Symbol(ch)
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// How the token is named in error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfInput => "end of input".to_owned(),
            TokenKind::String => format!("string {:?}", self.text),
            _ => format!("`{}`", self.text),
        }
    }
}
