mod render;
pub mod sources;
pub mod span;

pub use termcolor;
use termcolor::{Color, ColorSpec};

use self::span::Span;

/// An error report: a message and the snippets of source it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub message: Option<String>,
    pub snippets: Vec<Snippet>,
}

impl Diagnostic {
    pub fn error() -> Self {
        Self {
            message: None,
            snippets: vec![],
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_snippet(mut self, snippet: Snippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub label: String,
    pub span: Span,
}

impl Snippet {
    pub fn new(label: impl Into<String>, span: Span) -> Self {
        Self {
            label: label.into(),
            span,
        }
    }
}

pub trait IntoDiagnostic {
    fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
    fn into_diagnostic(self) -> Diagnostic {
        self
    }
}

#[derive(Debug)]
pub struct Config {
    pub error_color: ColorSpec,
    pub subtle: ColorSpec,

    pub gutter: &'static str,

    pub underline: &'static str,
    pub underline_after: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        let mut error_color = ColorSpec::new();
        error_color.set_fg(Some(Color::Red));
        error_color.set_bold(true);

        let mut subtle = ColorSpec::new();
        subtle.set_italic(true);
        subtle.set_dimmed(true);

        Self {
            error_color,
            subtle,

            gutter: "│",

            underline: "^",
            underline_after: "  ",
        }
    }
}

impl Config {
    /// Plain ASCII output, for logs and tests.
    pub fn ascii() -> Self {
        Self {
            gutter: "|",
            ..Self::default()
        }
    }
}
