use miniscript_diagnostic::span::Span;
use miniscript_diagnostic::{Diagnostic, IntoDiagnostic, Snippet};
use miniscript_frontend::ParseError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub span: Span,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    #[error("unknown variable `{0}`")]
    UnknownVariable(String),
}

impl IntoDiagnostic for RuntimeError {
    fn into_diagnostic(self) -> Diagnostic {
        let label = match &self.kind {
            RuntimeErrorKind::UnknownFunction(_) => "no native function with this name",
            RuntimeErrorKind::UnknownVariable(_) => "not assigned before this point",
        };

        Diagnostic::error()
            .with_message(self.kind.to_string())
            .with_snippet(Snippet::new(label, self.span))
    }
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),

    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

impl EngineError {
    pub fn span(&self) -> Span {
        match self {
            EngineError::Parse(err) => err.span,
            EngineError::Runtime(err) => err.span,
        }
    }
}

impl IntoDiagnostic for EngineError {
    fn into_diagnostic(self) -> Diagnostic {
        match self {
            EngineError::Parse(err) => err.into_diagnostic(),
            EngineError::Runtime(err) => err.into_diagnostic(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
