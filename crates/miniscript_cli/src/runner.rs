use std::io::{self, Write};

use miniscript_diagnostic::sources::{Cached, Source as _};
use miniscript_diagnostic::termcolor::WriteColor;
use miniscript_diagnostic::{Config, IntoDiagnostic};
use miniscript_engine::{Engine, LogSink};

use crate::cli::Emit;
use crate::{CliError, CliResult};

pub type ScriptSource = Cached<(String, String)>;

pub fn load_source(input: String, inline: bool) -> io::Result<ScriptSource> {
    let (name, source) = if inline {
        ("<unnamed>".to_owned(), input)
    } else {
        let source = std::fs::read_to_string(&input)?;
        (input, source)
    };

    Ok(Cached::new((name, source)))
}

pub struct Runner<E: WriteColor> {
    pub diagnostics: E,
    pub config: Config,
}

impl<E: WriteColor> Runner<E> {
    pub fn new(diagnostics: E) -> Self {
        Self {
            diagnostics,
            config: Config::default(),
        }
    }

    /// Executes the script with a default engine whose `print` writes to `sink`.
    pub fn execute(
        &mut self,
        source: &ScriptSource,
        sink: impl LogSink + 'static,
    ) -> CliResult<()> {
        let engine = Engine::with_log_sink(sink);

        engine
            .execute(source.source_str())
            .map_err(|err| self.report(err, source))
    }

    pub fn emit(
        &mut self,
        source: &ScriptSource,
        emit: Emit,
        out: &mut impl Write,
    ) -> CliResult<()> {
        match emit {
            Emit::Tokens => {
                for token in miniscript_frontend::lex(source.source_str()) {
                    let (line, col) = source
                        .byte_to_line_col(token.span.start)
                        .unwrap_or_default();

                    writeln!(out, "{line}:{col} {:?} {:?}", token.kind, token.text)?;
                }
            }

            Emit::Ast => {
                let func = miniscript_frontend::parse(source.source_str())
                    .map_err(|err| self.report(err, source))?;

                writeln!(out, "{func}")?;
            }
        }

        Ok(())
    }

    fn report(&mut self, err: impl IntoDiagnostic, source: &ScriptSource) -> CliError {
        let result = err
            .into_diagnostic()
            .write_to_stream(source, &self.config, &mut self.diagnostics);

        match result {
            Ok(()) => CliError::HadErrors,
            Err(err) => CliError::Io(err),
        }
    }
}
