mod cli;
mod runner;


use std::process::ExitCode;

use clap::Parser as _;
use cli::{Cli, Command};
use miniscript_diagnostic::termcolor::{ColorChoice, StandardStream};
use miniscript_engine::StdoutSink;
use runner::{load_source, Runner};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("errors while running script")]
    HadErrors,
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            input,
            source,
            emit,
        } => {
            let source = load_source(input, source)?;
            let mut runner = Runner::new(StandardStream::stderr(ColorChoice::Auto));

            match emit {
                Some(emit) => runner.emit(&source, emit, &mut std::io::stdout().lock()),
                None => runner.execute(&source, StdoutSink::default()),
            }
        }
    }
}
