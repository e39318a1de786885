use std::cell::RefCell;
use std::fmt;

use crate::error::EngineResult;
use crate::interpreter::{Environment, Interpreter, NativeTable};
use crate::log::{LogSink, StdoutSink};

/// Owns the native functions and runs scripts against them.
///
/// Registration takes `&mut self` and execution `&self`, so the table can
/// never change while a script is running. Every execution starts from an
/// empty environment; nothing but the native table is shared between runs.
pub struct Engine {
    natives: NativeTable,
}

impl Engine {
    /// An engine whose `print` writes to stdout.
    pub fn new() -> Self {
        Self::with_log_sink(StdoutSink::default())
    }

    /// An engine whose `print` writes its first argument to `sink`.
    pub fn with_log_sink(sink: impl LogSink + 'static) -> Self {
        let sink = RefCell::new(sink);

        let mut engine = Self::empty();
        engine.register_function("print", move |args| {
            if let Some(value) = args.first() {
                sink.borrow_mut().log(&value.to_string());
            }
        });

        engine
    }

    /// An engine without any native functions, not even `print`.
    pub fn empty() -> Self {
        Self {
            natives: NativeTable::default(),
        }
    }

    /// Replaces any function already registered under `name`.
    pub fn register_function(
        &mut self,
        name: impl Into<String>,
        func: impl Fn(&[f64]) + 'static,
    ) {
        self.natives.insert(name.into(), Box::new(func));
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.natives.contains_key(name)
    }

    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.natives.keys().map(String::as_str)
    }

    pub fn execute(&self, script: &str) -> EngineResult<()> {
        self.run(script).map(drop)
    }

    /// Like [`Engine::execute`], but hands back the variables the script
    /// assigned.
    pub fn run(&self, script: &str) -> EngineResult<Environment> {
        let func = miniscript_frontend::parse(script)?;

        let mut interpreter = Interpreter::new(&self.natives);
        interpreter.execute_function(func)?;

        Ok(interpreter.into_env())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.function_names().collect();
        names.sort_unstable();

        f.debug_struct("Engine").field("natives", &names).finish()
    }
}
