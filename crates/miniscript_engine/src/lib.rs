//! An embeddable interpreter for a tiny scripting language.
//!
//! A script is a single function block of variable assignments and calls into
//! functions registered by the host:
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use miniscript_engine::Engine;
//!
//! let total = Rc::new(Cell::new(0.0));
//!
//! let mut engine = Engine::new();
//! engine.register_function("Report", {
//!     let total = total.clone();
//!     move |args: &[f64]| total.set(args.iter().sum())
//! });
//!
//! engine
//!     .execute("function doSomething() { var x = 1 + 2 * 3; Report(x, 1); }")
//!     .unwrap();
//!
//! assert_eq!(total.get(), 8.0);
//! ```

mod engine;
mod error;
mod interpreter;
mod log;

pub use engine::Engine;
pub use error::{EngineError, EngineResult, RuntimeError, RuntimeErrorKind, RuntimeResult};
pub use interpreter::{Environment, Interpreter, NativeFn, NativeTable};
pub use log::{LogSink, StdoutSink};

pub use miniscript_frontend::{ParseError, ParseErrorKind};
