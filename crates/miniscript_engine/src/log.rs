use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use miniscript_diagnostic::termcolor::{ColorChoice, StandardStream};

/// Where the built-in `print` function sends its output.
pub trait LogSink {
    fn log(&mut self, message: &str);
}

impl LogSink for Vec<String> {
    fn log(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

impl<S: LogSink> LogSink for Rc<RefCell<S>> {
    fn log(&mut self, message: &str) {
        self.borrow_mut().log(message);
    }
}

pub struct StdoutSink {
    pub stream: StandardStream,
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self {
            stream: StandardStream::stdout(ColorChoice::Auto),
        }
    }
}

impl LogSink for StdoutSink {
    fn log(&mut self, message: &str) {
        // a closed stdout is not a script error
        let _ = writeln!(self.stream, "{message}");
    }
}
