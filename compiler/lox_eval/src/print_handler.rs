//! Destination for `print` output.
//!
//! The CLI prints to stdout; tests and embedders capture into a buffer;
//! benchmarks discard. A closed enum keeps the per-`print` call a plain
//! match.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Where `print` statements write.
pub enum PrintHandlerImpl {
    /// Line-buffered stdout. Write failures (closed pipe) are ignored.
    Stdout,
    /// Captured text, one `\n`-terminated line per `print`.
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandlerImpl {
    /// Write `msg` followed by a newline.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => {
                let _ = writeln!(std::io::stdout().lock(), "{msg}");
            }
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Captured text so far; empty unless this is a buffer.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Push pending stdout output, so it lands before a following prompt
    /// or diagnostic.
    pub fn flush(&self) {
        if let Self::Stdout = self {
            let _ = std::io::stdout().flush();
        }
    }
}

/// Print handler shared between the interpreter and whoever reads it.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

/// A handler that captures output for [`PrintHandlerImpl::get_output`].
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
