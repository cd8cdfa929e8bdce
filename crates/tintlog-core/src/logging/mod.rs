//! Loggers and their sinks

mod traits;
mod console;
mod file;
mod category;

pub use traits::{BoxedLogger, Logger, LoggerExt, SharedLogger};
pub use console::{default_console, ConsoleSink, MemoryConsole, SharedConsole, StdConsole};
#[cfg(target_arch = "wasm32")]
pub use console::BrowserConsole;
pub use file::FileSink;
pub use category::{CategoryLogger, LoggerContext};
