//! Terminal presentation: progress sink, renderings, icons and colors

pub mod console;
pub mod icon;
pub mod render;
pub mod terminal;
pub mod theme;

pub use console::ConsoleEventSink;
pub use icon::Icon;
pub use terminal::{detect_capabilities, TerminalCapabilities};
