//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process/` - Child process execution (`SystemCommandRunner`)
//! - `fs/` - Local file system checks (`LocalFs`)
//! - `events/` - Machine-readable event sinks (`JsonEventSink`)

pub mod events;
pub mod fs;
pub mod process;

pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use process::{OutputMode, SystemCommandRunner};
