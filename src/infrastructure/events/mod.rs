//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable sink lives in `ui::console`.

mod json;

pub use json::JsonEventSink;
