//! Deploy Event Port
//!
//! Provides an observable interface for redeploy runs.
//! Enables console progress, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::StepKind;

/// Event emitted while a plan executes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Run started
    Started { workdir: PathBuf, step_count: usize },

    /// A step began
    StepStarted { index: usize, step: StepKind },

    /// A command is about to run
    CommandStarted { step: StepKind, command: String },

    /// A command exited successfully
    CommandSucceeded { step: StepKind, command: String },

    /// A tolerated command failed; the run continues
    CommandTolerated {
        step: StepKind,
        command: String,
        error: String,
    },

    /// A step finished without fatal errors
    StepCompleted { index: usize, step: StepKind },

    /// A step hit a fatal error; nothing after it runs
    StepFailed {
        index: usize,
        step: StepKind,
        error: String,
    },

    /// Run finished successfully
    Completed {
        command_count: usize,
        tolerated_count: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
